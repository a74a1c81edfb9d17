//! provider-by-state - pick the service provider for an order
//!
//! This library provides the provider selection rules, the order and
//! provider records they operate on, and their configuration.

pub mod config;
pub mod error;
pub mod router;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use router::{select_provider, Selector};
pub use types::{Order, Provider, ProviderKind};
