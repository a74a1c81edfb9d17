//! Router module for provider selection.
//!
//! This module picks the provider that serves an order based on:
//! - Which recognized providers are among the candidates
//! - Whether the order ships to a West Coast state
//! - Configured handling of duplicate candidates

mod selector;

pub use selector::{select_provider, Selector};
