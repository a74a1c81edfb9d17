//! Error types for provider selection.

use crate::types::ProviderKind;

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for provider-by-state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No providers supplied")]
    MissingProviders,

    #[error("Multiple providers: {reason}")]
    MultipleProviders { reason: MultipleReason },

    #[error("Wrong provider: {reason}")]
    WrongProvider { reason: WrongReason },

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Which rule produced a `MultipleProviders` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultipleReason {
    /// More than two candidates were supplied
    TooMany { count: usize },
    /// Road-Tec and Home Entry without ABC
    RoadTecWithHomeEntry,
    /// ABC and Home Entry without Road-Tec
    AbcWithHomeEntry,
    /// A recognized name appeared twice while duplicates are rejected
    DuplicateName { name: ProviderKind },
}

impl std::fmt::Display for MultipleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipleReason::TooMany { count } => {
                write!(f, "{} candidates supplied, at most 2 allowed", count)
            }
            MultipleReason::RoadTecWithHomeEntry => {
                write!(f, "Road-Tec cannot be paired with Home Entry")
            }
            MultipleReason::AbcWithHomeEntry => write!(f, "ABC cannot be paired with Home Entry"),
            MultipleReason::DuplicateName { name } => {
                write!(f, "'{}' supplied more than once", name)
            }
        }
    }
}

/// Which rule produced a `WrongProvider` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrongReason {
    /// None of the candidates has a recognized name
    NoneRecognized,
    /// Road-Tec alone, for an order outside the West Coast
    RoadTecOutsideWestCoast,
    /// Home Entry is the only recognized candidate
    HomeEntryOnly,
}

impl std::fmt::Display for WrongReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WrongReason::NoneRecognized => write!(f, "no recognized provider supplied"),
            WrongReason::RoadTecOutsideWestCoast => {
                write!(f, "Road-Tec alone only serves West Coast orders")
            }
            WrongReason::HomeEntryOnly => write!(f, "Home Entry cannot be selected on its own"),
        }
    }
}
