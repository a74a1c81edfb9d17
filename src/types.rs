//! Order and provider records handed in by the caller.

use serde::{Deserialize, Serialize};

/// States where Road-Tec is allowed to serve orders on its own.
pub const WEST_COAST_STATES: [&str; 3] = ["WA", "OR", "CA"];

/// Whether a state abbreviation belongs to the West Coast set.
///
/// Matching is exact: `"wa"` or `" WA"` are not West Coast.
pub fn is_west_coast(us_state_abbr: &str) -> bool {
    WEST_COAST_STATES.contains(&us_state_abbr)
}

/// An order awaiting a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Two-letter U.S. state code (e.g., "WA")
    pub us_state_abbr: String,
}

impl Order {
    pub fn new(us_state_abbr: impl Into<String>) -> Self {
        Self {
            us_state_abbr: us_state_abbr.into(),
        }
    }
}

/// A candidate provider for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Provider name, e.g. "Road-Tec"
    pub name: String,
}

impl Provider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The recognized kind of this provider, if any.
    pub fn kind(&self) -> Option<ProviderKind> {
        ProviderKind::from_name(&self.name)
    }
}

/// The providers the selector knows how to rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    RoadTec,
    Abc,
    HomeEntry,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::RoadTec,
        ProviderKind::Abc,
        ProviderKind::HomeEntry,
    ];

    /// Exact, case-sensitive name match.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The provider name as it appears on the wire.
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::RoadTec => "Road-Tec",
            ProviderKind::Abc => "ABC",
            ProviderKind::HomeEntry => "Home Entry",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_west_coast_set_is_exact() {
        for state in ["WA", "OR", "CA"] {
            assert!(is_west_coast(state), "{} should be West Coast", state);
        }
        for state in ["NY", "TX", "NV", "AK", "HI", "wa", "Ca", " WA", "WA ", ""] {
            assert!(!is_west_coast(state), "{:?} should not be West Coast", state);
        }
    }

    #[test]
    fn test_provider_kind_from_name() {
        assert_eq!(ProviderKind::from_name("Road-Tec"), Some(ProviderKind::RoadTec));
        assert_eq!(ProviderKind::from_name("ABC"), Some(ProviderKind::Abc));
        assert_eq!(
            ProviderKind::from_name("Home Entry"),
            Some(ProviderKind::HomeEntry)
        );
        assert_eq!(ProviderKind::from_name("road-tec"), None);
        assert_eq!(ProviderKind::from_name("HomeEntry"), None);
        assert_eq!(ProviderKind::from_name("XYZ"), None);
    }

    #[test]
    fn test_provider_kind_name_roundtrip() {
        for kind in ProviderKind::ALL {
            assert_eq!(Provider::new(kind.name()).kind(), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_order_and_provider_deserialize() {
        let order: Order = serde_json::from_str(r#"{"us_state_abbr":"OR"}"#).unwrap();
        assert_eq!(order, Order::new("OR"));

        let provider: Provider = serde_json::from_str(r#"{"name":"Home Entry"}"#).unwrap();
        assert_eq!(provider.kind(), Some(ProviderKind::HomeEntry));
    }

    #[test]
    fn test_order_and_provider_serialize() {
        let json = serde_json::to_string(&Order::new("WA")).unwrap();
        assert_eq!(json, r#"{"us_state_abbr":"WA"}"#);

        let provider = Provider::new("Road-Tec");
        let encoded = toml::to_string(&provider).unwrap();
        assert_eq!(encoded.trim(), r#"name = "Road-Tec""#);
        let decoded: Provider = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, provider);
    }
}
