//! Provider selection logic.

use crate::config::{DuplicatePolicy, SelectionConfig};
use crate::error::{Error, MultipleReason, Result, WrongReason};
use crate::types::{is_west_coast, Order, Provider, ProviderKind};

/// Most candidates a caller may supply for one order.
const MAX_CANDIDATES: usize = 2;

/// Select a provider for `order` using the default rules.
///
/// `None` stands for an absent provider list and is treated like an empty one.
pub fn select_provider<'a>(
    order: &Order,
    providers: Option<&'a [Provider]>,
) -> Result<&'a Provider> {
    Selector::default().select(order, providers)
}

/// Recognized candidates found in one pass over the input.
#[derive(Debug, Default)]
struct Candidates<'a> {
    road_tec: Option<&'a Provider>,
    abc: Option<&'a Provider>,
    home_entry: Option<&'a Provider>,
}

impl<'a> Candidates<'a> {
    fn classify(providers: &'a [Provider], duplicates: DuplicatePolicy) -> Result<Self> {
        let mut found = Self::default();

        for provider in providers {
            let Some(kind) = provider.kind() else {
                tracing::debug!(provider = %provider.name, "Ignoring unrecognized provider");
                continue;
            };

            let slot = match kind {
                ProviderKind::RoadTec => &mut found.road_tec,
                ProviderKind::Abc => &mut found.abc,
                ProviderKind::HomeEntry => &mut found.home_entry,
            };

            if slot.is_some() && duplicates == DuplicatePolicy::Reject {
                return Err(Error::MultipleProviders {
                    reason: MultipleReason::DuplicateName { name: kind },
                });
            }
            *slot = Some(provider);
        }

        Ok(found)
    }
}

/// Selector for picking one provider per order.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: SelectionConfig,
}

impl Selector {
    /// Create a new selector with the given selection rules.
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Select the provider that should serve `order`.
    ///
    /// The returned reference points into `providers`. Rules are checked in a
    /// fixed order and the first one violated decides the error:
    /// 1. no candidates: `MissingProviders`
    /// 2. more than two candidates: `MultipleProviders`
    /// 3. the decision table over Road-Tec, ABC and Home Entry
    pub fn select<'a>(
        &self,
        order: &Order,
        providers: Option<&'a [Provider]>,
    ) -> Result<&'a Provider> {
        let west_coast = is_west_coast(&order.us_state_abbr);

        let selected = self.pick(providers, west_coast).inspect_err(|e| {
            tracing::debug!(
                state = %order.us_state_abbr,
                west_coast,
                reason = %e,
                "No provider selected"
            );
        })?;

        tracing::debug!(
            state = %order.us_state_abbr,
            west_coast,
            provider = %selected.name,
            "Selected provider"
        );
        Ok(selected)
    }

    fn pick<'a>(
        &self,
        providers: Option<&'a [Provider]>,
        west_coast: bool,
    ) -> Result<&'a Provider> {
        let providers = match providers {
            Some(providers) if !providers.is_empty() => providers,
            _ => return Err(Error::MissingProviders),
        };

        if providers.len() > MAX_CANDIDATES {
            return Err(Error::MultipleProviders {
                reason: MultipleReason::TooMany {
                    count: providers.len(),
                },
            });
        }

        let found = Candidates::classify(providers, self.config.duplicate_names)?;
        decide(&found, west_coast)
    }

    /// Select from a plain slice of candidates.
    pub fn select_from<'a>(
        &self,
        order: &Order,
        providers: &'a [Provider],
    ) -> Result<&'a Provider> {
        self.select(order, Some(providers))
    }

    /// The rules this selector applies.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }
}

/// The decision table over the recognized candidates.
fn decide<'a>(found: &Candidates<'a>, west_coast: bool) -> Result<&'a Provider> {
    match (found.road_tec, found.abc, found.home_entry) {
        (None, None, None) => Err(Error::WrongProvider {
            reason: WrongReason::NoneRecognized,
        }),

        // Road-Tec outranks ABC on the West Coast; Home Entry is not considered
        (Some(road_tec), Some(abc), _) => Ok(if west_coast { road_tec } else { abc }),

        (Some(_), None, Some(_)) => Err(Error::MultipleProviders {
            reason: MultipleReason::RoadTecWithHomeEntry,
        }),
        (Some(road_tec), None, None) if west_coast => Ok(road_tec),
        (Some(_), None, None) => Err(Error::WrongProvider {
            reason: WrongReason::RoadTecOutsideWestCoast,
        }),

        (None, Some(_), Some(_)) => Err(Error::MultipleProviders {
            reason: MultipleReason::AbcWithHomeEntry,
        }),
        (None, Some(abc), None) => Ok(abc),

        (None, None, Some(_)) => Err(Error::WrongProvider {
            reason: WrongReason::HomeEntryOnly,
        }),
    }
}
