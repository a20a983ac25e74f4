use crate::collaborator::CarrierConfig;
use crate::split::reconcile::CompletedMethods;
use crate::types::{RateEntry, RateError, RatePackage, RateResult};

/// Raw quote entries returned for one source's sub-request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceQuote {
    /// Source the sub-request shipped from.
    pub source_code: String,
    /// Entries in the order the rate collector returned them.
    pub entries: Vec<RateEntry>,
}

/// Whether a carrier failure should be shown to the buyer.
///
/// Errors are admitted only when the carrier is known, active, and configured
/// to show unavailable methods. An unknown carrier is treated as not admitted.
#[must_use]
pub fn admits_error(error: &RateError, carriers: &dyn CarrierConfig) -> bool {
    carriers
        .carrier_settings(&error.carrier)
        .is_some_and(|s| s.admits_errors())
}

/// Assemble the final result from per-source quotes.
///
/// Emits one package per source quote, in input order. Each package keeps
/// the rates whose method is in `completed` and the errors admitted by the
/// carrier configuration; everything else is dropped.
pub fn merge_source_results<I>(
    quotes: I,
    completed: &CompletedMethods,
    carriers: &dyn CarrierConfig,
) -> RateResult
where
    I: IntoIterator<Item = SourceQuote>,
{
    let mut result = RateResult::new();
    for quote in quotes {
        let entries: Vec<RateEntry> = quote
            .entries
            .into_iter()
            .filter(|entry| match entry {
                RateEntry::Rate(rate) => completed.contains(&rate.method),
                RateEntry::Error(error) => {
                    let admitted = admits_error(error, carriers);
                    if !admitted {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            carrier = %error.carrier,
                            source = %quote.source_code,
                            "suppressing carrier error"
                        );
                    }
                    admitted
                }
            })
            .collect();
        result.push_package(RatePackage::from_source(quote.source_code, entries));
    }
    result
}
