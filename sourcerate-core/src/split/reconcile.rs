use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::split::allocation::SourceGroup;
use crate::types::{Decimal, RateEntry};

/// Shipping methods quoted with full quantity coverage across every source group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedMethods(BTreeSet<String>);

impl CompletedMethods {
    /// Whether `method` is usable for the whole order.
    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.0.contains(method)
    }

    /// Completed method codes in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True when no method covers the whole order.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CompletedMethods {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Tracks, per shipping method, how much of each SKU has been covered by
/// source sub-requests that quoted that method.
///
/// Feed it one source group's quote entries at a time via [`observe`].
/// A successful entry adds the group's allocated quantities to the method's
/// tally, once per group even if several carriers return the same method
/// code. A method is marked complete when its tally equals the required
/// quantity for every SKU the order ships, which happens exactly when every
/// source group has quoted it. Completion is append-only for the lifetime of
/// the reconciler.
///
/// Error entries never contribute, so a method that fails for any source
/// shipping part of a SKU can never reach the required total for that SKU.
///
/// [`observe`]: MethodReconciler::observe
#[derive(Debug, Clone)]
pub struct MethodReconciler {
    required: BTreeMap<String, Decimal>,
    collected: HashMap<String, BTreeMap<String, Decimal>>,
    complete: BTreeSet<String>,
}

impl MethodReconciler {
    /// Start reconciling against the per-SKU required quantities.
    #[must_use]
    pub fn new(required: BTreeMap<String, Decimal>) -> Self {
        Self {
            required,
            collected: HashMap::new(),
            complete: BTreeSet::new(),
        }
    }

    /// Account for the quote entries returned for `group`'s sub-request.
    pub fn observe(&mut self, group: &SourceGroup, entries: &[RateEntry]) {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for entry in entries {
            let Some(method) = entry.method() else {
                continue;
            };
            if !seen.insert(method) {
                continue;
            }

            let tally = self.collected.entry(method.to_string()).or_default();
            for (sku, qty) in group.items() {
                *tally.entry(sku.clone()).or_insert(Decimal::ZERO) += *qty;
            }

            let covers_order = self
                .required
                .iter()
                .filter(|(_, need)| **need > Decimal::ZERO)
                .all(|(sku, need)| tally.get(sku) == Some(need));

            if covers_order && self.complete.insert(method.to_string()) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    method = %method,
                    source = %group.source_code(),
                    "shipping method covers every source"
                );
            }
        }
    }

    /// Whether `method` has been marked complete so far.
    #[must_use]
    pub fn is_complete(&self, method: &str) -> bool {
        self.complete.contains(method)
    }

    /// Quantity of `sku` collected so far for `method`.
    #[must_use]
    pub fn collected(&self, method: &str, sku: &str) -> Decimal {
        self.collected
            .get(method)
            .and_then(|t| t.get(sku))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Finish the batch and return the completed methods.
    #[must_use]
    pub fn finish(self) -> CompletedMethods {
        CompletedMethods(self.complete)
    }
}
