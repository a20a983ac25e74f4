use std::collections::{BTreeMap, HashMap};

use crate::types::{Decimal, SourceSelectionEntry};

/// The items one inventory source ships for an order: `sku -> qty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup {
    source_code: String,
    items: BTreeMap<String, Decimal>,
}

impl SourceGroup {
    /// Build a group from explicit parts.
    pub fn new(source_code: impl Into<String>, items: BTreeMap<String, Decimal>) -> Self {
        Self {
            source_code: source_code.into(),
            items,
        }
    }

    /// Source code this group ships from.
    #[must_use]
    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    /// Allocated quantity per SKU.
    #[must_use]
    pub const fn items(&self) -> &BTreeMap<String, Decimal> {
        &self.items
    }

    /// Allocated quantity of `sku`, if this group ships it.
    #[must_use]
    pub fn qty(&self, sku: &str) -> Option<Decimal> {
        self.items.get(sku).copied()
    }
}

/// An allocation decision grouped by source, plus the total quantity that must
/// ship per SKU.
///
/// Groups keep the order in which their source code was first encountered so
/// downstream sub-requests and result packages are emitted in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceAllocation {
    groups: Vec<SourceGroup>,
    required: BTreeMap<String, Decimal>,
}

impl SourceAllocation {
    /// Group allocation rows by source code in a single pass.
    ///
    /// - Repeated `(source, sku)` rows are summed into the group.
    /// - `required[sku]` sums `qty_to_deduct` across all sources.
    /// - Rows with a non-positive quantity count toward `required` but never
    ///   open a group, so a source with nothing to ship gets no sub-request.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SourceSelectionEntry>,
    {
        let mut groups: Vec<SourceGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut required: BTreeMap<String, Decimal> = BTreeMap::new();

        for entry in entries {
            *required.entry(entry.sku.clone()).or_insert(Decimal::ZERO) += entry.qty_to_deduct;

            if entry.qty_to_deduct <= Decimal::ZERO {
                continue;
            }
            let slot = *index.entry(entry.source_code.clone()).or_insert_with(|| {
                groups.push(SourceGroup::new(entry.source_code.clone(), BTreeMap::new()));
                groups.len() - 1
            });
            *groups[slot]
                .items
                .entry(entry.sku)
                .or_insert(Decimal::ZERO) += entry.qty_to_deduct;
        }

        Self { groups, required }
    }

    /// Groups in first-encounter order.
    #[must_use]
    pub fn groups(&self) -> &[SourceGroup] {
        &self.groups
    }

    /// Total quantity per SKU across all sources.
    #[must_use]
    pub const fn required(&self) -> &BTreeMap<String, Decimal> {
        &self.required
    }

    /// Look up the group for `source_code`.
    #[must_use]
    pub fn group(&self, source_code: &str) -> Option<&SourceGroup> {
        self.groups.iter().find(|g| g.source_code == source_code)
    }

    /// True when no source ships anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
