//! Rate quotes and the result envelopes returned by rate collectors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A successfully quoted shipping method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// Carrier code, e.g. `flatrate`.
    pub carrier: String,
    /// Carrier display title.
    pub carrier_title: String,
    /// Method code, e.g. `flatrate` or `bestway`.
    pub method: String,
    /// Method display title.
    pub method_title: String,
    /// Price charged to the buyer.
    pub price: Decimal,
    /// Cost to the merchant.
    pub cost: Decimal,
}

/// A carrier that could not quote the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateError {
    /// Carrier code.
    pub carrier: String,
    /// Carrier display title.
    pub carrier_title: String,
    /// Reason shown to the buyer when the error is surfaced.
    pub message: String,
}

/// One entry of a rate result: a quoted method or a carrier failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateEntry {
    /// Successful quote.
    Rate(Rate),
    /// Carrier failure.
    Error(RateError),
}

impl RateEntry {
    /// Carrier code of either variant.
    #[must_use]
    pub fn carrier(&self) -> &str {
        match self {
            Self::Rate(r) => &r.carrier,
            Self::Error(e) => &e.carrier,
        }
    }

    /// Method code for successful quotes.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        match self {
            Self::Rate(r) => Some(&r.method),
            Self::Error(_) => None,
        }
    }

    /// True for error entries.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<Rate> for RateEntry {
    fn from(r: Rate) -> Self {
        Self::Rate(r)
    }
}

impl From<RateError> for RateEntry {
    fn from(e: RateError) -> Self {
        Self::Error(e)
    }
}

/// A group of rate entries for one shipment package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePackage {
    /// Inventory source this package ships from, when split by source.
    pub source_code: Option<String>,
    /// Number of identical packages the entries apply to.
    pub count: u32,
    /// Entries in quoting order.
    pub entries: Vec<RateEntry>,
}

impl RatePackage {
    /// A single package not tied to any inventory source.
    #[must_use]
    pub const fn unsourced(entries: Vec<RateEntry>) -> Self {
        Self {
            source_code: None,
            count: 1,
            entries,
        }
    }

    /// A single package shipping from `source_code`.
    pub fn from_source(source_code: impl Into<String>, entries: Vec<RateEntry>) -> Self {
        Self {
            source_code: Some(source_code.into()),
            count: 1,
            entries,
        }
    }
}

/// Result of a rate collection: one or more packages of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResult {
    /// Packages in collection order.
    pub packages: Vec<RatePackage>,
}

impl RateResult {
    /// An empty result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            packages: Vec::new(),
        }
    }

    /// A result holding a single unsourced package.
    #[must_use]
    pub fn single(entries: Vec<RateEntry>) -> Self {
        Self {
            packages: vec![RatePackage::unsourced(entries)],
        }
    }

    /// Append a package.
    pub fn push_package(&mut self, package: RatePackage) {
        self.packages.push(package);
    }

    /// All entries across packages, in order.
    pub fn all_rates(&self) -> impl Iterator<Item = &RateEntry> {
        self.packages.iter().flat_map(|p| p.entries.iter())
    }

    /// Consume the result, returning all entries across packages in order.
    #[must_use]
    pub fn into_entries(self) -> Vec<RateEntry> {
        self.packages.into_iter().flat_map(|p| p.entries).collect()
    }

    /// Successful quotes only.
    pub fn rates(&self) -> impl Iterator<Item = &Rate> {
        self.all_rates().filter_map(|e| match e {
            RateEntry::Rate(r) => Some(r),
            RateEntry::Error(_) => None,
        })
    }

    /// Error entries only.
    pub fn errors(&self) -> impl Iterator<Item = &RateError> {
        self.all_rates().filter_map(|e| match e {
            RateEntry::Error(err) => Some(err),
            RateEntry::Rate(_) => None,
        })
    }

    /// True when no package carries any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.iter().all(|p| p.entries.is_empty())
    }
}
