use std::collections::HashMap;

use async_trait::async_trait;

use crate::types::{
    AllocationRequest, CarrierSettings, RateRequest, RateResult, Source, SourceRateError,
    SourceSelectionEntry,
};

/// A rate collector quotes every active carrier for one rate request.
///
/// The same contract is used for the unsplit request and for every
/// source-specific sub-request, so a wrapper that splits by source is a
/// drop-in replacement for the collector it wraps. Each call returns a fresh,
/// owned result; implementations must not leak entries between calls.
#[async_trait]
pub trait RateCollector: Send + Sync {
    /// A stable identifier for logging and error attribution.
    fn name(&self) -> &'static str;

    /// Collect rates for the given request.
    async fn collect_rates(&self, request: &RateRequest) -> Result<RateResult, SourceRateError>;
}

/// Source allocation service: decides which source ships which quantity.
#[async_trait]
pub trait SourceSelectionService: Send + Sync {
    /// Run the allocation algorithm identified by `algorithm_code`.
    async fn allocate(
        &self,
        request: &AllocationRequest,
        algorithm_code: &str,
    ) -> Result<Vec<SourceSelectionEntry>, SourceRateError>;

    /// Algorithm used when the caller does not name one.
    fn default_algorithm_code(&self) -> String;
}

/// Resolves the stock assigned to a website.
#[async_trait]
pub trait StockResolver: Send + Sync {
    /// Return the stock identifier for `website_id`.
    async fn stock_for_website(&self, website_id: u32) -> Result<i64, SourceRateError>;
}

/// Lookup of inventory sources by code.
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// Fetch a source.
    ///
    /// # Errors
    /// Returns `SourceRateError::NotFound` when `source_code` is unknown.
    async fn get(&self, source_code: &str) -> Result<Source, SourceRateError>;
}

/// Scope configuration flags, read once per rate collection.
pub trait ScopeConfig: Send + Sync {
    /// Whether the flag at `path` is set.
    fn is_set_flag(&self, path: &str) -> bool;
}

impl ScopeConfig for bool {
    fn is_set_flag(&self, _path: &str) -> bool {
        *self
    }
}

impl ScopeConfig for HashMap<String, bool> {
    fn is_set_flag(&self, path: &str) -> bool {
        self.get(path).copied().unwrap_or(false)
    }
}

/// Per-carrier configuration lookup.
pub trait CarrierConfig: Send + Sync {
    /// Settings for `carrier_code`, or `None` if the carrier is unknown.
    fn carrier_settings(&self, carrier_code: &str) -> Option<CarrierSettings>;
}

impl CarrierConfig for HashMap<String, CarrierSettings> {
    fn carrier_settings(&self, carrier_code: &str) -> Option<CarrierSettings> {
        self.get(carrier_code).copied()
    }
}
