//! Configuration types shared by the split collector and its collaborators.

use serde::{Deserialize, Serialize};

/// Scope flag that gates per-source rate collection.
pub const USE_SOURCE_ORIGIN_FLAG: &str = "shipping/rates_collector/use_inventory_source_origin";

/// How per-source sub-requests are handed to the inner rate collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum QuoteDispatch {
    /// Issue one sub-request at a time, in source group order.
    #[default]
    Sequential,
    /// Issue all sub-requests concurrently. Each call owns its result and the
    /// results are reconciled afterwards in source group order.
    Concurrent,
}

/// Configuration for the source-split collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Source selection algorithm code. `None` defers to the allocation
    /// service's default algorithm.
    pub algorithm_code: Option<String>,
    /// Dispatch mode for per-source quoting calls.
    pub dispatch: QuoteDispatch,
}

/// Active configuration of a single carrier, as far as error visibility goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierSettings {
    /// Whether the carrier is enabled.
    pub active: bool,
    /// Whether the carrier shows its method as unavailable instead of hiding it.
    pub show_method_errors: bool,
}

impl CarrierSettings {
    /// Construct settings for an active carrier.
    #[must_use]
    pub const fn active(show_method_errors: bool) -> Self {
        Self {
            active: true,
            show_method_errors,
        }
    }

    /// Construct settings for a disabled carrier.
    #[must_use]
    pub const fn inactive() -> Self {
        Self {
            active: false,
            show_method_errors: false,
        }
    }

    /// Whether error entries from this carrier should reach the caller.
    #[must_use]
    pub const fn admits_errors(self) -> bool {
        self.active && self.show_method_errors
    }
}
