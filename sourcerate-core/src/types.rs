//! Re-export of foundational types from `sourcerate-types`.
// Consolidated re-exports so downstream crates can depend on `sourcerate-core` only

pub use sourcerate_types::{Capability, SourceRateError};

pub use sourcerate_types::{CarrierSettings, QuoteDispatch, SplitConfig, USE_SOURCE_ORIGIN_FLAG};

pub use sourcerate_types::{
    Address, AllocationRequest, CartItem, Destination, Origin, RateRequest, ShippableItem, Source,
    SourceSelectionEntry,
};

pub use sourcerate_types::{Rate, RateEntry, RateError, RatePackage, RateResult};

pub use sourcerate_types::Decimal;
