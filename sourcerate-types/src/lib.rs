//! Sourcerate data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod cart;
mod config;
mod error;
mod inventory;
mod rate;
mod request;

pub use capability::Capability;
pub use cart::{CartItem, ShippableItem};
pub use config::{CarrierSettings, QuoteDispatch, SplitConfig, USE_SOURCE_ORIGIN_FLAG};
pub use error::SourceRateError;
pub use inventory::{Address, AllocationRequest, Source, SourceSelectionEntry};
pub use rate::{Rate, RateEntry, RateError, RatePackage, RateResult};
pub use request::{Destination, Origin, RateRequest};

pub use rust_decimal::Decimal;
