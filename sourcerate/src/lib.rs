//! Sourcerate collects shipping rates per inventory source.
//!
//! Overview
//! - Wraps an existing `RateCollector` so the split path is a drop-in replacement.
//! - Splits the order by the sources chosen by a `SourceSelectionService`.
//! - Quotes each source-specific sub-request through the wrapped collector.
//! - Keeps only the shipping methods quoted by every source for its full
//!   allocation, plus the carrier errors the carrier configuration shows.
//!
//! Key behaviors
//! - Pass-through: with the scope flag unset, the wrapped collector's result is
//!   returned verbatim.
//! - Collaborator failures (stock resolution, source selection, unknown source,
//!   wrapped collector errors) abort the whole collection.
//! - Dispatch: `Sequential` quotes one source at a time in allocation order;
//!   `Concurrent` fans the calls out and reconciles the results afterwards in
//!   the same order, producing the same output.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use sourcerate::{QuoteDispatch, SourceSplitCollector};
//!
//! let collector = SourceSplitCollector::builder()
//!     .with_inner(inner)
//!     .source_selection(selection)
//!     .stock_resolver(stocks)
//!     .source_repository(sources)
//!     .scope_config(scope)
//!     .carrier_config(carriers)
//!     .dispatch(QuoteDispatch::Concurrent)
//!     .build()?;
//!
//! let rates = collector.collect_rates(&request).await?;
//! for pkg in &rates.packages {
//!     println!("{:?}: {} entries", pkg.source_code, pkg.entries.len());
//! }
//! ```
//!
//! Stacking as middleware:
//! ```rust,ignore
//! use sourcerate_core::Middleware;
//!
//! let layer = SourceSplitCollector::builder()
//!     .source_selection(selection)
//!     .stock_resolver(stocks)
//!     .source_repository(sources)
//!     .scope_config(scope)
//!     .carrier_config(carriers)
//!     .into_layer()?;
//! let wrapped = Box::new(layer).apply(inner);
//! ```
#![warn(missing_docs)]

mod collector;
mod layer;
mod selection;

pub use collector::{SourceSplitBuilder, SourceSplitCollector, tag_err};
pub use layer::SourceSplitLayer;
pub use selection::SourceSelectionProvider;

pub use sourcerate_core::{
    Capability, CarrierSettings, QuoteDispatch, RateCollector, RateResult, SourceRateError,
    SplitConfig, USE_SOURCE_ORIGIN_FLAG,
};
