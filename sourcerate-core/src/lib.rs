//! sourcerate-core
//!
//! Core types, traits, and algorithms shared across the sourcerate workspace.
//!
//! - `types`: re-exported data transfer objects (requests, sources, rates).
//! - `collaborator`: the `RateCollector` trait and the other external contracts.
//! - `split`: helpers that split an order by inventory source and merge the
//!   per-source rate quotes back into a single result.
#![warn(missing_docs)]

/// External collaborator contracts.
pub mod collaborator;
/// Middleware trait implemented by rate collector wrappers.
pub mod middleware;
/// Per-source request splitting, reconciliation and merging.
pub mod split;
pub mod types;

pub use collaborator::{
    CarrierConfig, RateCollector, ScopeConfig, SourceRepository, SourceSelectionService,
    StockResolver,
};
pub use middleware::Middleware;
pub use split::allocation::{SourceAllocation, SourceGroup};
pub use split::items::{build_allocation_request, extract_shippable_items};
pub use split::merge::{SourceQuote, admits_error, merge_source_results};
pub use split::reconcile::{CompletedMethods, MethodReconciler};
pub use split::request::SourceRateRequest;
pub use types::*;
