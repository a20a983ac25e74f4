//! Splitting an order by inventory source and merging the quotes back.
//!
//! Modules include:
//! - `items`: shippable item extraction and allocation request construction
//! - `allocation`: group allocation rows by source and total the required quantities
//! - `request`: derive a source-specific rate request from the original
//! - `reconcile`: track which shipping methods cover every source group
//! - `merge`: assemble the final packaged result
/// Allocation grouping by source code.
pub mod allocation;
/// Shippable item extraction and allocation request building.
pub mod items;
/// Final result assembly.
pub mod merge;
/// Cross-source method completeness tracking.
pub mod reconcile;
/// Source-specific rate request construction.
pub mod request;
