//! Middleware trait for wrapping `RateCollector` implementations.

use std::sync::Arc;

use crate::collaborator::RateCollector;

/// Trait implemented by rate collector middleware layers.
///
/// A middleware consumes an inner `RateCollector` and returns a wrapped
/// collector that augments its behavior (e.g., splitting by inventory source).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner collector and return the wrapped collector.
    fn apply(self: Box<Self>, inner: Arc<dyn RateCollector>) -> Arc<dyn RateCollector>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
