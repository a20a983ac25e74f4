use std::sync::Arc;

use sourcerate_core::{Middleware, RateCollector, USE_SOURCE_ORIGIN_FLAG};

use crate::collector::{SourceSplitCollector, SplitParts};

/// Middleware that wraps any rate collector in a [`SourceSplitCollector`].
///
/// Built with [`SourceSplitBuilder::into_layer`](crate::SourceSplitBuilder::into_layer),
/// so every collaborator is validated before the layer is applied.
pub struct SourceSplitLayer {
    parts: SplitParts,
}

impl SourceSplitLayer {
    pub(crate) const fn new(parts: SplitParts) -> Self {
        Self { parts }
    }
}

impl Middleware for SourceSplitLayer {
    fn apply(self: Box<Self>, inner: Arc<dyn RateCollector>) -> Arc<dyn RateCollector> {
        Arc::new(SourceSplitCollector {
            inner,
            parts: self.parts,
        })
    }

    fn name(&self) -> &'static str {
        "SourceSplitCollector"
    }

    fn config_json(&self) -> serde_json::Value {
        let mut cfg = serde_json::to_value(&self.parts.cfg).unwrap_or_default();
        cfg["flag"] = USE_SOURCE_ORIGIN_FLAG.into();
        cfg["resolved_algorithm"] = self.parts.selection.resolve_algorithm(None).into();
        cfg
    }
}
