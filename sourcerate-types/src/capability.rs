use core::fmt;
use serde::{Deserialize, Serialize};

/// Capability labels for collaborator wiring, errors, and telemetry.
///
/// Each label names one external collaborator contract the split pipeline
/// depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Rate collection for a single (possibly source-specific) request.
    CollectRates,
    /// Source allocation for a set of shippable items.
    SourceSelection,
    /// Stock resolution by website identifier.
    StockResolution,
    /// Inventory source lookup by source code.
    SourceLookup,
    /// Scope configuration flags.
    ScopeConfig,
    /// Per-carrier configuration.
    CarrierConfig,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CollectRates => "collect-rates",
            Self::SourceSelection => "source-selection",
            Self::StockResolution => "stock-resolution",
            Self::SourceLookup => "source-lookup",
            Self::ScopeConfig => "scope-config",
            Self::CarrierConfig => "carrier-config",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
