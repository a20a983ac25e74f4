use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the sourcerate workspace.
///
/// This wraps missing collaborators, argument validation errors,
/// collaborator-tagged failures and not-found conditions such as an unknown
/// inventory source code.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceRateError {
    /// A required collaborator was not configured for the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "source-lookup").
        capability: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual collaborator returned an error.
    #[error("{collaborator} failed: {msg}")]
    Collaborator {
        /// Collaborator name that failed.
        collaborator: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "source eu-west".
        what: String,
    },
}

impl SourceRateError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Collaborator` error with the collaborator name and message.
    pub fn collaborator(collaborator: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Collaborator {
            collaborator: collaborator.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true if the error originates from an external collaborator
    /// (allocation service, stock resolver, source repository or inner
    /// collector) rather than from local validation.
    #[must_use]
    pub const fn is_collaborator_fault(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Collaborator { .. })
    }

    /// Attribute an error to the collaborator that produced it.
    ///
    /// Variants that already identify their origin (`NotFound`, `Collaborator`)
    /// pass through unchanged; everything else is wrapped as a `Collaborator`
    /// failure carrying the original message.
    #[must_use]
    pub fn tag(self, collaborator: &str) -> Self {
        match self {
            e @ (Self::NotFound { .. } | Self::Collaborator { .. }) => e,
            other => Self::Collaborator {
                collaborator: collaborator.to_string(),
                msg: other.to_string(),
            },
        }
    }
}
