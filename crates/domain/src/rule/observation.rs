// crates/domain/src/rule/observation.rs
use serde::{Deserialize, Serialize};
use size_guard_shared_kernel::ByteCount;

/// What to do when the size of a path cannot be looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedSizePolicy {
    /// Treat the path as an empty resource and compare zero against the bounds.
    #[default]
    AssumeEmpty,
    /// The rule is not satisfied.
    Reject,
}

/// How an input's byte count was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Observation {
    Measured { bytes: ByteCount },
    /// Lookup failed and [`UnresolvedSizePolicy::AssumeEmpty`] substituted zero.
    AssumedEmpty { reason: String },
    /// Lookup failed under [`UnresolvedSizePolicy::Reject`].
    Unresolved { reason: String },
    Unsupported { input: String },
}

impl Observation {
    /// The byte count compared against the bounds; `None` means the rule fails outright.
    #[must_use]
    pub fn bytes(&self) -> Option<ByteCount> {
        match self {
            Self::Measured { bytes } => Some(*bytes),
            Self::AssumedEmpty { .. } => Some(ByteCount::zero()),
            Self::Unresolved { .. } | Self::Unsupported { .. } => None,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::AssumedEmpty { .. })
    }
}
