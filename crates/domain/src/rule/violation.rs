// crates/domain/src/rule/violation.rs
use serde::Serialize;
use size_guard_shared_kernel::ByteCount;
use thiserror::Error;

/// Explains why an input did not satisfy a size constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SizeViolation {
    #[error("{input} must be between {min} and {max}")]
    NotBetween {
        input: String,
        min: String,
        max: String,
        observed: ByteCount,
    },

    #[error("{input} must be greater than {min}")]
    TooSmall {
        input: String,
        min: String,
        observed: ByteCount,
    },

    #[error("{input} must be lower than {max}")]
    TooLarge {
        input: String,
        max: String,
        observed: ByteCount,
    },

    #[error("{input} has no resolvable size: {reason}")]
    Unresolved { input: String, reason: String },

    #[error("{input} is not a file size input")]
    Unsupported { input: String },
}

impl SizeViolation {
    /// Byte count that was compared, if one was obtained.
    #[must_use]
    pub fn observed(&self) -> Option<ByteCount> {
        match self {
            Self::NotBetween { observed, .. }
            | Self::TooSmall { observed, .. }
            | Self::TooLarge { observed, .. } => Some(*observed),
            Self::Unresolved { .. } | Self::Unsupported { .. } => None,
        }
    }
}
