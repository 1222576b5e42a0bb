// crates/shared-kernel/src/value_objects/byte_count.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Observed length of a file-like resource, in bytes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct ByteCount(u64);

impl ByteCount {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Value used when comparing against canonical bounds.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Returns a base-2 human readable representation (KiB .. EiB).
    #[allow(clippy::cast_precision_loss)]
    pub fn to_human(self) -> String {
        const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
        let bytes = self.bytes();
        if bytes < 1024 {
            return format!("{bytes} B");
        }

        let mut value = bytes as f64 / 1024.0;
        let mut unit = UNITS[0];
        for next in &UNITS[1..] {
            if value < 1024.0 {
                break;
            }
            value /= 1024.0;
            unit = next;
        }
        format!("{value:.1} {unit}")
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<ByteCount> for u64 {
    fn from(size: ByteCount) -> Self {
        size.bytes()
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
