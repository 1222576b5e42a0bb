// crates/domain/src/rule/input.rs
use std::path::{Path, PathBuf};

use serde_json::Value;
use size_guard_shared_kernel::ByteCount;

/// Anything that already knows its own length in bytes.
pub trait ByteLength {
    fn byte_len(&self) -> u64;
}

impl ByteLength for std::fs::Metadata {
    fn byte_len(&self) -> u64 {
        self.len()
    }
}

impl ByteLength for [u8] {
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }
}

impl ByteLength for Vec<u8> {
    fn byte_len(&self) -> u64 {
        self.as_slice().byte_len()
    }
}

impl ByteLength for ByteCount {
    fn byte_len(&self) -> u64 {
        self.bytes()
    }
}

/// The value a size rule is asked to judge.
///
/// Strings are interpreted as filesystem paths; only a resource or a path can
/// ever satisfy the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeInput {
    /// A resource whose length was read when the input was built.
    Resource(ByteCount),
    /// A path whose length is looked up at evaluation time.
    Path(PathBuf),
    /// Any other shape; carries a short description of what was received.
    Unsupported(String),
}

impl SizeInput {
    pub fn resource<R: ByteLength + ?Sized>(resource: &R) -> Self {
        Self::Resource(ByteCount::new(resource.byte_len()))
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported(kind.into())
    }

    /// Maps a JSON value onto an input: a string is a path, an object with an
    /// unsigned integer `size` is a resource, everything else is unsupported.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(path) => Self::path(path),
            Value::Object(map) => match map.get("size").and_then(Value::as_u64) {
                Some(size) => Self::Resource(ByteCount::new(size)),
                None => Self::unsupported("object without an unsigned `size`"),
            },
            Value::Null => Self::unsupported("null"),
            Value::Bool(_) => Self::unsupported("boolean"),
            Value::Number(_) => Self::unsupported("number"),
            Value::Array(_) => Self::unsupported("array"),
        }
    }

    /// Short human label used in reports.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Resource(size) => format!("<resource {size} bytes>"),
            Self::Path(path) => path.display().to_string(),
            Self::Unsupported(kind) => format!("<{kind}>"),
        }
    }
}

impl From<&Path> for SizeInput {
    fn from(path: &Path) -> Self {
        Self::path(path)
    }
}

impl From<PathBuf> for SizeInput {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for SizeInput {
    fn from(path: &str) -> Self {
        Self::path(path)
    }
}

impl From<String> for SizeInput {
    fn from(path: String) -> Self {
        Self::path(path)
    }
}

impl From<&std::fs::Metadata> for SizeInput {
    fn from(meta: &std::fs::Metadata) -> Self {
        Self::resource(meta)
    }
}

impl From<ByteCount> for SizeInput {
    fn from(size: ByteCount) -> Self {
        Self::Resource(size)
    }
}
