// crates/ports/src/filesystem.rs
use std::path::Path;

use size_guard_shared_kernel::{ByteCount, InfraResult};

/// Port for resolving the byte length of a path.
///
/// One call is one best-effort lookup: implementations must not cache or retry.
pub trait FileSizeProbe: Send + Sync {
    fn size_of(&self, path: &Path) -> InfraResult<ByteCount>;
}

impl<P: FileSizeProbe + ?Sized> FileSizeProbe for &P {
    fn size_of(&self, path: &Path) -> InfraResult<ByteCount> {
        (**self).size_of(path)
    }
}
