// crates/infra/src/persistence/file_reader.rs
use std::path::Path;

use size_guard_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the whole file at `path` as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        std::fs::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}
