use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory populated with files of exact byte lengths.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new().prefix("size_guard_test").tempdir().unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `rel` holding `len` zero bytes.
    pub fn file_of_len(&self, rel: &str, len: usize) -> PathBuf {
        self.write(rel, &vec![0u8; len])
    }

    pub fn write(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn missing(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}
