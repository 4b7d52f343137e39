//! In-memory filesystem for tests and dry runs.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::filesystem::FileSystem;

/// Filesystem holding files in a sorted map.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, builder style.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.lock().insert(path.into(), contents.into());
        self
    }

    /// All stored paths, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.lock().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display()))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.lock().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.lock();
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_exist_through_their_files() {
        let fs = MemoryFileSystem::new().with_file("/out/a.spec.js", "x");
        assert!(fs.exists(Path::new("/out")));
        assert!(fs.exists(Path::new("/out/a.spec.js")));
        assert!(!fs.exists(Path::new("/other")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = MemoryFileSystem::new().read_to_string(Path::new("/nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
