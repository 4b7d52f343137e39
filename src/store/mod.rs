//! Fixture store: loads recorded sessions, tests and mocks, and writes
//! generated test files.
//!
//! Files are JSON unless their extension is `.yaml` or `.yml`. All I/O goes
//! through the [`FileSystem`] port.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::StoreError;
use crate::model::{GeneratedFile, MockRecord, RecordedEvent, TestCase};
use crate::ports::FileSystem;

/// A test file holds either a bare list or a `{ tests: [...] }` document.
#[derive(Deserialize)]
#[serde(untagged)]
enum TestsDocument {
    List(Vec<TestCase>),
    Wrapped { tests: Vec<TestCase> },
}

/// Loader and writer for fixture files.
pub struct FixtureStore<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> FixtureStore<'a> {
    /// Creates a store over the given filesystem.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Loads a recorded event sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load_events(&self, path: &Path) -> Result<Vec<RecordedEvent>, StoreError> {
        self.decode(path)
    }

    /// Loads existing tests; either file layout is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load_tests(&self, path: &Path) -> Result<Vec<TestCase>, StoreError> {
        Ok(match self.decode(path)? {
            TestsDocument::List(tests) | TestsDocument::Wrapped { tests } => tests,
        })
    }

    /// Loads a mock collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed.
    pub fn load_mocks(&self, path: &Path) -> Result<Vec<MockRecord>, StoreError> {
        self.decode(path)
    }

    /// Writes a generated file under `dir` and returns its path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the write fails.
    pub fn save_generated(&self, dir: &Path, file: &GeneratedFile) -> Result<PathBuf, StoreError> {
        let path = dir.join(&file.file_name);
        self.fs
            .write(&path, &file.source)
            .map_err(|source| StoreError::Io { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), test = %file.test_name, "wrote generated test");
        Ok(path)
    }

    fn decode<T: DeserializeOwned>(&self, path: &Path) -> Result<T, StoreError> {
        if !self.fs.exists(path) {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        let text = self
            .fs
            .read_to_string(path)
            .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;

        if is_yaml(path) {
            serde_yaml::from_str(&text)
                .map_err(|source| StoreError::Yaml { path: path.to_path_buf(), source })
        } else {
            serde_json::from_str(&text)
                .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
