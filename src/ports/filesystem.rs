//! Filesystem port for fixture and output files.

use std::io;
use std::path::Path;

/// Text file access used by the fixture store.
pub trait FileSystem: Send + Sync {
    /// Reads a whole UTF-8 file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes a file, creating parent directories and replacing any
    /// existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;
}
