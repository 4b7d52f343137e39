//! Live filesystem adapter using `std::fs`.

use std::io;
use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_into_new_directories() {
        let root = std::env::temp_dir().join(format!("mockscribe-live-fs-{}", std::process::id()));
        let path = root.join("nested/dir/out.spec.js");

        LiveFileSystem.write(&path, "test();").unwrap();
        assert!(LiveFileSystem.exists(&path));
        assert_eq!(LiveFileSystem.read_to_string(&path).unwrap(), "test();");

        let _ = std::fs::remove_dir_all(&root);
    }
}
