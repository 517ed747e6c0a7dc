//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use readmegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ReadmeError, ReadmeResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ReadmeResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ReadmeResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> ReadmeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ReadmeError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("c");
        let fs = LocalFilesystem::new();

        assert!(!fs.exists(&nested));
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
    }

    #[test]
    fn write_then_read() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("README.md");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "# Demo\n").unwrap();
        assert_eq!(fs.read_file(&file).unwrap(), "# Demo\n");

        fs.write_file(&file, "# Replaced\n").unwrap();
        assert_eq!(fs.read_file(&file).unwrap(), "# Replaced\n");
    }

    #[test]
    fn write_into_missing_directory_reports_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing").join("README.md");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();
        match err {
            ReadmeError::Application(ApplicationError::Filesystem { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
