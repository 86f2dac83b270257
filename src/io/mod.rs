//! File access used by the aggregation run.
//!
//! The orchestrator only touches the filesystem through [`FileAccess`],
//! which keeps parsing and rendering testable without real files.

use std::io;
use std::path::Path;
use tracing::debug;

/// Read, write and probe UTF-8 text files.
#[allow(async_fn_in_trait)]
pub trait FileAccess {
    /// Read a whole file as UTF-8 text.
    async fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Create or replace a file with the given text.
    async fn write_text(&self, path: &Path, text: &str) -> io::Result<()>;

    /// Whether the path exists and is readable. Never fails.
    async fn exists(&self, path: &Path) -> bool;
}

/// [`FileAccess`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileAccess;

impl FileAccess for FsFileAccess {
    async fn read_text(&self, path: &Path) -> io::Result<String> {
        debug!("Reading {}", path.display());
        tokio::fs::read_to_string(path).await
    }

    async fn write_text(&self, path: &Path, text: &str) -> io::Result<()> {
        debug!("Writing {} bytes to {}", text.len(), path.display());
        tokio::fs::write(path, text).await
    }

    async fn exists(&self, path: &Path) -> bool {
        // Opening proves readability, not just presence.
        tokio::fs::File::open(path).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.txt");

        FsFileAccess.write_text(&path, "line one\nline two ✓").await.unwrap();
        let content = FsFileAccess.read_text(&path).await.unwrap();

        assert_eq!(content, "line one\nline two ✓");
    }

    #[tokio::test]
    async fn test_exists_for_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("existing.txt");
        std::fs::write(&path, "exists").unwrap();

        assert!(FsFileAccess.exists(&path).await);
    }

    #[tokio::test]
    async fn test_exists_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        assert!(!FsFileAccess.exists(&temp_dir.path().join("missing.txt")).await);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let err = FsFileAccess
            .read_text(&temp_dir.path().join("missing.txt"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
