//! Filesystem content store implementation.
//!
//! Provides [`FsStorage`] for reading documents from a local content
//! directory, one file per document name.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem content store.
///
/// Resolves document names against a single content directory. Names are
/// plain file names; anything that could escape the directory is rejected
/// before the filesystem is touched.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use folio_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("content"));
/// let markdown = storage.read("cdl-website.md")?;
/// ```
pub struct FsStorage {
    /// Root directory for document storage.
    content_dir: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem content store.
    ///
    /// # Arguments
    ///
    /// * `content_dir` - Directory containing one file per document
    #[must_use]
    pub fn new(content_dir: PathBuf) -> Self {
        Self { content_dir }
    }

    /// Validate that a name cannot escape the content directory.
    ///
    /// Rejects names containing path separators or parent directory
    /// components (`..`) to prevent path traversal (e.g., `../../etc/passwd`).
    fn validate_name(name: &str) -> Result<(), StorageError> {
        let path = Path::new(name);
        let is_plain_file_name = path.components().count() == 1
            && !path
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir));

        if name.is_empty() || !is_plain_file_name {
            return Err(StorageError::new(StorageErrorKind::InvalidName)
                .with_path(name)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Resolve a validated name to its full path.
    fn full_path(&self, name: &str) -> PathBuf {
        self.content_dir.join(name)
    }
}

impl Storage for FsStorage {
    fn read(&self, name: &str) -> Result<String, StorageError> {
        Self::validate_name(name)?;
        let full_path = self.full_path(name);
        // read_to_string scopes the file handle: it is released on success
        // and on every error path.
        fs::read_to_string(&full_path)
            .map_err(|e| StorageError::io(e, Some(full_path)).with_backend(BACKEND))
    }

    fn exists(&self, name: &str) -> bool {
        Self::validate_name(name).is_ok() && self.full_path(name).exists()
    }

    fn mtime(&self, name: &str) -> Result<f64, StorageError> {
        Self::validate_name(name)?;
        let full_path = self.full_path(name);
        let metadata = fs::metadata(&full_path)
            .map_err(|e| StorageError::io(e, Some(full_path.clone())).with_backend(BACKEND))?;
        let modified = metadata
            .modified()
            .map_err(|e| StorageError::io(e, Some(full_path)).with_backend(BACKEND))?;
        Ok(modified
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_with_file(name: &str, content: &str) -> (tempfile::TempDir, FsStorage) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(name), content).unwrap();
        let storage = FsStorage::new(dir.path().to_path_buf());
        (dir, storage)
    }

    #[test]
    fn test_read_existing_document() {
        let (_dir, storage) = storage_with_file("guide.md", "# Guide\n\nContent.");

        let content = storage.read("guide.md").unwrap();

        assert_eq!(content, "# Guide\n\nContent.");
    }

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let err = storage.read("missing.md").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.backend, Some("Fs"));
    }

    #[test]
    fn test_read_rejects_parent_components() {
        let (_dir, storage) = storage_with_file("guide.md", "content");

        let err = storage.read("../guide.md").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidName);
    }

    #[test]
    fn test_read_rejects_separators() {
        let (_dir, storage) = storage_with_file("guide.md", "content");

        let err = storage.read("sub/guide.md").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidName);
    }

    #[test]
    fn test_read_rejects_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let err = storage.read("").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidName);
    }

    #[test]
    fn test_exists() {
        let (_dir, storage) = storage_with_file("guide.md", "content");

        assert!(storage.exists("guide.md"));
        assert!(!storage.exists("missing.md"));
        assert!(!storage.exists("../guide.md"));
    }

    #[test]
    fn test_mtime_existing_document() {
        let (_dir, storage) = storage_with_file("guide.md", "content");

        let mtime = storage.mtime("guide.md").unwrap();

        assert!(mtime > 0.0);
    }

    #[test]
    fn test_mtime_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().to_path_buf());

        let err = storage.mtime("missing.md").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_repeated_reads_identical() {
        let (_dir, storage) = storage_with_file("guide.md", "# Guide");

        let first = storage.read("guide.md").unwrap();
        let second = storage.read("guide.md").unwrap();

        assert_eq!(first, second);
    }
}
