//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores document contents in memory. Use the builder methods to configure
/// the mock with test data, including injected read failures. Reads are
/// counted so tests can assert that a code path never touched storage.
///
/// # Example
///
/// ```ignore
/// use folio_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_content("guide.md", "# Guide\n\nContent.");
///
/// let content = storage.read("guide.md").unwrap();
/// assert_eq!(storage.reads(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    contents: RwLock<HashMap<String, String>>,
    mtimes: RwLock<HashMap<String, f64>>,
    read_errors: RwLock<HashMap<String, StorageErrorKind>>,
    reads: AtomicUsize,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add content for a document name.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_content(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.contents
            .write()
            .unwrap()
            .insert(name.into(), content.into());
        self
    }

    /// Set modification time for a document name.
    ///
    /// # Arguments
    ///
    /// * `name` - Document name
    /// * `mtime` - Modification time as seconds since Unix epoch
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_mtime(self, name: impl Into<String>, mtime: f64) -> Self {
        self.mtimes.write().unwrap().insert(name.into(), mtime);
        self
    }

    /// Inject a read failure for a document name.
    ///
    /// Takes precedence over any content configured for the same name,
    /// which allows simulating an existing but unreadable document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_read_error(self, name: impl Into<String>, kind: StorageErrorKind) -> Self {
        self.read_errors.write().unwrap().insert(name.into(), kind);
        self
    }

    /// Number of `read` calls made so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Storage for MockStorage {
    fn read(&self, name: &str) -> Result<String, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if let Some(kind) = self.read_errors.read().unwrap().get(name) {
            return Err(StorageError::new(*kind)
                .with_path(name)
                .with_backend(BACKEND));
        }

        self.contents
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::not_found(name).with_backend(BACKEND))
    }

    fn exists(&self, name: &str) -> bool {
        self.contents.read().unwrap().contains_key(name)
    }

    fn mtime(&self, name: &str) -> Result<f64, StorageError> {
        self.mtimes
            .read()
            .unwrap()
            .get(name)
            .copied()
            .ok_or_else(|| StorageError::not_found(name).with_backend(BACKEND))
    }
}
