//! Allow-list gated project page loading.
//!
//! [`ProjectLoader`] turns an untrusted URL slug into a [`ProjectDocument`]:
//! membership check against the configured allow-list, content read through
//! the storage backend, and title derivation. Extracted behind
//! `Arc<dyn Storage>` so the loading logic is testable without a filesystem.

use std::sync::Arc;

use folio_storage::Storage;
use serde::Serialize;

use crate::title::title_from_slug;

/// Error loading a project page.
///
/// Exactly two user-visible failure kinds exist. Neither is retried.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Slug is not in the configured allow-list.
    #[error("Project \"{slug}\" not found")]
    NotFound {
        /// The rejected slug, for diagnostic display.
        slug: String,
    },

    /// Content read failed for an allow-listed slug.
    ///
    /// The message is deliberately generic; the underlying storage error is
    /// logged at the failure site but never exposed to the caller. Treated
    /// as a deployment/content defect, not a transient condition.
    #[error("Failed to load project \"{slug}\"")]
    Internal {
        /// The affected slug.
        slug: String,
    },
}

/// A loaded project page.
///
/// Constructed fresh on every request, never cached, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocument {
    /// URL slug selecting the project.
    pub slug: String,
    /// Display title derived from the slug.
    pub title: String,
    /// Raw markdown content; rendering is the caller's concern.
    pub markdown: String,
}

/// Navigation link for a configured project.
///
/// Derived purely from the allow-list, without touching storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    /// URL slug.
    pub slug: String,
    /// Display title derived from the slug.
    pub title: String,
}

/// Allow-list gated loader for project pages.
///
/// The allow-list is injected configuration, fixed for the lifetime of the
/// loader. Loading holds no mutable state; a shared `ProjectLoader` serves
/// concurrent requests without locks.
pub struct ProjectLoader {
    storage: Arc<dyn Storage>,
    slugs: Vec<String>,
}

impl ProjectLoader {
    /// Create a new loader over a storage backend and slug allow-list.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, slugs: Vec<String>) -> Self {
        Self { storage, slugs }
    }

    /// Configured slugs, in configuration order.
    #[must_use]
    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    /// Navigation links for all configured projects.
    ///
    /// Pure derivation from the allow-list; no I/O.
    #[must_use]
    pub fn links(&self) -> Vec<ProjectLink> {
        self.slugs
            .iter()
            .map(|slug| ProjectLink {
                slug: slug.clone(),
                title: title_from_slug(slug),
            })
            .collect()
    }

    /// Load the project page for a slug.
    ///
    /// The membership check runs first and unconditionally gates the content
    /// read: an unknown slug never reaches storage, which makes crafted
    /// slugs harmless regardless of backend behavior.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the slug is not allow-listed, or
    /// [`LoadError::Internal`] if the content read fails for any reason.
    pub fn load(&self, slug: &str) -> Result<ProjectDocument, LoadError> {
        self.check_listed(slug)?;

        let markdown = self
            .storage
            .read(&Self::document_name(slug))
            .map_err(|err| {
                tracing::error!(slug, error = %err, "Failed to load project content");
                LoadError::Internal {
                    slug: slug.to_owned(),
                }
            })?;

        Ok(ProjectDocument {
            slug: slug.to_owned(),
            title: title_from_slug(slug),
            markdown,
        })
    }

    /// Modification time of a project's backing document, seconds since epoch.
    ///
    /// Allow-list gated like [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the slug is not allow-listed, or
    /// [`LoadError::Internal`] if the mtime can't be retrieved.
    pub fn mtime(&self, slug: &str) -> Result<f64, LoadError> {
        self.check_listed(slug)?;

        self.storage
            .mtime(&Self::document_name(slug))
            .map_err(|err| {
                tracing::error!(slug, error = %err, "Failed to stat project content");
                LoadError::Internal {
                    slug: slug.to_owned(),
                }
            })
    }

    /// Reject slugs outside the allow-list.
    fn check_listed(&self, slug: &str) -> Result<(), LoadError> {
        if self.slugs.iter().any(|s| s == slug) {
            Ok(())
        } else {
            Err(LoadError::NotFound {
                slug: slug.to_owned(),
            })
        }
    }

    /// Document name for an allow-listed slug.
    fn document_name(slug: &str) -> String {
        format!("{slug}.md")
    }
}

#[cfg(test)]
mod tests {
    use folio_storage::{MockStorage, StorageErrorKind};
    use pretty_assertions::assert_eq;

    use super::*;

    fn slugs() -> Vec<String> {
        vec!["pamela-chess-engine".to_owned(), "cdl-website".to_owned()]
    }

    #[test]
    fn test_load_allow_listed_slug() {
        let storage = Arc::new(
            MockStorage::new().with_content("pamela-chess-engine.md", "# Pamela\n\nA chess engine."),
        );
        let loader = ProjectLoader::new(storage, slugs());

        let document = loader.load("pamela-chess-engine").unwrap();

        assert_eq!(
            document,
            ProjectDocument {
                slug: "pamela-chess-engine".to_owned(),
                title: "Pamela Chess Engine".to_owned(),
                markdown: "# Pamela\n\nA chess engine.".to_owned(),
            }
        );
    }

    #[test]
    fn test_every_listed_slug_loads() {
        let storage = Arc::new(
            MockStorage::new()
                .with_content("pamela-chess-engine.md", "pamela")
                .with_content("cdl-website.md", "cdl"),
        );
        let loader = ProjectLoader::new(storage, slugs());

        for slug in loader.slugs().to_vec() {
            let document = loader.load(&slug).unwrap();
            assert_eq!(document.title, title_from_slug(&slug));
        }
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let storage = Arc::new(MockStorage::new());
        let loader = ProjectLoader::new(storage, slugs());

        let err = loader.load("nonexistent").unwrap_err();

        assert_eq!(
            err,
            LoadError::NotFound {
                slug: "nonexistent".to_owned()
            }
        );
        assert_eq!(err.to_string(), "Project \"nonexistent\" not found");
    }

    #[test]
    fn test_unknown_slug_never_reaches_storage() {
        // Content exists under the crafted name, but the allow-list gate
        // must reject the slug before any read happens.
        let storage = Arc::new(MockStorage::new().with_content("secrets.md", "top secret"));
        let loader = ProjectLoader::new(Arc::clone(&storage) as Arc<dyn Storage>, slugs());

        let err = loader.load("secrets").unwrap_err();

        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(storage.reads(), 0);
    }

    #[test]
    fn test_missing_backing_file_is_internal() {
        // Allow-listed slug whose document is absent: a content defect.
        let storage = Arc::new(MockStorage::new());
        let loader = ProjectLoader::new(storage, slugs());

        let err = loader.load("cdl-website").unwrap_err();

        assert_eq!(
            err,
            LoadError::Internal {
                slug: "cdl-website".to_owned()
            }
        );
    }

    #[test]
    fn test_internal_message_hides_storage_detail() {
        let storage = Arc::new(MockStorage::new().with_read_error(
            "cdl-website.md",
            StorageErrorKind::PermissionDenied,
        ));
        let loader = ProjectLoader::new(storage, slugs());

        let message = loader.load("cdl-website").unwrap_err().to_string();

        assert_eq!(message, "Failed to load project \"cdl-website\"");
        assert!(!message.contains("Permission denied"));
        assert!(!message.contains("Mock"));
    }

    #[test]
    fn test_repeated_loads_identical() {
        let storage =
            Arc::new(MockStorage::new().with_content("pamela-chess-engine.md", "# Pamela"));
        let loader = ProjectLoader::new(storage, slugs());

        let first = loader.load("pamela-chess-engine").unwrap();
        let second = loader.load("pamela-chess-engine").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_links_without_storage_access() {
        let storage = Arc::new(MockStorage::new());
        let loader = ProjectLoader::new(Arc::clone(&storage) as Arc<dyn Storage>, slugs());

        let links = loader.links();

        assert_eq!(
            links,
            vec![
                ProjectLink {
                    slug: "pamela-chess-engine".to_owned(),
                    title: "Pamela Chess Engine".to_owned(),
                },
                ProjectLink {
                    slug: "cdl-website".to_owned(),
                    title: "Cdl Website".to_owned(),
                },
            ]
        );
        assert_eq!(storage.reads(), 0);
    }

    #[test]
    fn test_mtime_gated_by_allow_list() {
        let storage = Arc::new(MockStorage::new().with_mtime("cdl-website.md", 1_700_000_000.0));
        let loader = ProjectLoader::new(storage, slugs());

        assert!(loader.mtime("cdl-website").is_ok());
        assert!(matches!(
            loader.mtime("nonexistent"),
            Err(LoadError::NotFound { .. })
        ));
    }

    #[test]
    fn test_loader_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProjectLoader>();
    }

    #[test]
    fn test_load_with_fs_storage() {
        // End-to-end against a real content directory.
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cdl-website.md"), "# CDL\n").unwrap();
        let storage = Arc::new(folio_storage::FsStorage::new(dir.path().to_path_buf()));
        let loader = ProjectLoader::new(storage, slugs());

        let document = loader.load("cdl-website").unwrap();

        assert_eq!(document.markdown, "# CDL\n");
        assert!(matches!(
            loader.load("pamela-chess-engine"),
            Err(LoadError::Internal { .. })
        ));
    }
}
