//! Project page loading for the Folio portfolio engine.
//!
//! This crate provides:
//! - [`ProjectLoader`]: allow-list gated loading of project markdown documents
//! - [`title_from_slug`]: pure slug-to-title derivation
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use folio_site::ProjectLoader;
//! use folio_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("content")));
//! let loader = ProjectLoader::new(
//!     storage,
//!     vec!["pamela-chess-engine".to_owned(), "cdl-website".to_owned()],
//! );
//!
//! let document = loader.load("pamela-chess-engine")?;
//! assert_eq!(document.title, "Pamela Chess Engine");
//! # Ok(())
//! # }
//! ```

mod loader;
mod title;

pub use loader::{LoadError, ProjectDocument, ProjectLink, ProjectLoader};
pub use title::title_from_slug;
