//! Content store abstraction for the Folio portfolio engine.
//!
//! This crate provides a [`Storage`] trait for abstracting document retrieval
//! from the underlying content store. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, anything addressable by name tomorrow)
//! - **Clean separation** between page loading logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `read()`, `exists()`, and `mtime()` methods
//! - [`FsStorage`] implementation for a filesystem content directory
//! - [`MockStorage`] for testing (behind the `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("content"));
//! let markdown = storage.read("pamela-chess-engine.md")?;
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
