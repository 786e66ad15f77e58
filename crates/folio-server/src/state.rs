//! Application state.
//!
//! Shared state for all request handlers.

use folio_config::ThemeConfig;
use folio_site::ProjectLoader;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Allow-list gated project page loader.
    pub(crate) loader: ProjectLoader,
    /// Theme token document.
    pub(crate) theme: ThemeConfig,
    /// Application version for `ETag` computation.
    pub(crate) version: String,
}
