//! Theme API endpoint.
//!
//! Returns the theme token document for the styling layer. Static
//! declarative data; no runtime logic.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use folio_config::ThemeConfig;

use crate::state::AppState;

/// Handle GET /api/theme.
pub(crate) async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeConfig> {
    Json(state.theme.clone())
}
