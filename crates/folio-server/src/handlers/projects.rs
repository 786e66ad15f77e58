//! Projects API endpoints.
//!
//! Handles project page loading and returns JSON responses with metadata
//! and raw markdown content, plus the project navigation list.

use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use folio_site::ProjectLink;
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/projects/{slug}.
#[derive(Serialize)]
struct ProjectResponse {
    /// Project metadata.
    meta: ProjectMeta,
    /// Raw markdown content; rendering happens client-side.
    markdown: String,
}

/// Project metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectMeta {
    /// URL slug.
    slug: String,
    /// Display title derived from the slug.
    title: String,
    /// Last modification time (ISO 8601).
    last_modified: String,
}

/// Response for GET /api/projects.
#[derive(Serialize)]
pub(crate) struct ProjectListResponse {
    /// Configured projects, in display order.
    items: Vec<ProjectLink>,
}

/// Handle GET /api/projects.
pub(crate) async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Json<ProjectListResponse> {
    Json(ProjectListResponse {
        items: state.loader.links(),
    })
}

/// Handle GET /api/projects/{slug}.
pub(crate) async fn get_project(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    // Load fresh on every request; there is no content cache.
    let document = state.loader.load(&slug)?;

    // Compute ETag
    let etag = compute_etag(&state.version, &document.markdown);

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    // Get last modified time from the backing document
    let source_mtime = UNIX_EPOCH + Duration::from_secs_f64(state.loader.mtime(&slug)?);
    let last_modified: DateTime<Utc> = source_mtime.into();

    let response = ProjectResponse {
        meta: ProjectMeta {
            slug: document.slug,
            title: document.title,
            last_modified: last_modified.to_rfc3339(),
        },
        markdown: document.markdown,
    };

    Ok((
        [
            (header::ETAG, etag),
            (
                header::LAST_MODIFIED,
                last_modified
                    .format("%a, %d %b %Y %H:%M:%S GMT")
                    .to_string(),
            ),
            (header::CACHE_CONTROL, "private, max-age=60".to_string()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
