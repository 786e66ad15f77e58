//! Server error types.
//!
//! Maps loader failures to HTTP status codes and JSON error bodies. The
//! only two user-visible failures are 404 (slug not allow-listed) and 500
//! (content read failed); the 500 body stays generic because the
//! underlying cause was already logged by the loader.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_site::LoadError;
use serde::Serialize;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Project page load failure.
    #[error("{0}")]
    Load(#[from] LoadError),
}

/// JSON error body.
#[derive(Serialize)]
struct ErrorBody {
    /// Human-readable message.
    error: String,
}

impl ServerError {
    /// HTTP status for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::Load(LoadError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Load(LoadError::Internal { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ServerError::from(LoadError::NotFound {
            slug: "nonexistent".to_owned(),
        });

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Project \"nonexistent\" not found");
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = ServerError::from(LoadError::Internal {
            slug: "cdl-website".to_owned(),
        });

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to load project \"cdl-website\"");
    }
}
