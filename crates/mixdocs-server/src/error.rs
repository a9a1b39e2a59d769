//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mixdocs_nav::NavError;
use mixdocs_site::SiteError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No page or section at the given location.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// `expanded` named a sidebar entry that does not exist.
    #[error("Unknown navigation entry: {0}")]
    UnknownEntry(String),

    /// Render error from mixdocs-site.
    #[error("Render error: {0}")]
    Render(SiteError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Classify a site error for the request at `path`.
    pub(crate) fn from_site(error: SiteError, path: &str) -> Self {
        match error {
            SiteError::Navigation(NavError::EntryNotFound(id)) => Self::UnknownEntry(id),
            e if e.is_not_found() => Self::PageNotFound(path.to_owned()),
            e => Self::Render(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::UnknownEntry(id) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Unknown navigation entry", "entry": id}),
            ),
            Self::Render(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
            Self::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use mixdocs_content::ContentError;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_site_unknown_entry() {
        let err = ServerError::from_site(
            SiteError::Navigation(NavError::EntryNotFound("Nope".to_owned())),
            "/api",
        );

        assert!(matches!(err, ServerError::UnknownEntry(ref id) if id == "Nope"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_site_missing_target() {
        let err = ServerError::from_site(
            SiteError::Navigation(NavError::TargetNotFound("/missing".to_owned())),
            "/missing",
        );

        assert!(matches!(err, ServerError::PageNotFound(ref p) if p == "/missing"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_from_site_authoring_error_is_internal() {
        let err = ServerError::from_site(
            SiteError::Content(ContentError::DuplicatePage("api".to_owned())),
            "/api",
        );

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
