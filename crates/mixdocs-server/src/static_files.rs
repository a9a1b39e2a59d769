//! Stylesheet and script served from memory.

use axum::http::header;
use axum::response::IntoResponse;
use mixdocs_renderer::{COPY_JS, STYLES_CSS};

const CACHE_CONTROL: &str = "public, max-age=3600";

/// Handle GET /assets/styles.css.
pub(crate) async fn styles() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        STYLES_CSS,
    )
}

/// Handle GET /assets/copy.js.
pub(crate) async fn script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        COPY_JS,
    )
}
