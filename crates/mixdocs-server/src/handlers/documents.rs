//! Full HTML documents.
//!
//! Every site path renders server-side. The `expanded` query parameter
//! carries sidebar disclosure state between page loads; ids that no longer
//! name an entry are dropped so stale links still render.

use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::ServerError;
use crate::handlers::expanded_param;
use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn get_root_document(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    document_impl("", &state, raw.as_deref())
}

/// Handle GET /{path}.
pub(crate) async fn get_document(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    document_impl(&path, &state, raw.as_deref())
}

fn document_impl(path: &str, state: &AppState, raw_query: Option<&str>) -> Response {
    let site = &state.site;
    let href = format!("/{path}");

    let expanded = expanded_param(raw_query).map(|ids| {
        ids.into_iter()
            .filter(|id| site.tree().get(id).is_some())
            .collect::<Vec<_>>()
    });

    let result = site
        .state(&href, expanded.as_deref())
        .and_then(|nav| site.page_document(&nav));

    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %href, "Page not found");
            (StatusCode::NOT_FOUND, Html(site.not_found_document(&href))).into_response()
        }
        Err(e) => {
            tracing::warn!(path = %href, error = %e, "Page render failed");
            ServerError::Render(e).into_response()
        }
    }
}
