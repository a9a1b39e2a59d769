//! Navigation API endpoint.
//!
//! Returns the sidebar snapshot for a location and disclosure state.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, RawQuery, State};
use mixdocs_nav::NavSnapshot;
use serde::Deserialize;

use crate::error::ServerError;
use crate::handlers::expanded_param;
use crate::state::AppState;

/// Query for GET /api/navigation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NavigationQuery {
    /// Current location (`/quick-start#wallet`). Defaults to the configured
    /// initial location.
    path: Option<String>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
    RawQuery(raw): RawQuery,
) -> Result<Json<NavSnapshot>, ServerError> {
    let site = &state.site;
    let href = query
        .path
        .unwrap_or_else(|| site.initial_state().location().href());
    let expanded = expanded_param(raw.as_deref());

    let nav = site
        .state(&href, expanded.as_deref())
        .map_err(|e| ServerError::from_site(e, &href))?;

    Ok(Json(site.navigation(&nav)))
}
