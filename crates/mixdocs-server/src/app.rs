//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use mixdocs_renderer::{SCRIPT_PATH, STYLES_PATH};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/pages", get(handlers::pages::list_pages))
        .route("/api/pages/", get(handlers::pages::get_root_page))
        .route("/api/pages/{*path}", get(handlers::pages::get_page));

    let asset_routes = Router::new()
        .route(STYLES_PATH, get(static_files::styles))
        .route(SCRIPT_PATH, get(static_files::script));

    let document_routes = Router::new()
        .route("/", get(handlers::documents::get_root_document))
        .route("/{*path}", get(handlers::documents::get_document));

    Router::new()
        .merge(api_routes)
        .merge(asset_routes)
        .merge(document_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
