//! HTTP server for the `AproxMixer` documentation site.
//!
//! Serves:
//! - Server-rendered HTML documents for every page, with sidebar
//!   disclosure state carried in the `expanded` query parameter
//! - JSON endpoints for navigation snapshots and rendered pages
//! - The stylesheet and copy-button script
//!
//! # Quick Start
//!
//! ```no_run
//! use mixdocs_config::Config;
//! use mixdocs_content::catalog;
//! use mixdocs_server::run_server;
//! use mixdocs_site::Site;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let site = Site::new(catalog::registry()?, &config)?;
//!
//!     run_server(site, &config.server).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Routes
//!
//! ```text
//! GET /                      HTML document (root page)
//! GET /{path}                HTML document, 404 document when unknown
//! GET /api/navigation        NavSnapshot JSON (?path=&expanded=)
//! GET /api/pages             page summaries in navigation order
//! GET /api/pages/{path}      rendered page JSON with ETag
//! GET /assets/styles.css
//! GET /assets/copy.js
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::sync::Arc;

use mixdocs_config::ServerConfig;
use mixdocs_site::Site;

pub use error::ServerError;

use crate::state::AppState;

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServerError::Io`] if the address cannot be bound or the
/// server fails while running.
pub async fn run_server(site: Site, config: &ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState { site });
    let app = app::create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
