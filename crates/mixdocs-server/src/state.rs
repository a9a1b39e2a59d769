//! Application state.

use mixdocs_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Rendered site; immutable for the life of the server.
    pub(crate) site: Site,
}

impl AppState {
    /// Version string mixed into page `ETag`s.
    pub(crate) fn version(&self) -> &str {
        &self.site.info().version
    }
}
