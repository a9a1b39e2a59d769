//! Static site output.

use std::fs;
use std::path::{Path, PathBuf};

use mixdocs_content::Location;
use mixdocs_nav::NavState;
use mixdocs_renderer::{COPY_JS, SCRIPT_PATH, STYLES_CSS, STYLES_PATH};

use crate::site::{Site, SiteError};

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Site(#[from] SiteError),
}

/// Writes every page of a [`Site`] as a standalone HTML file.
///
/// Each page lands in `<out>/<page>/index.html` (`<out>/index.html` for the
/// root page) with its own sidebar entry expanded. Stylesheet and script
/// are written under `<out>/assets/`.
pub struct StaticSiteBuilder<'a> {
    site: &'a Site,
}

impl<'a> StaticSiteBuilder<'a> {
    #[must_use]
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Build into `out_dir`, creating it if needed.
    ///
    /// Returns the number of pages written.
    pub fn build(&self, out_dir: &Path) -> Result<usize, BuildError> {
        fs::create_dir_all(out_dir)?;

        let registry = self.site.registry();
        for page in registry.pages() {
            let state = NavState::new(
                registry,
                self.site.tree(),
                Location::new(page.id.clone(), None),
            )
            .map_err(SiteError::from)?;
            let html = self.site.page_document(&state)?;

            let path = page_path(out_dir, &page.id);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html)?;
            tracing::debug!(page = %page.href(), path = %path.display(), "Wrote page");
        }

        write_asset(out_dir, STYLES_PATH, STYLES_CSS)?;
        write_asset(out_dir, SCRIPT_PATH, COPY_JS)?;

        let count = registry.pages().len();
        tracing::info!(pages = count, out_dir = %out_dir.display(), "Static site built");
        Ok(count)
    }
}

fn page_path(out_dir: &Path, id: &str) -> PathBuf {
    if id.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(id).join("index.html")
    }
}

fn write_asset(out_dir: &Path, url_path: &str, content: &str) -> Result<(), BuildError> {
    let path = out_dir.join(url_path.trim_start_matches('/'));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
