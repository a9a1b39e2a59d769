//! Registry, navigation and renderer joined into rendered pages.
//!
//! [`Site`] owns the content registry and the navigation tree derived from
//! it. Both are immutable for the life of the process, so a `Site` can be
//! shared behind an `Arc` without locking. Per-request navigation state is
//! a [`NavState`] passed in by the caller.

use mixdocs_config::Config;
use mixdocs_content::{ContentError, ContentRegistry, Location, SiteInfo};
use mixdocs_nav::{BreadcrumbItem, NavError, NavSnapshot, NavState, NavTree, breadcrumbs};
use mixdocs_renderer::{
    PageData, TocEntry, render_document, render_not_found_body, render_page_body,
    table_of_contents,
};
use serde::Serialize;

/// Error returned when a page cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Navigation(#[from] NavError),
}

impl SiteError {
    /// Whether the error means the requested location does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Content(e) => e.is_not_found(),
            Self::Navigation(_) => true,
        }
    }
}

/// Rendered article for one location.
#[derive(Clone, Debug, Serialize)]
pub struct RenderedPage {
    /// Page title.
    pub title: String,
    /// Article HTML (page header and sections).
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
}

/// Documentation site.
#[derive(Debug)]
pub struct Site {
    registry: ContentRegistry,
    tree: NavTree,
    info: SiteInfo,
    initial: NavState,
    copy_confirmation_ms: u64,
}

impl Site {
    /// Create a site from a registry and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Navigation`] if `site.initial_location` does not
    /// resolve.
    pub fn new(registry: ContentRegistry, config: &Config) -> Result<Self, SiteError> {
        let tree = NavTree::from_registry(&registry);

        let mut info = registry.info().clone();
        if let Some(version) = &config.site.version {
            info.version.clone_from(version);
        }

        let initial = NavState::new(
            &registry,
            &tree,
            Location::parse(&config.site.initial_location),
        )?;

        tracing::debug!(
            pages = registry.pages().len(),
            entries = tree.entries().len(),
            initial = %initial.location(),
            "Site created"
        );

        Ok(Self {
            registry,
            tree,
            info,
            initial,
            copy_confirmation_ms: config.copy.confirmation_ms,
        })
    }

    #[must_use]
    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    #[must_use]
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// Site metadata with the configured version applied.
    #[must_use]
    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    /// State a fresh session starts in.
    #[must_use]
    pub fn initial_state(&self) -> &NavState {
        &self.initial
    }

    /// Navigation state for a request.
    ///
    /// The location is parsed from `href`. Without `expanded` only the
    /// active entry is expanded; with it, exactly the listed entries are.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Navigation`] for an unknown location or entry.
    pub fn state<S: AsRef<str>>(
        &self,
        href: &str,
        expanded: Option<&[S]>,
    ) -> Result<NavState, SiteError> {
        let state = self.initial.navigate(&self.registry, &Location::parse(href))?;
        let state = match expanded {
            Some(ids) => state.with_expanded(&self.tree, ids)?,
            None => NavState::new(&self.registry, &self.tree, state.location().clone())?,
        };
        Ok(state)
    }

    /// Sidebar view for a state.
    #[must_use]
    pub fn navigation(&self, state: &NavState) -> NavSnapshot {
        state.snapshot(&self.tree)
    }

    /// Render the article for the state's location.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Content`] if the location is not registered.
    pub fn render(&self, state: &NavState) -> Result<RenderedPage, SiteError> {
        let location = state.location();
        let (page, _) = self.registry.resolve(location)?;

        Ok(RenderedPage {
            title: page.title.clone(),
            html: render_page_body(page),
            toc: table_of_contents(page),
            breadcrumbs: breadcrumbs(&self.registry, location),
        })
    }

    /// Full HTML document for the state's location.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Content`] if the location is not registered.
    pub fn page_document(&self, state: &NavState) -> Result<String, SiteError> {
        let page = self.render(state)?;
        let navigation = self.navigation(state);

        Ok(render_document(&PageData {
            site: &self.info,
            title: &page.title,
            body: &page.html,
            breadcrumbs: &page.breadcrumbs,
            toc: &page.toc,
            navigation: &navigation,
            copy_confirmation_ms: self.copy_confirmation_ms,
        }))
    }

    /// Fallback document for a path that does not resolve.
    #[must_use]
    pub fn not_found_document(&self, path: &str) -> String {
        let navigation = self.navigation(&self.initial);
        let body = render_not_found_body(path);

        render_document(&PageData {
            site: &self.info,
            title: "Page Not Found",
            body: &body,
            breadcrumbs: &[],
            toc: &[],
            navigation: &navigation,
            copy_confirmation_ms: self.copy_confirmation_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use mixdocs_content::catalog;
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(Site: Send, Sync);

    fn site() -> Site {
        Site::new(catalog::registry().unwrap(), &Config::default()).unwrap()
    }

    #[test]
    fn test_new_starts_at_configured_location() {
        let mut config = Config::default();
        config.site.initial_location = "/quick-start#wallet".to_owned();

        let site = Site::new(catalog::registry().unwrap(), &config).unwrap();

        assert_eq!(site.initial_state().location().href(), "/quick-start#wallet");
        assert!(site.initial_state().is_expanded("Quick Start"));
    }

    #[test]
    fn test_new_rejects_unknown_initial_location() {
        let mut config = Config::default();
        config.site.initial_location = "/missing".to_owned();

        let err = Site::new(catalog::registry().unwrap(), &config).unwrap_err();

        assert!(matches!(err, SiteError::Navigation(NavError::TargetNotFound(_))));
    }

    #[test]
    fn test_version_override() {
        let mut config = Config::default();
        config.site.version = Some("v2.0.0".to_owned());

        let site = Site::new(catalog::registry().unwrap(), &config).unwrap();

        assert_eq!(site.info().version, "v2.0.0");
        assert_eq!(site.info().name, "AproxMixer");
    }

    #[test]
    fn test_state_defaults_to_active_entry_expanded() {
        let site = site();

        let state = site.state::<&str>("/api#errors", None).unwrap();

        assert_eq!(state.expanded_ids(site.tree()), vec!["API Reference"]);
    }

    #[test]
    fn test_state_with_explicit_expanded_set() {
        let site = site();

        let state = site
            .state("/api", Some(["Architecture", "Compliance"].as_slice()))
            .unwrap();

        assert_eq!(
            state.expanded_ids(site.tree()),
            vec!["Architecture", "Compliance"]
        );
    }

    #[test]
    fn test_state_empty_expanded_set_collapses_all() {
        let site = site();

        let state = site.state::<&str>("/api", Some([].as_slice())).unwrap();

        assert!(state.expanded_ids(site.tree()).is_empty());
    }

    #[test]
    fn test_state_unknown_location_is_not_found() {
        let site = site();

        let err = site.state::<&str>("/quick-start#nope", None).unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_render_page() {
        let site = site();
        let state = site.state::<&str>("/quick-start#wallet", None).unwrap();

        let page = site.render(&state).unwrap();

        assert_eq!(page.title, "Quick Start");
        assert!(page.html.contains(r#"<section id="wallet" class="doc-section">"#));
        assert_eq!(page.toc.first().map(|t| t.id.as_str()), Some("wallet"));
        assert_eq!(
            page.breadcrumbs
                .iter()
                .map(|b| b.title.as_str())
                .collect::<Vec<_>>(),
            vec!["Home", "Quick Start"]
        );
    }

    #[test]
    fn test_page_document_includes_navigation_and_copy_window() {
        let mut config = Config::default();
        config.copy.confirmation_ms = 1500;
        let site = Site::new(catalog::registry().unwrap(), &config).unwrap();
        let state = site.state::<&str>("/compliance", None).unwrap();

        let html = site.page_document(&state).unwrap();

        assert!(html.contains("<title>Compliance | AproxMixer</title>"));
        assert!(html.contains(r#"<body data-copy-ms="1500">"#));
        assert!(html.contains("callout-danger"));
    }

    #[test]
    fn test_not_found_document() {
        let site = site();

        let html = site.not_found_document("/missing");

        assert!(html.contains("<title>Page Not Found | AproxMixer</title>"));
        assert!(html.contains("<code>/missing</code>"));
        assert!(html.contains(r#"class="sidebar""#));
    }
}
