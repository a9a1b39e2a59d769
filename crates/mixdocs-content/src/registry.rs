//! Content registry.
//!
//! Holds the authoritative, ordered list of [`Page`]s together with the
//! authored sidebar outline. The registry is built once through
//! [`RegistryBuilder`], which rejects authoring defects (duplicate ids,
//! dangling outline links), and is immutable afterwards.
//!
//! # Architecture
//!
//! Pages are stored in a flat `Vec<Page>` in navigation order with a
//! `HashMap` from page id to index, giving O(1) lookups and a stable
//! listing order.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::location::Location;
use crate::model::{Icon, Page, Section};

/// Error returned by registry lookups and construction.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// No page has the requested identifier.
    #[error("Page not found: /{0}")]
    PageNotFound(String),
    /// The page exists but has no section with the requested anchor.
    #[error("Section not found: /{page}#{section}")]
    SectionNotFound {
        /// Page identifier.
        page: String,
        /// Section anchor.
        section: String,
    },
    /// Two pages share an identifier.
    #[error("Duplicate page id: /{0}")]
    DuplicatePage(String),
    /// Two sections of one page share an anchor.
    #[error("Duplicate section id /{page}#{section}")]
    DuplicateSection {
        /// Page identifier.
        page: String,
        /// Section anchor.
        section: String,
    },
    /// An outline entry or link points at content that does not exist.
    #[error("Navigation entry {entry:?} links to missing target {target}")]
    DanglingLink {
        /// Outline entry label.
        entry: String,
        /// Unresolved href.
        target: String,
    },
}

impl ContentError {
    /// Whether this is a runtime lookup miss rather than an authoring defect.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PageNotFound(_) | Self::SectionNotFound { .. })
    }
}

/// Site-wide display metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    /// Product name shown in the sidebar logo.
    pub name: String,
    /// Line under the product name.
    pub tagline: String,
    /// Version badge shown in the sidebar footer.
    pub version: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Documentation".to_owned(),
            tagline: String::new(),
            version: String::new(),
        }
    }
}

/// Authored sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// Display label, also the entry identifier.
    pub label: String,
    /// Page the entry opens.
    pub page: String,
    pub icon: Icon,
    pub links: Vec<OutlineLink>,
}

impl OutlineEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, page: impl Into<String>, icon: Icon) -> Self {
        Self {
            label: label.into(),
            page: page.into(),
            icon,
            links: Vec::new(),
        }
    }

    /// Add a child link. `href` uses URL form, e.g. `/api#errors`.
    #[must_use]
    pub fn link(mut self, title: impl Into<String>, href: &str) -> Self {
        self.links.push(OutlineLink {
            title: title.into(),
            target: Location::parse(href),
        });
        self
    }
}

/// Authored child link of a sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutlineLink {
    pub title: String,
    pub target: Location,
}

/// Immutable collection of all pages.
#[derive(Debug)]
pub struct ContentRegistry {
    info: SiteInfo,
    pages: Vec<Page>,
    path_index: HashMap<String, usize>,
    outline: Vec<OutlineEntry>,
}

impl ContentRegistry {
    /// Get page by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::PageNotFound`] if no page has that id.
    pub fn get_page(&self, id: &str) -> Result<&Page, ContentError> {
        self.path_index
            .get(id)
            .map(|&i| &self.pages[i])
            .ok_or_else(|| ContentError::PageNotFound(id.to_owned()))
    }

    /// All pages in navigation order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Site display metadata.
    #[must_use]
    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    /// Authored sidebar outline (empty when none was authored).
    #[must_use]
    pub fn outline(&self) -> &[OutlineEntry] {
        &self.outline
    }

    /// Resolve a location to its page and, if a fragment is present, section.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::PageNotFound`] or
    /// [`ContentError::SectionNotFound`].
    pub fn resolve(&self, location: &Location) -> Result<(&Page, Option<&Section>), ContentError> {
        let page = self.get_page(&location.path)?;
        let Some(anchor) = location.fragment.as_deref() else {
            return Ok((page, None));
        };
        let section = page
            .get_section(anchor)
            .ok_or_else(|| ContentError::SectionNotFound {
                page: page.id.clone(),
                section: anchor.to_owned(),
            })?;
        Ok((page, Some(section)))
    }
}

/// Builder for [`ContentRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    info: SiteInfo,
    pages: Vec<Page>,
    outline: Vec<OutlineEntry>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn info(mut self, info: SiteInfo) -> Self {
        self.info = info;
        self
    }

    /// Append a page; navigation order follows insertion order.
    #[must_use]
    pub fn page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    #[must_use]
    pub fn outline_entry(mut self, entry: OutlineEntry) -> Self {
        self.outline.push(entry);
        self
    }

    /// Validate and build the registry.
    ///
    /// # Errors
    ///
    /// Returns the first authoring defect found: duplicate page or section
    /// ids, or outline entries/links that do not resolve.
    pub fn build(self) -> Result<ContentRegistry, ContentError> {
        let mut path_index = HashMap::with_capacity(self.pages.len());
        for (i, page) in self.pages.iter().enumerate() {
            if path_index.insert(page.id.clone(), i).is_some() {
                return Err(ContentError::DuplicatePage(page.id.clone()));
            }
            let mut anchors = HashSet::new();
            for section in &page.sections {
                if !anchors.insert(section.id.as_str()) {
                    return Err(ContentError::DuplicateSection {
                        page: page.id.clone(),
                        section: section.id.clone(),
                    });
                }
            }
        }

        let registry = ContentRegistry {
            info: self.info,
            pages: self.pages,
            path_index,
            outline: self.outline,
        };

        for entry in &registry.outline {
            if registry.get_page(&entry.page).is_err() {
                return Err(ContentError::DanglingLink {
                    entry: entry.label.clone(),
                    target: format!("/{}", entry.page),
                });
            }
            for link in &entry.links {
                if registry.resolve(&link.target).is_err() {
                    return Err(ContentError::DanglingLink {
                        entry: entry.label.clone(),
                        target: link.target.href(),
                    });
                }
            }
        }

        tracing::debug!(
            pages = registry.pages.len(),
            outline_entries = registry.outline.len(),
            "Content registry built"
        );

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::ContentRegistry: Send, Sync);

    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_registry() -> ContentRegistry {
        RegistryBuilder::new()
            .page(Page::new("", "Introduction").section(Section::new("features", "Key Features")))
            .page(
                Page::new("quick-start", "Quick Start")
                    .section(Section::new("wallet", "Connect Your Wallet"))
                    .section(Section::new("environment", "Environment Setup")),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_get_page_returns_registered_page() {
        let registry = sample_registry();

        let page = registry.get_page("quick-start").unwrap();

        assert_eq!(page.title, "Quick Start");
        assert_eq!(page.sections.len(), 2);
    }

    #[test]
    fn test_get_page_round_trips_every_page() {
        let registry = sample_registry();

        for page in registry.pages() {
            assert_eq!(registry.get_page(&page.id).unwrap(), page);
        }
    }

    #[test]
    fn test_get_page_not_found() {
        let registry = sample_registry();

        let err = registry.get_page("missing").unwrap_err();

        assert_eq!(err, ContentError::PageNotFound("missing".to_owned()));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_pages_listing_is_stable() {
        let registry = sample_registry();

        let first: Vec<&str> = registry.pages().iter().map(|p| p.id.as_str()).collect();
        let second: Vec<&str> = registry.pages().iter().map(|p| p.id.as_str()).collect();

        assert_eq!(first, vec!["", "quick-start"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_page_and_section() {
        let registry = sample_registry();

        let (page, section) = registry.resolve(&Location::parse("/quick-start#wallet")).unwrap();

        assert_eq!(page.id, "quick-start");
        assert_eq!(section.unwrap().id, "wallet");
    }

    #[test]
    fn test_resolve_missing_section() {
        let registry = sample_registry();

        let err = registry
            .resolve(&Location::parse("/quick-start#nope"))
            .unwrap_err();

        assert_eq!(
            err,
            ContentError::SectionNotFound {
                page: "quick-start".to_owned(),
                section: "nope".to_owned(),
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicate_page() {
        let result = RegistryBuilder::new()
            .page(Page::new("api", "API"))
            .page(Page::new("api", "API again"))
            .build();

        assert_eq!(result.unwrap_err(), ContentError::DuplicatePage("api".to_owned()));
    }

    #[test]
    fn test_build_rejects_duplicate_section() {
        let result = RegistryBuilder::new()
            .page(
                Page::new("api", "API")
                    .section(Section::new("errors", "Errors"))
                    .section(Section::new("errors", "More errors")),
            )
            .build();

        assert!(matches!(
            result.unwrap_err(),
            ContentError::DuplicateSection { .. }
        ));
    }

    #[test]
    fn test_same_anchor_allowed_on_different_pages() {
        let result = RegistryBuilder::new()
            .page(Page::new("api", "API").section(Section::new("relayer", "Relayer API")))
            .page(Page::new("tutorials", "Tutorials").section(Section::new("relayer", "Relayer")))
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_build_rejects_dangling_outline_link() {
        let result = RegistryBuilder::new()
            .page(Page::new("api", "API").section(Section::new("errors", "Errors")))
            .outline_entry(
                OutlineEntry::new("API Reference", "api", Icon::Code)
                    .link("Error Codes", "/api#errors")
                    .link("Webhooks", "/api#webhooks"),
            )
            .build();

        assert_eq!(
            result.unwrap_err(),
            ContentError::DanglingLink {
                entry: "API Reference".to_owned(),
                target: "/api#webhooks".to_owned(),
            }
        );
    }

    #[test]
    fn test_build_rejects_outline_entry_for_missing_page() {
        let result = RegistryBuilder::new()
            .outline_entry(OutlineEntry::new("Ghost", "ghost", Icon::Book))
            .build();

        assert!(matches!(
            result.unwrap_err(),
            ContentError::DanglingLink { .. }
        ));
    }

    #[test]
    fn test_outline_link_to_page_without_fragment() {
        let registry = RegistryBuilder::new()
            .page(Page::new("", "Introduction"))
            .outline_entry(OutlineEntry::new("Introduction", "", Icon::Book).link("Overview", "/"))
            .build()
            .unwrap();

        assert_eq!(registry.outline()[0].links[0].target, Location::root());
    }
}
