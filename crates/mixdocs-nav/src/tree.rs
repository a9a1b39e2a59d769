//! Navigation tree derived from the content registry.
//!
//! The tree is built once per registry and never changes. Disclosure and
//! active state live in [`NavState`](crate::NavState).

use mixdocs_content::{ContentRegistry, Icon, Location, Page};

/// Top-level sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Display label, also the identifier used by `toggle`.
    pub label: String,
    /// Page the entry opens (no leading slash).
    pub page: String,
    pub icon: Icon,
    /// Child links in display order.
    pub links: Vec<NavLink>,
}

impl NavEntry {
    /// URL of the entry's page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/{}", self.page)
    }

    /// Whether the entry's page is addressed by `location`.
    ///
    /// The root entry matches only the root page. Other entries match any
    /// path that starts with their page id.
    #[must_use]
    pub fn matches(&self, location: &Location) -> bool {
        if self.page.is_empty() {
            location.is_root()
        } else {
            location.path.starts_with(&self.page)
        }
    }
}

/// Child link of a [`NavEntry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub title: String,
    pub target: Location,
}

/// Ordered sidebar entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavTree {
    entries: Vec<NavEntry>,
}

impl NavTree {
    /// Build the tree from the registry's authored outline.
    ///
    /// Without an outline, one entry is derived per page with one link per
    /// section. Outline links were validated when the registry was built,
    /// so every link resolves.
    #[must_use]
    pub fn from_registry(registry: &ContentRegistry) -> Self {
        let entries = if registry.outline().is_empty() {
            registry.pages().iter().map(derive_entry).collect()
        } else {
            registry
                .outline()
                .iter()
                .map(|entry| NavEntry {
                    label: entry.label.clone(),
                    page: entry.page.clone(),
                    icon: entry.icon,
                    links: entry
                        .links
                        .iter()
                        .map(|link| NavLink {
                            title: link.title.clone(),
                            target: link.target.clone(),
                        })
                        .collect(),
                })
                .collect()
        };

        Self { entries }
    }

    /// Entries in sidebar order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Look up an entry by label.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.label == id)
    }

    /// Entry that is active for `location`.
    ///
    /// When several entries match, the one with the longest page id wins.
    #[must_use]
    pub fn active_entry(&self, location: &Location) -> Option<&NavEntry> {
        self.entries
            .iter()
            .filter(|e| e.matches(location))
            .max_by_key(|e| e.page.len())
    }
}

fn derive_entry(page: &Page) -> NavEntry {
    NavEntry {
        label: page.title.clone(),
        page: page.id.clone(),
        icon: page.icon,
        links: page
            .sections
            .iter()
            .map(|section| NavLink {
                title: section.title.clone(),
                target: Location::new(page.id.clone(), Some(&section.id)),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use mixdocs_content::{OutlineEntry, RegistryBuilder, Section};
    use pretty_assertions::assert_eq;

    use super::*;

    fn derived_tree() -> NavTree {
        let registry = RegistryBuilder::new()
            .page(Page::new("", "Introduction").icon(Icon::Book))
            .page(
                Page::new("api", "API Reference")
                    .icon(Icon::Code)
                    .section(Section::new("backend", "Backend API"))
                    .section(Section::new("errors", "Error Codes")),
            )
            .page(Page::new("api-v2", "API v2"))
            .build()
            .unwrap();
        NavTree::from_registry(&registry)
    }

    #[test]
    fn test_derived_tree_has_entry_per_page() {
        let tree = derived_tree();

        let labels: Vec<&str> = tree.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Introduction", "API Reference", "API v2"]);

        let api = tree.get("API Reference").unwrap();
        assert_eq!(api.icon, Icon::Code);
        assert_eq!(api.links[1].target, Location::parse("/api#errors"));
        assert_eq!(api.links[1].title, "Error Codes");
    }

    #[test]
    fn test_outline_takes_precedence() {
        let registry = RegistryBuilder::new()
            .page(Page::new("", "Introduction").section(Section::new("features", "Key Features")))
            .outline_entry(
                OutlineEntry::new("Intro", "", Icon::Book)
                    .link("Overview", "/")
                    .link("Features", "/#features"),
            )
            .build()
            .unwrap();

        let tree = NavTree::from_registry(&registry);

        assert_eq!(tree.entries().len(), 1);
        assert_eq!(tree.entries()[0].label, "Intro");
        assert_eq!(tree.entries()[0].links.len(), 2);
    }

    #[test]
    fn test_root_entry_matches_only_root() {
        let tree = derived_tree();

        let active = tree.active_entry(&Location::parse("/#features")).unwrap();
        assert_eq!(active.label, "Introduction");

        let active = tree.active_entry(&Location::parse("/api")).unwrap();
        assert_eq!(active.label, "API Reference");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let tree = derived_tree();

        let active = tree.active_entry(&Location::parse("/api-v2")).unwrap();

        assert_eq!(active.label, "API v2");
    }

    #[test]
    fn test_no_active_entry_for_unknown_path() {
        let tree = derived_tree();

        assert!(tree.active_entry(&Location::parse("/compliance")).is_none());
    }
}
