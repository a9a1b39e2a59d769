use mixdocs_content::{ContentRegistry, Location};
use serde::Serialize;

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target in URL form.
    pub href: String,
}

impl BreadcrumbItem {
    fn home() -> Self {
        Self {
            title: "Home".to_owned(),
            href: "/".to_owned(),
        }
    }
}

/// Build breadcrumbs for a location.
///
/// The root page has none. Other pages get `Home` followed by the page
/// itself; unknown pages get `Home` only.
#[must_use]
pub fn breadcrumbs(registry: &ContentRegistry, location: &Location) -> Vec<BreadcrumbItem> {
    if location.is_root() {
        return Vec::new();
    }

    let mut items = vec![BreadcrumbItem::home()];
    if let Ok(page) = registry.get_page(&location.path) {
        items.push(BreadcrumbItem {
            title: page.title.clone(),
            href: page.href(),
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use mixdocs_content::catalog;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_root_has_no_breadcrumbs() {
        let registry = catalog::registry().unwrap();

        assert!(breadcrumbs(&registry, &Location::parse("/#features")).is_empty());
    }

    #[test]
    fn test_page_breadcrumbs() {
        let registry = catalog::registry().unwrap();

        let items = breadcrumbs(&registry, &Location::parse("/tutorials#relayer"));

        assert_eq!(
            items,
            vec![
                BreadcrumbItem {
                    title: "Home".to_owned(),
                    href: "/".to_owned(),
                },
                BreadcrumbItem {
                    title: "Tutorials".to_owned(),
                    href: "/tutorials".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_page_gets_home_only() {
        let registry = catalog::registry().unwrap();

        let items = breadcrumbs(&registry, &Location::parse("/missing"));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Home");
    }
}
