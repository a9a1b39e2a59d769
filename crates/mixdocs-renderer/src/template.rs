//! HTML document template.
//!
//! Produces a complete page: sidebar, breadcrumbs, article and the
//! "On this page" table of contents. Sidebar disclosure state is encoded in
//! an `expanded` query parameter on every internal link so it survives
//! page loads without client-side state.

use std::fmt::Write;

use mixdocs_content::{Icon, SiteInfo};
use mixdocs_nav::{BreadcrumbItem, EntrySnapshot, NavSnapshot};

use crate::blocks::TocEntry;
use crate::icons::{CHEVRON, icon_svg};
use crate::util::{escape_html, with_expanded};

/// Stylesheet URL referenced by every document.
pub const STYLES_PATH: &str = "/assets/styles.css";
/// Client script URL referenced by every document.
pub const SCRIPT_PATH: &str = "/assets/copy.js";

/// Everything needed to render one document.
pub struct PageData<'a> {
    pub site: &'a SiteInfo,
    /// Document title (page title, site name appended).
    pub title: &'a str,
    /// Pre-rendered article HTML.
    pub body: &'a str,
    pub breadcrumbs: &'a [BreadcrumbItem],
    pub toc: &'a [TocEntry],
    pub navigation: &'a NavSnapshot,
    /// How long copy buttons show their confirmation.
    pub copy_confirmation_ms: u64,
}

/// Render a complete HTML document.
#[must_use]
pub fn render_document(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(page.body.len() + 16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    if page.title.is_empty() || page.title == page.site.name {
        let _ = writeln!(html, "<title>{}</title>", escape_html(&page.site.name));
    } else {
        let _ = writeln!(
            html,
            "<title>{} | {}</title>",
            escape_html(page.title),
            escape_html(&page.site.name)
        );
    }
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{STYLES_PATH}\">");
    let _ = writeln!(html, "<script src=\"{SCRIPT_PATH}\" defer></script>");
    html.push_str("</head>\n");
    let _ = writeln!(
        html,
        "<body data-copy-ms=\"{}\">",
        page.copy_confirmation_ms
    );

    html.push_str("<div class=\"layout\">\n");
    render_sidebar(&mut html, page.site, page.navigation);

    html.push_str("<div class=\"content\">\n");
    render_breadcrumbs(&mut html, page.breadcrumbs, &page.navigation.expanded_ids());
    html.push_str("<div class=\"content-columns\">\n");
    html.push_str("<main class=\"main\">\n<article class=\"article\">\n");
    html.push_str(page.body);
    html.push_str("\n</article>\n</main>\n");
    render_toc(&mut html, page.toc);
    html.push_str("</div>\n</div>\n</div>\n");

    html.push_str("</body>\n</html>");
    html
}

fn render_sidebar(html: &mut String, site: &SiteInfo, nav: &NavSnapshot) {
    let expanded = nav.expanded_ids();

    html.push_str("<aside class=\"sidebar\">\n");
    let _ = writeln!(
        html,
        "<a href=\"{}\" class=\"logo\"><span class=\"logo-mark\">{}</span><span class=\"logo-text\"><span class=\"logo-name\">{}</span><span class=\"logo-tagline\">{}</span></span></a>",
        escape_html(&with_expanded("/", &expanded)),
        icon_svg(Icon::Shield),
        escape_html(&site.name),
        escape_html(&site.tagline),
    );

    html.push_str("<nav>\n<ul class=\"nav-entries\">\n");
    for entry in &nav.entries {
        render_nav_entry(html, nav, entry, &expanded);
    }
    html.push_str("</ul>\n</nav>\n");

    if !site.version.is_empty() {
        let _ = writeln!(
            html,
            "<div class=\"sidebar-footer\"><span class=\"version\">{}</span></div>",
            escape_html(&site.version)
        );
    }
    html.push_str("</aside>\n");
}

fn render_nav_entry(html: &mut String, nav: &NavSnapshot, entry: &EntrySnapshot, expanded: &[&str]) {
    let flipped: Vec<&str> = nav
        .entries
        .iter()
        .filter(|e| e.expanded != (e.id == entry.id))
        .map(|e| e.id.as_str())
        .collect();

    let _ = writeln!(
        html,
        "<li class=\"nav-entry\" data-entry-id=\"{}\" data-expanded=\"{}\">",
        escape_html(&entry.id),
        entry.expanded
    );
    html.push_str("<div class=\"nav-entry-row\">\n");
    let _ = writeln!(
        html,
        "<a href=\"{}\" class=\"nav-entry-link{}\">{}<span>{}</span></a>",
        escape_html(&with_expanded(&entry.href, expanded)),
        if entry.active { " active" } else { "" },
        icon_svg(entry.icon),
        escape_html(&entry.title),
    );
    if !entry.links.is_empty() {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"nav-toggle\" aria-expanded=\"{}\" aria-label=\"Toggle {}\">{CHEVRON}</a>",
            escape_html(&with_expanded(&nav.location, &flipped)),
            entry.expanded,
            escape_html(&entry.title),
        );
    }
    html.push_str("</div>\n");

    if !entry.links.is_empty() {
        let hidden = if entry.expanded { "" } else { " hidden" };
        let _ = writeln!(html, "<ul class=\"nav-links\"{hidden}>");
        for link in &entry.links {
            let _ = writeln!(
                html,
                "<li><a href=\"{}\" class=\"nav-link{}\">{}</a></li>",
                escape_html(&with_expanded(&link.href, expanded)),
                if link.active { " active" } else { "" },
                escape_html(&link.title),
            );
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</li>\n");
}

fn render_breadcrumbs(html: &mut String, breadcrumbs: &[BreadcrumbItem], expanded: &[&str]) {
    if breadcrumbs.is_empty() {
        return;
    }
    html.push_str("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\">\n<ol>\n");
    for crumb in breadcrumbs {
        let _ = writeln!(
            html,
            "<li class=\"breadcrumb-item\"><a href=\"{}\">{}</a></li>",
            escape_html(&with_expanded(&crumb.href, expanded)),
            escape_html(&crumb.title),
        );
    }
    html.push_str("</ol>\n</nav>\n");
}

fn render_toc(html: &mut String, toc: &[TocEntry]) {
    if toc.is_empty() {
        return;
    }
    html.push_str("<aside class=\"toc\">\n");
    html.push_str("<h3 class=\"toc-title\">On this page</h3>\n<ul>\n");
    for entry in toc {
        let indent = if entry.level >= 3 { " class=\"toc-nested\"" } else { "" };
        let _ = writeln!(
            html,
            "<li{indent}><a href=\"#{}\">{}</a></li>",
            escape_html(&entry.id),
            escape_html(&entry.title),
        );
    }
    html.push_str("</ul>\n</aside>\n");
}

/// Article body shown when a location does not resolve.
#[must_use]
pub fn render_not_found_body(path: &str) -> String {
    format!(
        "<div class=\"not-found\"><h1>404</h1><p class=\"lead\">Oops! Page not found</p>\
         <p><code>{}</code> does not exist.</p><a href=\"/\">Return to Home</a></div>",
        escape_html(path)
    )
}

#[cfg(test)]
mod tests {
    use mixdocs_content::{Location, catalog};
    use mixdocs_nav::{NavState, NavTree};

    use super::*;

    fn snapshot(location: &str) -> (SiteInfo, NavSnapshot) {
        let registry = catalog::registry().unwrap();
        let tree = NavTree::from_registry(&registry);
        let state = NavState::new(&registry, &tree, Location::parse(location)).unwrap();
        (registry.info().clone(), state.snapshot(&tree))
    }

    fn render(location: &str) -> String {
        let (site, nav) = snapshot(location);
        let breadcrumbs = vec![BreadcrumbItem {
            title: "Home".to_owned(),
            href: "/".to_owned(),
        }];
        let toc = vec![TocEntry {
            level: 2,
            title: "Error Codes".to_owned(),
            id: "errors".to_owned(),
        }];
        render_document(&PageData {
            site: &site,
            title: "API Reference",
            body: "<p>Body</p>",
            breadcrumbs: &breadcrumbs,
            toc: &toc,
            navigation: &nav,
            copy_confirmation_ms: 2000,
        })
    }

    #[test]
    fn test_document_structure() {
        let html = render("/api#errors");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>API Reference | AproxMixer</title>"));
        assert!(html.contains("<body data-copy-ms=\"2000\">"));
        assert!(html.contains("<p>Body</p>"));
        assert!(html.contains("<h3 class=\"toc-title\">On this page</h3>"));
        assert!(html.contains("<a href=\"#errors\">Error Codes</a>"));
        assert!(html.contains("<span class=\"version\">v1.0.0-beta</span>"));
    }

    #[test]
    fn test_sidebar_marks_active_entry_and_link() {
        let html = render("/api#errors");

        assert!(html.contains(
            "<a href=\"/api?expanded=API%20Reference\" class=\"nav-entry-link active\">"
        ));
        assert!(html.contains(
            "<a href=\"/api?expanded=API%20Reference#errors\" class=\"nav-link active\">Error Codes</a>"
        ));
    }

    #[test]
    fn test_collapsed_entries_hide_links() {
        let html = render("/api");

        assert!(html.contains(
            "<li class=\"nav-entry\" data-entry-id=\"Tutorials\" data-expanded=\"false\">"
        ));
        assert!(html.contains("<ul class=\"nav-links\" hidden>"));
        assert!(html.contains(
            "<li class=\"nav-entry\" data-entry-id=\"API Reference\" data-expanded=\"true\">"
        ));
    }

    #[test]
    fn test_toggle_link_flips_one_entry() {
        let html = render("/api");

        // Expanding Architecture keeps API Reference expanded.
        assert!(html.contains(
            "href=\"/api?expanded=Architecture,API%20Reference\" class=\"nav-toggle\" aria-expanded=\"false\" aria-label=\"Toggle Architecture\""
        ));
        // Collapsing API Reference leaves nothing expanded.
        assert!(html.contains(
            "href=\"/api?expanded=\" class=\"nav-toggle\" aria-expanded=\"true\" aria-label=\"Toggle API Reference\""
        ));
    }

    #[test]
    fn test_breadcrumbs_keep_expanded_entries() {
        let html = render("/api");

        assert!(html.contains(
            "<li class=\"breadcrumb-item\"><a href=\"/?expanded=API%20Reference\">Home</a></li>"
        ));
    }

    #[test]
    fn test_root_title_is_site_name() {
        let (site, nav) = snapshot("/");
        let html = render_document(&PageData {
            site: &site,
            title: "AproxMixer",
            body: "",
            breadcrumbs: &[],
            toc: &[],
            navigation: &nav,
            copy_confirmation_ms: 2000,
        });

        assert!(html.contains("<title>AproxMixer</title>"));
        assert!(!html.contains("class=\"breadcrumbs\""));
        assert!(!html.contains("class=\"toc\""));
    }

    #[test]
    fn test_not_found_body_escapes_path() {
        let html = render_not_found_body("/<x>");

        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains("<code>/&lt;x&gt;</code>"));
    }
}
