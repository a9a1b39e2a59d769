/// Site stylesheet, served at [`STYLES_PATH`](crate::STYLES_PATH).
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Client script for copy buttons and sidebar toggles, served at
/// [`SCRIPT_PATH`](crate::SCRIPT_PATH).
pub const COPY_JS: &str = include_str!("../assets/copy.js");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_restarts_confirmation_timer() {
        assert!(COPY_JS.contains("clearTimeout(timer)"));
        assert!(COPY_JS.contains("dataset.copyMs"));
    }

    #[test]
    fn test_script_carries_toggled_entries_on_links() {
        assert!(COPY_JS.contains("function rewriteLinks()"));
        assert!(COPY_JS.contains(r#"link.setAttribute("href", withExpanded(href, ids))"#));
        assert!(COPY_JS.contains("\"?expanded=\" + ids.map(encodeId).join(\",\")"));
        assert!(COPY_JS.contains("dataset.entryId"));
    }

    #[test]
    fn test_script_restores_expanded_entries_from_query() {
        assert!(COPY_JS.contains("queryIds()"));
        assert!(COPY_JS.contains("split(\",\").map(decodeURIComponent)"));
    }

    #[test]
    fn test_stylesheet_covers_every_callout_severity() {
        for class in ["callout-info", "callout-warning", "callout-success", "callout-danger"] {
            assert!(STYLES_CSS.contains(class), "{class}");
        }
    }
}
