//! Shared helpers for HTML output.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use mixdocs_renderer::escape_html;
///
/// assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render inline Markdown (emphasis, code spans, links) without a
/// surrounding paragraph.
///
/// Block-level structure (lists, headings, quotes, rules) is dropped and
/// only its text kept, so the result can sit inside `<p>` or `<li>`. Raw
/// HTML in the source is emitted as text.
pub(crate) fn render_inline(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).filter_map(|event| {
        match event {
            Event::Start(Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. })
            | Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link) => {
                Some(event)
            }
            Event::Start(_) | Event::End(_) | Event::Rule => None,
            Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
            other => Some(other),
        }
    });

    let mut out = String::with_capacity(text.len() + 16);
    html::push_html(&mut out, parser);
    out.trim_end().to_owned()
}

/// Append an `expanded` query parameter to an href, before any fragment.
pub(crate) fn with_expanded(href: &str, ids: &[&str]) -> String {
    let encoded: Vec<String> = ids
        .iter()
        .map(|id| utf8_percent_encode(id, NON_ALPHANUMERIC).to_string())
        .collect();
    let query = format!("expanded={}", encoded.join(","));

    match href.split_once('#') {
        Some((path, fragment)) => format!("{path}?{query}#{fragment}"),
        None => format!("{href}?{query}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b's"), "a &amp; b&#x27;s");
    }

    #[test]
    fn test_render_inline_strips_paragraph() {
        assert_eq!(
            render_inline("**Important:** keep `note` safe"),
            "<strong>Important:</strong> keep <code>note</code> safe"
        );
    }

    #[test]
    fn test_render_inline_link() {
        assert_eq!(
            render_inline("See [Appendices](/appendices#contracts)"),
            r#"See <a href="/appendices#contracts">Appendices</a>"#
        );
    }

    #[test]
    fn test_render_inline_escapes_raw_html() {
        let out = render_inline("a <script>alert(1)</script> b");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_inline_drops_block_markup() {
        assert_eq!(render_inline("1. Install `snarkjs`"), "Install <code>snarkjs</code>");
        assert_eq!(render_inline("# Heading"), "Heading");
        assert_eq!(render_inline("> quoted *text*"), "quoted <em>text</em>");
    }

    #[test]
    fn test_with_expanded_keeps_fragment_last() {
        assert_eq!(
            with_expanded("/api#errors", &["API Reference", "Tutorials"]),
            "/api?expanded=API%20Reference,Tutorials#errors"
        );
        assert_eq!(with_expanded("/", &[]), "/?expanded=");
    }
}
