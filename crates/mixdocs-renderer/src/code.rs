//! Code sample rendering.

use std::fmt::Write;

use mixdocs_content::CodeSample;

use crate::util::escape_html;

const SVG_COPY: &str = r#"<svg class="copy-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><rect x="9" y="9" width="13" height="13" rx="2"></rect><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path></svg>"#;
const SVG_CHECK: &str = r#"<svg class="check-icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M20 6 9 17l-5-5"></path></svg>"#;

/// Render a code sample with its copy button.
///
/// The source is escaped and otherwise emitted verbatim. `copied` selects
/// the confirmation state of the button; both icons are always present so
/// the client script can switch between them.
pub fn render_code_sample(sample: &CodeSample, copied: bool) -> String {
    let mut out = String::with_capacity(sample.source.len() + 1024);
    write_code_sample(sample, copied, &mut out);
    out
}

pub(crate) fn write_code_sample(sample: &CodeSample, copied: bool, out: &mut String) {
    let language = escape_html(&sample.language);
    let state = if copied { "copied" } else { "idle" };

    out.push_str(r#"<div class="code-block">"#);
    if let Some(title) = &sample.title {
        let _ = write!(
            out,
            r#"<div class="code-header"><span class="code-title">{}</span><span class="code-language">{language}</span></div>"#,
            escape_html(title),
        );
    }
    let _ = write!(
        out,
        r#"<div class="code-body"><pre><code class="language-{language}">{}</code></pre><button type="button" class="copy-button" data-copy-state="{state}" aria-label="Copy code">{SVG_COPY}{SVG_CHECK}</button></div></div>"#,
        escape_html(&sample.source),
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let sample = CodeSample::new("const a = 1").title("Example");

        assert_eq!(
            render_code_sample(&sample, false),
            render_code_sample(&sample, false)
        );
    }

    #[test]
    fn test_source_is_escaped_not_evaluated() {
        let sample = CodeSample::new("return <span>Connected: {address}</span>").language("tsx");

        let html = render_code_sample(&sample, false);

        assert!(html.contains(
            r#"<code class="language-tsx">return &lt;span&gt;Connected: {address}&lt;/span&gt;</code>"#
        ));
    }

    #[test]
    fn test_header_only_with_title() {
        let untitled = render_code_sample(&CodeSample::new("x"), false);
        assert!(!untitled.contains("code-header"));

        let titled = render_code_sample(
            &CodeSample::new("x").language("bash").title(".env.example"),
            false,
        );
        assert!(titled.contains(r#"<span class="code-title">.env.example</span>"#));
        assert!(titled.contains(r#"<span class="code-language">bash</span>"#));
    }

    #[test]
    fn test_copy_state() {
        let sample = CodeSample::new("abc");

        assert!(render_code_sample(&sample, false).contains(r#"data-copy-state="idle""#));
        assert!(render_code_sample(&sample, true).contains(r#"data-copy-state="copied""#));
    }

    #[test]
    fn test_default_language_class() {
        let html = render_code_sample(&CodeSample::new("abc"), false);

        assert!(html.contains(r#"class="language-typescript""#));
    }
}
