//! Callout rendering.

use std::fmt::Write;

use mixdocs_content::{Callout, ContentBlock, Severity};

use crate::blocks::write_blocks;
use crate::util::escape_html;

const SVG_INFO: &str = r#"<svg class="callout-icon" viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><circle cx="12" cy="12" r="10"></circle><path d="M12 16v-4"></path><path d="M12 8h.01"></path></svg>"#;
const SVG_TRIANGLE: &str = r#"<svg class="callout-icon" viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"></path><path d="M12 9v4"></path><path d="M12 17h.01"></path></svg>"#;
const SVG_CHECK_CIRCLE: &str = r#"<svg class="callout-icon" viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path><path d="m9 11 3 3L22 4"></path></svg>"#;
const SVG_ALERT_CIRCLE: &str = r#"<svg class="callout-icon" viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><circle cx="12" cy="12" r="10"></circle><path d="M12 8v4"></path><path d="M12 16h.01"></path></svg>"#;

/// Visual treatment of a callout severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalloutStyle {
    /// CSS modifier class.
    pub class: &'static str,
    /// Inline SVG icon.
    pub icon: &'static str,
    /// Accessible label announced for the icon.
    pub label: &'static str,
}

/// Fixed style for each severity.
#[must_use]
pub fn callout_style(severity: Severity) -> CalloutStyle {
    let (class, icon, label) = match severity {
        Severity::Info => ("callout-info", SVG_INFO, "Info"),
        Severity::Warning => ("callout-warning", SVG_TRIANGLE, "Warning"),
        Severity::Success => ("callout-success", SVG_CHECK_CIRCLE, "Success"),
        Severity::Danger => ("callout-danger", SVG_ALERT_CIRCLE, "Danger"),
    };
    CalloutStyle { class, icon, label }
}

/// Render a callout box around arbitrary content.
pub fn render_callout(severity: Severity, title: Option<&str>, content: &[ContentBlock]) -> String {
    let mut out = String::with_capacity(512);
    write_callout(severity, title, content, &mut out);
    out
}

pub(crate) fn write_callout_block(callout: &Callout, out: &mut String) {
    write_callout(callout.severity, callout.title.as_deref(), &callout.body, out);
}

fn write_callout(severity: Severity, title: Option<&str>, content: &[ContentBlock], out: &mut String) {
    let style = callout_style(severity);
    let _ = write!(
        out,
        r#"<div class="callout {}" role="note" aria-label="{}">{}<div class="callout-body">"#,
        style.class, style.label, style.icon,
    );
    if let Some(title) = title {
        let _ = write!(out, r#"<h4 class="callout-title">{}</h4>"#, escape_html(title));
    }
    out.push_str(r#"<div class="callout-content">"#);
    write_blocks(content, out);
    out.push_str("</div></div></div>");
}
