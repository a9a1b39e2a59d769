//! Content block and page body rendering.

use std::fmt::Write;

use mixdocs_content::{Card, ContentBlock, List, Page, Section, Table};
use serde::Serialize;

use crate::callout::write_callout_block;
use crate::code::write_code_sample;
use crate::util::{escape_html, render_inline};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level (2 for sections).
    pub level: u8,
    pub title: String,
    /// Anchor id.
    pub id: String,
}

/// Table of contents for a page: one entry per section.
#[must_use]
pub fn table_of_contents(page: &Page) -> Vec<TocEntry> {
    page.sections
        .iter()
        .map(|s| TocEntry {
            level: 2,
            title: s.title.clone(),
            id: s.id.clone(),
        })
        .collect()
}

/// Render the article body of a page: header followed by every section.
#[must_use]
pub fn render_page_body(page: &Page) -> String {
    let mut out = String::with_capacity(16 * 1024);

    out.push_str(r#"<header class="page-header">"#);
    let _ = write!(out, "<h1>{}</h1>", escape_html(&page.title));
    if let Some(subtitle) = &page.subtitle {
        let _ = write!(out, r#"<p class="page-subtitle">{}</p>"#, escape_html(subtitle));
    }
    if let Some(lead) = &page.lead {
        let _ = write!(out, r#"<p class="lead">{}</p>"#, render_inline(lead));
    }
    out.push_str("</header>");

    for section in &page.sections {
        write_section(section, &mut out);
    }
    out
}

fn write_section(section: &Section, out: &mut String) {
    let _ = write!(
        out,
        r#"<section id="{}" class="doc-section"><h2>{}</h2>"#,
        escape_html(&section.id),
        escape_html(&section.title),
    );
    if let Some(subtitle) = &section.subtitle {
        let _ = write!(out, r#"<p class="section-subtitle">{}</p>"#, escape_html(subtitle));
    }
    write_blocks(&section.blocks, out);
    out.push_str("</section>");
}

/// Render a sequence of content blocks.
#[must_use]
pub fn render_blocks(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    write_blocks(blocks, &mut out);
    out
}

pub(crate) fn write_blocks(blocks: &[ContentBlock], out: &mut String) {
    for block in blocks {
        match block {
            ContentBlock::Paragraph(text) => {
                let _ = write!(out, "<p>{}</p>", render_inline(text));
            }
            ContentBlock::Heading { level, text } => {
                let level = (*level).clamp(3, 6);
                let _ = write!(out, "<h{level}>{}</h{level}>", escape_html(text));
            }
            ContentBlock::List(list) => write_list(list, out),
            ContentBlock::Code(sample) => write_code_sample(sample, false, out),
            ContentBlock::Callout(callout) => write_callout_block(callout, out),
            ContentBlock::Table(table) => write_table(table, out),
            ContentBlock::Cards(cards) => write_cards(cards, out),
        }
    }
}

fn write_list(list: &List, out: &mut String) {
    let tag = if list.ordered { "ol" } else { "ul" };
    let _ = write!(out, "<{tag}>");
    for item in &list.items {
        let _ = write!(out, "<li>{}</li>", render_inline(item));
    }
    let _ = write!(out, "</{tag}>");
}

fn write_table(table: &Table, out: &mut String) {
    out.push_str(r#"<div class="table-wrapper"><table>"#);
    if !table.header.is_empty() {
        out.push_str("<thead><tr>");
        for cell in &table.header {
            let _ = write!(out, "<th>{}</th>", escape_html(cell));
        }
        out.push_str("</tr></thead>");
    }
    out.push_str("<tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
}

fn write_cards(cards: &[Card], out: &mut String) {
    out.push_str(r#"<div class="card-grid">"#);
    for card in cards {
        let body = format!(
            "<h4>{}</h4><p>{}</p>",
            escape_html(&card.title),
            escape_html(&card.description)
        );
        match &card.href {
            Some(href) if is_external(href) => {
                let _ = write!(
                    out,
                    r#"<a class="card" href="{}" target="_blank" rel="noopener noreferrer">{body}</a>"#,
                    escape_html(href),
                );
            }
            Some(href) => {
                let _ = write!(out, r#"<a class="card" href="{}">{body}</a>"#, escape_html(href));
            }
            None => {
                let _ = write!(out, r#"<div class="card">{body}</div>"#);
            }
        }
    }
    out.push_str("</div>");
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use mixdocs_content::{Callout, CodeSample};
    use pretty_assertions::assert_eq;

    use super::*;

    fn page() -> Page {
        Page::new("quick-start", "Quick Start")
            .lead("Get started in **minutes**.")
            .section(
                Section::new("wallet", "Connect Your Wallet")
                    .subtitle("Using WalletConnect")
                    .steps(["Open the app", "Approve"])
                    .code(CodeSample::new("connect()").language("tsx")),
            )
            .section(
                Section::new("environment", "Environment Setup")
                    .callout(Callout::info("Use Anvil locally.")),
            )
    }

    #[test]
    fn test_toc_has_one_entry_per_section() {
        let toc = table_of_contents(&page());

        assert_eq!(
            toc,
            vec![
                TocEntry {
                    level: 2,
                    title: "Connect Your Wallet".to_owned(),
                    id: "wallet".to_owned(),
                },
                TocEntry {
                    level: 2,
                    title: "Environment Setup".to_owned(),
                    id: "environment".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_page_body_sections_have_anchors() {
        let html = render_page_body(&page());

        assert!(html.contains("<h1>Quick Start</h1>"));
        assert!(html.contains(r#"<p class="lead">Get started in <strong>minutes</strong>.</p>"#));
        assert!(html.contains(r#"<section id="wallet" class="doc-section"><h2>Connect Your Wallet</h2>"#));
        assert!(html.contains(r#"<section id="environment" class="doc-section">"#));
        assert!(html.contains("<ol><li>Open the app</li><li>Approve</li></ol>"));
        assert!(html.contains("callout-info"));
    }

    #[test]
    fn test_table_without_header() {
        let html = render_blocks(&[ContentBlock::Table(
            Table::default().row(["Sepolia", "0.01 ETH", "0x1234...abcd"]),
        )]);

        assert!(!html.contains("<thead>"));
        assert!(html.contains("<td>Sepolia</td><td>0.01 ETH</td><td>0x1234...abcd</td>"));
    }

    #[test]
    fn test_external_card_opens_new_tab() {
        let html = render_blocks(&[ContentBlock::Cards(vec![
            Card::new("wagmi", "React Hooks").link("https://wagmi.sh/"),
            Card::new("Quick Start", "Minutes").link("/quick-start"),
            Card::new("Plain", "No link"),
        ])]);

        assert!(html.contains(r#"href="https://wagmi.sh/" target="_blank""#));
        assert!(html.contains(r#"<a class="card" href="/quick-start">"#));
        assert!(html.contains(r#"<div class="card"><h4>Plain</h4>"#));
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let html = render_blocks(&[ContentBlock::Heading {
            level: 1,
            text: "Too big".to_owned(),
        }]);

        assert_eq!(html, "<h3>Too big</h3>");
    }
}
