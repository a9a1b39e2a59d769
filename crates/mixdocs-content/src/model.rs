//! Documentation content model.
//!
//! Pages own their sections, sections own their content blocks. Everything
//! is built once from static definitions and never mutated afterwards, so
//! the types expose plain public fields plus by-value builder methods for
//! authoring.

use serde::Serialize;

/// Sidebar icon attached to a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Book,
    Rocket,
    Layers,
    Shield,
    Code,
    GraduationCap,
    Scale,
    FileText,
}

/// A top-level documentation page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Route path without leading slash, `""` for the root page.
    pub id: String,
    /// Page heading.
    pub title: String,
    /// Second heading line shown under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Introductory paragraph (inline Markdown).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    /// Sidebar icon.
    pub icon: Icon,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            lead: None,
            icon: Icon::FileText,
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = Some(lead.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Look up a section by anchor.
    #[must_use]
    pub fn get_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// URL form of the page path (`/` for root).
    #[must_use]
    pub fn href(&self) -> String {
        format!("/{}", self.id)
    }
}

/// Named anchor target within a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Anchor fragment, unique within the page.
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub blocks: Vec<ContentBlock>,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    #[must_use]
    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.block(ContentBlock::Paragraph(text.into()))
    }

    #[must_use]
    pub fn heading(self, level: u8, text: impl Into<String>) -> Self {
        self.block(ContentBlock::Heading {
            level,
            text: text.into(),
        })
    }

    #[must_use]
    pub fn list<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block(ContentBlock::List(List::unordered(items)))
    }

    #[must_use]
    pub fn steps<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block(ContentBlock::List(List::ordered(items)))
    }

    #[must_use]
    pub fn code(self, sample: CodeSample) -> Self {
        self.block(ContentBlock::Code(sample))
    }

    #[must_use]
    pub fn callout(self, callout: Callout) -> Self {
        self.block(ContentBlock::Callout(callout))
    }

    #[must_use]
    pub fn table(self, table: Table) -> Self {
        self.block(ContentBlock::Table(table))
    }

    #[must_use]
    pub fn cards<I>(self, cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        self.block(ContentBlock::Cards(cards.into_iter().collect()))
    }

    /// Code samples in this section, in display order.
    ///
    /// Samples nested inside callouts are included after their siblings
    /// that precede the callout.
    pub fn code_samples(&self) -> impl Iterator<Item = &CodeSample> {
        let mut samples = Vec::new();
        collect_code_samples(&self.blocks, &mut samples);
        samples.into_iter()
    }
}

fn collect_code_samples<'a>(blocks: &'a [ContentBlock], out: &mut Vec<&'a CodeSample>) {
    for block in blocks {
        match block {
            ContentBlock::Code(sample) => out.push(sample),
            ContentBlock::Callout(callout) => collect_code_samples(&callout.body, out),
            _ => {}
        }
    }
}

/// One unit of section content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Paragraph of inline Markdown.
    Paragraph(String),
    /// Sub-heading below the section title (level 3 or 4).
    Heading { level: u8, text: String },
    List(List),
    Code(CodeSample),
    Callout(Callout),
    Table(Table),
    Cards(Vec<Card>),
}

/// Bulleted or numbered list of inline Markdown items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<String>,
}

impl List {
    #[must_use]
    pub fn unordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ordered: false,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn ordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ordered: true,
            ..Self::unordered(items)
        }
    }
}

/// Example source text, displayed verbatim and never executed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    pub source: String,
    /// Free-form language tag, used only for display.
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CodeSample {
    /// Language used when a sample does not declare one.
    pub const DEFAULT_LANGUAGE: &'static str = "typescript";

    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            language: Self::DEFAULT_LANGUAGE.to_owned(),
            title: None,
        }
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Callout severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Success,
    Danger,
}

/// Highlighted block wrapping nested content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Callout {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: Vec<ContentBlock>,
}

impl Callout {
    /// Callout whose body is a single paragraph.
    #[must_use]
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            title: None,
            body: vec![ContentBlock::Paragraph(text.into())],
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    #[must_use]
    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(Severity::Danger, text)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append another block to the body.
    #[must_use]
    pub fn block(mut self, block: ContentBlock) -> Self {
        self.body.push(block);
        self
    }
}

/// Tabular data. An empty `header` renders a body-only table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }
}

/// Feature or resource card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Card {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            href: None,
        }
    }

    #[must_use]
    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_code_sample_defaults_to_typescript() {
        let sample = CodeSample::new("const x = 1");
        assert_eq!(sample.language, "typescript");
        assert!(sample.title.is_none());
    }

    #[test]
    fn test_section_builder_keeps_block_order() {
        let section = Section::new("wallet", "Connect Your Wallet")
            .paragraph("Intro")
            .code(CodeSample::new("a"))
            .callout(Callout::warning("Careful"));

        assert_eq!(section.blocks.len(), 3);
        assert!(matches!(section.blocks[0], ContentBlock::Paragraph(_)));
        assert!(matches!(section.blocks[1], ContentBlock::Code(_)));
        assert!(matches!(section.blocks[2], ContentBlock::Callout(_)));
    }

    #[test]
    fn test_code_samples_include_nested_callout_samples() {
        let section = Section::new("s", "S")
            .code(CodeSample::new("first"))
            .callout(
                Callout::info("Note").block(ContentBlock::Code(CodeSample::new("nested"))),
            )
            .code(CodeSample::new("last"));

        let sources: Vec<&str> = section.code_samples().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["first", "nested", "last"]);
    }

    #[test]
    fn test_get_section_by_anchor() {
        let page = Page::new("quick-start", "Quick Start")
            .section(Section::new("wallet", "Connect Your Wallet"))
            .section(Section::new("environment", "Environment Setup"));

        assert_eq!(page.get_section("environment").unwrap().title, "Environment Setup");
        assert!(page.get_section("missing").is_none());
        assert_eq!(page.href(), "/quick-start");
    }

    #[test]
    fn test_content_block_serializes_with_type_tag() {
        let block = ContentBlock::Paragraph("Hello".to_owned());
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["data"], "Hello");

        let block = ContentBlock::Callout(Callout::danger("Stop").title("Disclaimer"));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "callout");
        assert_eq!(json["data"]["severity"], "danger");
        assert_eq!(json["data"]["title"], "Disclaimer");
    }

    #[test]
    fn test_ordered_list() {
        let list = List::ordered(["one", "two"]);
        assert!(list.ordered);
        assert_eq!(list.items, vec!["one".to_owned(), "two".to_owned()]);
    }
}
