//! HTML rendering for the `AproxMixer` documentation.
//!
//! Covers the presentation leaves invoked by page content (code samples and
//! callouts), whole-page rendering with sidebar and table of contents, and
//! the clipboard side of the copy action.
//!
//! # Example
//!
//! ```
//! use mixdocs_content::{CodeSample, ContentBlock, Severity};
//! use mixdocs_renderer::{render_callout, render_code_sample};
//!
//! let html = render_code_sample(&CodeSample::new("npm install wagmi").language("bash"), false);
//! assert!(html.contains(r#"<code class="language-bash">npm install wagmi</code>"#));
//!
//! let html = render_callout(
//!     Severity::Danger,
//!     Some("Disclaimer"),
//!     &[ContentBlock::Paragraph("Not legal advice.".to_owned())],
//! );
//! assert!(html.contains("callout-danger"));
//! ```

mod assets;
mod blocks;
mod callout;
mod clipboard;
mod code;
mod copy;
mod icons;
mod template;
mod util;

pub use assets::{COPY_JS, STYLES_CSS};
pub use blocks::{TocEntry, render_blocks, render_page_body, table_of_contents};
pub use callout::{CalloutStyle, callout_style, render_callout};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, Osc52Clipboard};
pub use code::render_code_sample;
pub use copy::{CopyError, CopyFeedback};
pub use template::{PageData, SCRIPT_PATH, STYLES_PATH, render_document, render_not_found_body};
pub use util::escape_html;
