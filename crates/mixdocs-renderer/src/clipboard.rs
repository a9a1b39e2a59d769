//! Clipboard access.
//!
//! [`Clipboard`] is the seam between copy actions and the host platform.
//! [`Osc52Clipboard`] asks the terminal to set its clipboard through an
//! OSC 52 escape sequence; [`MemoryClipboard`] keeps the text in process.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Clipboard write failure.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The platform refused access.
    #[error("Clipboard access denied")]
    Denied,
    /// There is no clipboard to write to.
    #[error("No clipboard available: {0}")]
    Unavailable(String),
    #[error("Failed to write to clipboard: {0}")]
    Io(#[from] io::Error),
}

/// Destination for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Terminal clipboard using the OSC 52 escape sequence.
///
/// Writing fails with [`ClipboardError::Unavailable`] when the output is
/// not a terminal, since the sequence would end up as garbage in a file or
/// pipe.
pub struct Osc52Clipboard<W> {
    out: W,
    is_terminal: bool,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Wrap an output stream. `is_terminal` tells whether it is attached
    /// to a terminal.
    pub fn new(out: W, is_terminal: bool) -> Self {
        Self { out, is_terminal }
    }

    /// Escape sequence that sets the system clipboard to `text`.
    #[must_use]
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.is_terminal {
            return Err(ClipboardError::Unavailable(
                "output is not a terminal".to_owned(),
            ));
        }
        self.out.write_all(Self::sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// In-process clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }

    /// Last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::Denied);
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(
            Osc52Clipboard::<Vec<u8>>::sequence("abc"),
            "\x1b]52;c;YWJj\x07"
        );
    }

    #[test]
    fn test_osc52_writes_to_terminal() {
        let mut clipboard = Osc52Clipboard::new(Vec::new(), true);

        clipboard.write_text("npm install wagmi").unwrap();

        let written = String::from_utf8(clipboard.out).unwrap();
        assert_eq!(written, "\x1b]52;c;bnBtIGluc3RhbGwgd2FnbWk=\x07");
    }

    #[test]
    fn test_osc52_unavailable_without_terminal() {
        let mut clipboard = Osc52Clipboard::new(Vec::new(), false);

        let err = clipboard.write_text("abc").unwrap_err();

        assert!(matches!(err, ClipboardError::Unavailable(_)));
        assert!(clipboard.out.is_empty());
    }

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        clipboard.write_text("abc").unwrap();

        assert_eq!(clipboard.contents(), Some("abc"));
    }

    #[test]
    fn test_denied_memory_clipboard() {
        let mut clipboard = MemoryClipboard::denied();

        assert!(matches!(
            clipboard.write_text("abc"),
            Err(ClipboardError::Denied)
        ));
        assert_eq!(clipboard.contents(), None);
    }
}
