//! Copy-to-clipboard action with a timed confirmation.

use std::time::{Duration, Instant};

use mixdocs_content::CodeSample;

use crate::clipboard::{Clipboard, ClipboardError};

/// Copy action failure.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// The clipboard rejected the write; no confirmation is shown.
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(#[from] ClipboardError),
}

/// Tracks the "copied" confirmation shown after a successful copy.
///
/// A successful copy starts (or restarts) the confirmation window. A
/// failed copy clears it. Time is passed in explicitly so callers decide
/// what clock drives the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    window: Duration,
    confirmed_at: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl CopyFeedback {
    /// How long the confirmation stays visible by default.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(2000);

    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            confirmed_at: None,
        }
    }

    /// Confirmation window length.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Place `sample.source` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::ClipboardUnavailable`] if the clipboard write
    /// fails.
    pub fn copy<C>(&mut self, clipboard: &mut C, sample: &CodeSample, now: Instant) -> Result<(), CopyError>
    where
        C: Clipboard + ?Sized,
    {
        match clipboard.write_text(&sample.source) {
            Ok(()) => {
                tracing::debug!(bytes = sample.source.len(), "Copied code sample");
                self.confirmed_at = Some(now);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard unavailable");
                self.confirmed_at = None;
                Err(CopyError::ClipboardUnavailable(e))
            }
        }
    }

    /// Whether the confirmation is visible at `now`.
    #[must_use]
    pub fn is_confirming(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left before the confirmation reverts.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let started = self.confirmed_at?;
        let elapsed = now.saturating_duration_since(started);
        self.window.checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}
