//! Clipboard seam
//!
//! The widget only needs a single text write. [`SystemClipboard`] talks to the
//! platform clipboard; [`RecordingClipboard`] keeps writes in memory.

use crate::error::{Error, Result};

/// Destination for copied quote text
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that records writes instead of touching the system clipboard.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Vec<String>,
}

impl RecordingClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text written so far, oldest first
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// The operating system clipboard (via `arboard`)
///
/// On X11 and Wayland the copied text is served by the process that set it,
/// so a process that exits right after copying must use
/// [`SystemClipboard::serving_until_replaced`] to keep the text available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClipboard {
    serve_until_replaced: bool,
}

impl SystemClipboard {
    /// Set the text and return immediately
    #[must_use]
    pub const fn new() -> Self {
        Self {
            serve_until_replaced: false,
        }
    }

    /// Keep serving the copied text until another program replaces it.
    ///
    /// On Linux `write_text` blocks until then. Other platforms keep clipboard
    /// contents after the process exits, so this behaves like [`Self::new`].
    #[must_use]
    pub const fn serving_until_replaced() -> Self {
        Self {
            serve_until_replaced: true,
        }
    }

    pub const fn serves_until_replaced(&self) -> bool {
        self.serve_until_replaced
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|error| Error::Clipboard(error.to_string()))?;

        #[cfg(target_os = "linux")]
        if self.serve_until_replaced {
            use arboard::SetExtLinux;

            tracing::info!("Holding the clipboard until something else is copied");
            return clipboard
                .set()
                .wait()
                .text(text)
                .map_err(|error| Error::Clipboard(error.to_string()));
        }

        clipboard
            .set_text(text)
            .map_err(|error| Error::Clipboard(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clipboard_returns_immediately_by_default() {
        assert!(!SystemClipboard::new().serves_until_replaced());
        assert_eq!(SystemClipboard::default(), SystemClipboard::new());
    }

    #[test]
    fn test_serving_clipboard_waits_for_replacement() {
        assert!(SystemClipboard::serving_until_replaced().serves_until_replaced());
    }

    #[test]
    fn test_recording_clipboard_keeps_writes_in_order() {
        let mut clipboard = RecordingClipboard::new();
        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();
        assert_eq!(clipboard.writes(), ["first".to_string(), "second".to_string()]);
    }
}
