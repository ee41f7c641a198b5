//! System clipboard for the desktop window

use quotebox_core::clipboard::Clipboard;
use quotebox_core::{Error, Result};

/// Clipboard handle kept for the lifetime of the window.
///
/// On X11 and Wayland the copied text is only served while the handle that
/// set it is alive, so the handle is created once and reused.
#[derive(Default)]
pub struct DesktopClipboard {
    inner: Option<arboard::Clipboard>,
}

impl DesktopClipboard {
    pub const fn new() -> Self {
        Self { inner: None }
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".to_string()))
    }
}

impl Clipboard for DesktopClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self.handle()?;
        if let Err(e) = clipboard.set_text(text.to_string()) {
            // Drop the handle so the next copy reconnects
            self.inner = None;
            return Err(Error::Clipboard(e.to_string()));
        }
        Ok(())
    }
}
