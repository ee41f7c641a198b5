//! Transient user-facing notifications

/// Shown after a new quote is drawn
pub const NEW_QUOTE_LOADED: &str = "New quote loaded!";
/// Shown after the current quote reaches the clipboard
pub const QUOTE_COPIED: &str = "Quote copied to clipboard!";
/// Shown when a search yields nothing
pub const NO_MATCHING_QUOTES: &str = "No matching quotes found!";
/// Shown when the clipboard rejects a write
pub const COPY_FAILED: &str = "Could not copy quote to clipboard.";

/// Visual variant of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A short-lived, non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, NotificationKind::Error)
    }
}
