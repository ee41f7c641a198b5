//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::time::Duration;

use dioxus::prelude::*;

use quotebox_core::{Notification, ThemeMode};

use crate::services::{DesktopClipboard, DesktopWidget};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// A notification currently on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub const fn new() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a toast below the existing ones and return its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notification });
        id
    }

    /// Drop the toast with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Quote widget bound to the durable store
    pub widget: Signal<DesktopWidget>,
    /// Clipboard handle shared by copy actions
    pub clipboard: Signal<DesktopClipboard>,
    /// Toasts on screen
    pub toasts: Signal<ToastQueue>,
}

impl AppState {
    /// Current theme
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.widget.read().theme()
    }

    /// Show a toast and schedule its dismissal.
    pub fn notify(&mut self, notification: Notification) {
        if notification.is_error() {
            tracing::debug!("Error toast: {}", notification.message);
        }
        let id = self.toasts.write().push(notification);

        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            toasts.write().remove(id);
        });
    }

    /// Remove a toast before its timer fires.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_duration_is_three_seconds() {
        assert_eq!(TOAST_DURATION, Duration::from_secs(3));
    }

    #[test]
    fn test_newer_toasts_stack_below_older_ones() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notification::success("New quote loaded!"));
        let second = queue.push(Notification::error("No matching quotes found!"));

        assert!(second > first);
        let messages: Vec<_> = queue
            .toasts()
            .iter()
            .map(|toast| toast.notification.message.as_str())
            .collect();
        assert_eq!(messages, ["New quote loaded!", "No matching quotes found!"]);
    }

    #[test]
    fn test_expired_toast_is_removed_alone() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notification::success("New quote loaded!"));
        let second = queue.push(Notification::success("Quote copied to clipboard!"));

        queue.remove(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notification::success("New quote loaded!"));
        queue.remove(first);
        let second = queue.push(Notification::success("New quote loaded!"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_removing_unknown_id_is_ignored() {
        let mut queue = ToastQueue::new();
        queue.push(Notification::success("New quote loaded!"));
        queue.remove(42);
        assert_eq!(queue.toasts().len(), 1);
    }
}
