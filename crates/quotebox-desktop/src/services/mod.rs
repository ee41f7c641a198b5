//! Application services
//!
//! Quote storage and clipboard access for the desktop window.

mod clipboard;
mod store;

pub use clipboard::DesktopClipboard;
pub use store::{open_store, DesktopStore, DesktopWidget};
