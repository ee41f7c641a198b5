//! quotebox-core - Core library for Quotebox
//!
//! This crate contains the quote catalog, search, durable key-value storage,
//! and the widget state shared by the Quotebox interfaces (desktop and CLI).

pub mod catalog;
pub mod clipboard;
pub mod db;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
pub mod widget;

pub use catalog::catalog;
pub use error::{Error, Result};
pub use models::{Notification, NotificationKind, Quote, ThemeMode};
pub use widget::QuoteWidget;
