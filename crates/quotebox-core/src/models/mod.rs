//! Data models for Quotebox

mod notification;
mod quote;
mod theme;

pub use notification::{
    Notification, NotificationKind, COPY_FAILED, NEW_QUOTE_LOADED, NO_MATCHING_QUOTES, QUOTE_COPIED,
};
pub use quote::Quote;
pub use theme::ThemeMode;
