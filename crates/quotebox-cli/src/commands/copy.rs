use std::path::Path;

use quotebox_core::clipboard::{Clipboard, SystemClipboard};
use quotebox_core::Notification;

use crate::commands::common::{open_widget, print_notification};
use crate::error::CliError;

/// The process exits right after copying, so the clipboard has to keep
/// serving the text until something else is copied.
pub const fn system_clipboard() -> SystemClipboard {
    SystemClipboard::serving_until_replaced()
}

/// Copy the current quote, returning the notification that was shown.
///
/// Nothing is printed when there is no current quote.
pub fn run_copy<C>(db_path: &Path, clipboard: &mut C) -> Result<Option<Notification>, CliError>
where
    C: Clipboard + ?Sized,
{
    let widget = open_widget(db_path)?;
    let notification = widget.copy_current_quote(clipboard);
    if let Some(notification) = &notification {
        print_notification(notification);
    }
    Ok(notification)
}
