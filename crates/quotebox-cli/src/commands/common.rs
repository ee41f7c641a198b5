use std::path::Path;

use quotebox_core::db::Database;
use quotebox_core::{Notification, NotificationKind, Quote, QuoteWidget};

use crate::error::CliError;

pub type CliWidget = QuoteWidget<Database>;

pub fn open_widget(db_path: &Path) -> Result<CliWidget, CliError> {
    let db = Database::open(db_path)?;
    Ok(QuoteWidget::load(db))
}

/// Success goes to stdout, errors to stderr.
pub fn print_notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Success => println!("{}", notification.message),
        NotificationKind::Error => eprintln!("{}", notification.message),
    }
}

/// Two-line display block used for the current quote.
pub fn format_quote_block(quote: &Quote) -> String {
    format!("\u{201c}{}\u{201d}\n    \u{2014} {}", quote.text, quote.author)
}

pub fn format_quote_lines(quotes: &[Quote]) -> Vec<String> {
    quotes.iter().map(Quote::to_clipboard_text).collect()
}

pub fn render_quotes(quotes: &[Quote], as_json: bool) -> Result<String, CliError> {
    if as_json {
        Ok(serde_json::to_string_pretty(quotes)?)
    } else {
        Ok(format_quote_lines(quotes).join("\n"))
    }
}
