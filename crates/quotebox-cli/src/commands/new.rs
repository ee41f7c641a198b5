use std::path::Path;

use crate::commands::common::{format_quote_block, open_widget, print_notification};
use crate::error::CliError;

pub fn run_new(db_path: &Path) -> Result<(), CliError> {
    let mut widget = open_widget(db_path)?;
    let notification = widget.request_new_quote()?;

    if let Some(quote) = widget.current_quote() {
        println!("{}", format_quote_block(quote));
    }
    print_notification(&notification);
    Ok(())
}
