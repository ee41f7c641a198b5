use std::path::Path;

use crate::commands::common::{format_quote_block, open_widget};
use crate::error::CliError;

pub fn run_show(db_path: &Path) -> Result<(), CliError> {
    let widget = open_widget(db_path)?;

    match widget.current_quote() {
        Some(quote) => println!("{}", format_quote_block(quote)),
        None => println!("No quote yet. Run `quotebox new` to get one."),
    }
    println!();
    println!("Theme: {}", widget.theme());
    Ok(())
}
