use std::path::Path;

use quotebox_core::{Notification, Quote};

use crate::commands::common::{open_widget, print_notification, render_quotes};
use crate::error::CliError;

pub fn run_search(term: &str, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let (results, notification) = search_quotes(term, db_path)?;

    if as_json || !results.is_empty() {
        println!("{}", render_quotes(&results, as_json)?);
    }
    if let Some(notification) = notification {
        print_notification(&notification);
    }

    Ok(())
}

pub fn search_quotes(
    term: &str,
    db_path: &Path,
) -> Result<(Vec<Quote>, Option<Notification>), CliError> {
    let mut widget = open_widget(db_path)?;
    widget.set_search_term(term);
    let notification = widget.run_search();
    Ok((widget.search_results().to_vec(), notification))
}
