use quotebox_core::catalog;

use crate::commands::common::render_quotes;
use crate::error::CliError;

pub fn run_list(as_json: bool) -> Result<(), CliError> {
    println!("{}", render_quotes(catalog(), as_json)?);
    Ok(())
}
