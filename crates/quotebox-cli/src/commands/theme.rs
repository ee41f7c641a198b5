use std::path::Path;

use quotebox_core::ThemeMode;

use crate::commands::common::open_widget;
use crate::error::CliError;

pub fn run_theme_toggle(db_path: &Path) -> Result<(), CliError> {
    let theme = toggle_theme(db_path)?;
    println!("Theme: {theme}");
    Ok(())
}

pub fn run_theme_show(db_path: &Path) -> Result<(), CliError> {
    let widget = open_widget(db_path)?;
    println!("Theme: {}", widget.theme());
    Ok(())
}

pub fn toggle_theme(db_path: &Path) -> Result<ThemeMode, CliError> {
    let mut widget = open_widget(db_path)?;
    let theme = widget.toggle_theme()?;
    tracing::debug!("Theme switched to {theme}");
    Ok(theme)
}
