//! Quotebox CLI - random inspirational quotes in the terminal
//!
//! Shares its quote store with the desktop app, so the last quote and theme
//! follow you between the two.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};
use quotebox_core::db::resolve_db_path;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, ThemeAction};
use crate::commands::completions::run_completions;
use crate::commands::copy::{run_copy, system_clipboard};
use crate::commands::list::run_list;
use crate::commands::new::run_new;
use crate::commands::search::run_search;
use crate::commands::show::run_show;
use crate::commands::theme::{run_theme_show, run_theme_toggle};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotebox=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path);

    match cli.command {
        Some(Commands::Show) => run_show(&db_path)?,
        Some(Commands::New) => run_new(&db_path)?,
        Some(Commands::Copy) => {
            run_copy(&db_path, &mut system_clipboard())?;
        }
        Some(Commands::Search { term, json }) => run_search(&term, json, &db_path)?,
        Some(Commands::List { json }) => run_list(json)?,
        Some(Commands::Theme { action }) => match action {
            ThemeAction::Toggle => run_theme_toggle(&db_path)?,
            ThemeAction::Show => run_theme_show(&db_path)?,
        },
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            if db_path.exists() {
                run_show(&db_path)?;
            } else {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            }
        }
    }

    Ok(())
}
