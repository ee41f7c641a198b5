use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "quotebox")]
#[command(about = "Random inspirational quotes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local quote store
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current quote and theme
    Show,
    /// Draw a new random quote
    #[command(alias = "next")]
    New,
    /// Copy the current quote to the clipboard
    Copy,
    /// Search quotes by word or author
    Search {
        /// Case-insensitive text to look for (empty matches everything)
        #[arg(default_value = "")]
        term: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every quote in the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle or show the light/dark theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Toggle)]
        action: ThemeAction,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ThemeAction {
    Toggle,
    Show,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
