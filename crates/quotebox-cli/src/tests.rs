use std::path::PathBuf;

use pretty_assertions::assert_eq;
use quotebox_core::clipboard::RecordingClipboard;
use quotebox_core::db::Database;
use quotebox_core::store::{KeyValueStore, LAST_QUOTE_KEY, THEME_KEY};
use quotebox_core::{catalog, Notification, Quote, ThemeMode};
use tempfile::TempDir;

use crate::cli::CompletionShell;
use crate::commands::common::{format_quote_block, format_quote_lines, open_widget, render_quotes};
use crate::commands::completions::{render_completions, run_completions};
use crate::commands::copy::{run_copy, system_clipboard};
use crate::commands::new::run_new;
use crate::commands::search::search_quotes;
use crate::commands::theme::toggle_theme;

fn test_db_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotebox.db");
    (dir, path)
}

#[test]
fn format_quote_block_uses_curly_quotes() {
    let quote = Quote::new("Turn your wounds into wisdom.", "Oprah Winfrey");
    assert_eq!(
        format_quote_block(&quote),
        "\u{201c}Turn your wounds into wisdom.\u{201d}\n    \u{2014} Oprah Winfrey"
    );
}

#[test]
fn format_quote_lines_follow_clipboard_format() {
    let lines = format_quote_lines(&catalog()[..1]);
    assert_eq!(
        lines,
        vec!["\"The best way to predict the future is to invent it.\" — Alan Kay".to_string()]
    );
}

#[test]
fn render_quotes_as_json_round_trips() {
    let rendered = render_quotes(catalog(), true).unwrap();
    let parsed: Vec<Quote> = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, catalog().to_vec());
}

#[test]
fn render_empty_results_as_json_is_empty_array() {
    assert_eq!(render_quotes(&[], true).unwrap(), "[]");
}

#[test]
fn new_quote_is_persisted_to_store() {
    let (_dir, db_path) = test_db_path();
    run_new(&db_path).unwrap();

    let db = Database::open(&db_path).unwrap();
    let stored = db.get(LAST_QUOTE_KEY).unwrap().unwrap();
    let quote: Quote = serde_json::from_str(&stored).unwrap();
    assert!(catalog().contains(&quote));

    let widget = open_widget(&db_path).unwrap();
    assert_eq!(widget.current_quote(), Some(&quote));
}

#[test]
fn copy_without_quote_writes_nothing() {
    let (_dir, db_path) = test_db_path();
    let mut clipboard = RecordingClipboard::new();

    let notification = run_copy(&db_path, &mut clipboard).unwrap();
    assert_eq!(notification, None);
    assert!(clipboard.writes().is_empty());
}

#[test]
fn copy_command_keeps_serving_clipboard_after_write() {
    assert!(system_clipboard().serves_until_replaced());
}

#[test]
fn copy_after_new_writes_current_quote() {
    let (_dir, db_path) = test_db_path();
    run_new(&db_path).unwrap();
    let current = open_widget(&db_path)
        .unwrap()
        .current_quote()
        .cloned()
        .unwrap();

    let mut clipboard = RecordingClipboard::new();
    let notification = run_copy(&db_path, &mut clipboard).unwrap();
    assert_eq!(
        notification,
        Some(Notification::success("Quote copied to clipboard!"))
    );
    assert_eq!(clipboard.writes(), [current.to_clipboard_text()]);
}

#[test]
fn corrupted_store_recovers_first_quote() {
    let (_dir, db_path) = test_db_path();
    {
        let mut db = Database::open(&db_path).unwrap();
        db.set(LAST_QUOTE_KEY, "not-json").unwrap();
    }

    let widget = open_widget(&db_path).unwrap();
    assert_eq!(widget.current_quote(), Some(&catalog()[0]));
}

#[test]
fn search_matches_author_case_insensitively() {
    let (_dir, db_path) = test_db_path();
    let (results, notification) = search_quotes("EinStein", &db_path).unwrap();
    assert_eq!(notification, None);
    assert_eq!(results, vec![catalog()[12].clone(), catalog()[14].clone()]);
}

#[test]
fn search_without_match_reports_error() {
    let (_dir, db_path) = test_db_path();
    let (results, notification) = search_quotes("zzz-no-match", &db_path).unwrap();
    assert!(results.is_empty());
    assert_eq!(
        notification,
        Some(Notification::error("No matching quotes found!"))
    );
}

#[test]
fn empty_search_lists_everything() {
    let (_dir, db_path) = test_db_path();
    let (results, _) = search_quotes("", &db_path).unwrap();
    assert_eq!(results, catalog().to_vec());
}

#[test]
fn toggle_theme_twice_restores_persisted_value() {
    let (_dir, db_path) = test_db_path();

    assert_eq!(toggle_theme(&db_path).unwrap(), ThemeMode::Dark);
    assert_eq!(
        Database::open(&db_path).unwrap().get(THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );

    assert_eq!(toggle_theme(&db_path).unwrap(), ThemeMode::Light);
    assert_eq!(
        Database::open(&db_path).unwrap().get(THEME_KEY).unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn completions_mention_binary_name() {
    for shell in [CompletionShell::Bash, CompletionShell::Zsh, CompletionShell::Fish] {
        let script = String::from_utf8(render_completions(shell)).unwrap();
        assert!(script.contains("quotebox"), "{shell:?} completions");
    }
}

#[test]
fn completions_write_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("quotebox.bash");
    run_completions(CompletionShell::Bash, Some(&output)).unwrap();
    assert!(std::fs::read_to_string(&output).unwrap().contains("quotebox"));
}
