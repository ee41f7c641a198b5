//! Where the quote store lives on disk

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the store location
pub const DB_PATH_ENV: &str = "QUOTEBOX_DB_PATH";

/// Pick the store path: an explicit path first, then `QUOTEBOX_DB_PATH`,
/// then [`default_db_path`].
///
/// The CLI and the desktop window both resolve through here so they share
/// one file.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var_os(DB_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

/// `<data_dir>/quotebox/quotebox.db`, or the working directory when the
/// platform has no data directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quotebox")
        .join("quotebox.db")
}
