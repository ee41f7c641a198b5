//! Database connection management

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use super::migrations;
use crate::error::Result;

/// Database wrapper for a `SQLite` connection
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open a database at the given path, creating it (and its parent
    /// directories) if it doesn't exist
    ///
    /// Runs migrations automatically.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let database = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        database.configure();
        database.migrate()?;
        tracing::debug!("Opened quote store at {}", path.display());
        Ok(database)
    }

    /// Open an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let database = Self { conn, path: None };
        database.configure();
        database.migrate()?;
        Ok(database)
    }

    /// Configure `SQLite` pragmas
    fn configure(&self) {
        // In-memory databases reject WAL; that is fine.
        for pragma in [
            "PRAGMA journal_mode = WAL;",
            "PRAGMA synchronous = NORMAL;",
        ] {
            if let Err(error) = self.conn.execute_batch(pragma) {
                tracing::debug!("Ignoring pragma failure ({pragma}): {error}");
            }
        }
    }

    /// Run database migrations
    fn migrate(&self) -> Result<()> {
        migrations::run(&self.conn)
    }

    /// Filesystem location, or `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a reference to the underlying connection
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.path().is_none());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("nested").join("dir").join("quotebox.db");

        let db = Database::open(&db_path).unwrap();
        assert_eq!(db.path(), Some(db_path.as_path()));
        assert!(db_path.exists());

        let one: i32 = db
            .connection()
            .query_row("SELECT 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(one, 1);
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("quotebox.db");

        drop(Database::open(&db_path).unwrap());
        let db = Database::open(&db_path).unwrap();
        let versions: i32 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(versions, 1);
    }
}
