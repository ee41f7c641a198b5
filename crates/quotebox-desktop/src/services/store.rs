//! Quote store for the desktop application

use std::path::Path;

use quotebox_core::db::{resolve_db_path, Database};
use quotebox_core::store::{KeyValueStore, MemoryStore};
use quotebox_core::{QuoteWidget, Result};

pub type DesktopWidget = QuoteWidget<DesktopStore>;

/// Durable store when the database opens, in-memory otherwise.
pub enum DesktopStore {
    Disk(Database),
    Memory(MemoryStore),
}

impl DesktopStore {
    pub const fn is_durable(&self) -> bool {
        matches!(self, Self::Disk(_))
    }
}

impl KeyValueStore for DesktopStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Disk(db) => db.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Disk(db) => db.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

/// Open the shared quote store, falling back to memory on failure.
///
/// The CLI reads the same file, so both see the same last quote and theme.
pub fn open_store() -> DesktopStore {
    open_store_at(&resolve_db_path(None))
}

fn open_store_at(path: &Path) -> DesktopStore {
    match Database::open(path) {
        Ok(db) => {
            tracing::info!("Using quote store at {}", path.display());
            DesktopStore::Disk(db)
        }
        Err(e) => {
            tracing::error!(
                "Failed to open quote store at {}: {}. Changes will not be saved.",
                path.display(),
                e
            );
            DesktopStore::Memory(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebox_core::store::THEME_KEY;

    #[test]
    fn test_open_store_at_writable_path_is_durable() {
        let tmp = tempfile::tempdir().unwrap();
        let store = open_store_at(&tmp.path().join("quotebox.db"));
        assert!(store.is_durable());
    }

    #[test]
    fn test_unopenable_path_falls_back_to_memory() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file
        let mut store = open_store_at(tmp.path());
        assert!(!store.is_durable());

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_widget_state_survives_restart() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("quotebox.db");

        let mut widget = DesktopWidget::load(open_store_at(&path));
        widget.request_new_quote().unwrap();
        widget.toggle_theme().unwrap();
        let shown = widget.current_quote().cloned();
        drop(widget);

        let restored = DesktopWidget::load(open_store_at(&path));
        assert_eq!(restored.current_quote().cloned(), shown);
        assert!(restored.is_dark_theme());
    }
}
