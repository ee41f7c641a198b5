//! Durable key-value storage seam
//!
//! The widget persists two entries: the last shown quote (JSON) and the theme
//! literal. Any synchronous get/set store will do; [`crate::db::Database`]
//! is the on-disk implementation and [`MemoryStore`] the in-process one.

use std::collections::HashMap;

use crate::error::Result;

/// Key holding the JSON-serialized last shown quote
pub const LAST_QUOTE_KEY: &str = "lastQuote";
/// Key holding `"dark"` or `"light"`
pub const THEME_KEY: &str = "theme";

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Non-durable store backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_with_entries_prepopulates() {
        let store = MemoryStore::with_entries([(LAST_QUOTE_KEY, "not-json")]);
        assert_eq!(store.get(LAST_QUOTE_KEY).unwrap().as_deref(), Some("not-json"));
    }
}
