//! In-Memory Preference Store
//!
//! Stands in for localStorage when the browser refuses access (private mode,
//! sandboxed frames). Values live for the page lifetime only.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::UiResult;
use crate::traits::PreferenceStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        assert_eq!(MemoryStore::new().get("feedrr-view"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::with_value("feedrr-view", "list");
        store.set("feedrr-view", "cards").unwrap();
        assert_eq!(store.get("feedrr-view").as_deref(), Some("cards"));
    }
}
