use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;

use crate::repository::traits::EventStore;

/// In-process store for tests and embedders that own persistence themselves.
#[derive(Default)]
pub struct MemoryEventStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, json: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), json.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl EventStore for MemoryEventStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, json: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), json.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_value() {
        let store = MemoryEventStore::new();
        assert_eq!(store.load("practices").unwrap(), None);
        store.save("practices", "[1]").unwrap();
        store.save("practices", "[2]").unwrap();
        assert_eq!(store.load("practices").unwrap(), Some("[2]".to_string()));
    }
}
