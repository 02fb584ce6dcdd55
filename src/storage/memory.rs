//! In-memory key-value storage for tests and ephemeral sessions.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Storage that keeps everything in a map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
