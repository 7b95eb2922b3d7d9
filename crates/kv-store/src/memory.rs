//! In-process store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::store::KeyValueStore;

/// A store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    name: String,
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.lock() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => {
                tracing::warn!(store = %self.name, key, "Memory store lock poisoned");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::MutexPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::MutexPoisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::MutexPoisoned)?;
        entries.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
