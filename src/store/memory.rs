// src/store/memory.rs
//! Volatile in-process store with an optional byte quota

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::KeyValueStore;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would push the total of name + value bytes past `limit`
    pub fn with_quota(limit: usize) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, name: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(name).cloned())
    }

    fn set_item(&self, name: &str, value: &str) -> StoreResult<()> {
        let mut items = self.lock()?;
        if let Some(limit) = self.quota {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != name)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + name.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded { needed, limit });
            }
        }
        items.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, name: &str) -> StoreResult<()> {
        self.lock()?.remove(name);
        Ok(())
    }
}
