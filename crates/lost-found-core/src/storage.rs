//! Storage Layer - Key-Value Backends
//!
//! The record store persists each collection as one text value under one
//! key. Backends only need string get/set/remove, which is exactly what the
//! browser's `localStorage` offers.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::StoreResult;

/// Minimal key-value contract the record store is written against
///
/// Implementations: browser local storage (frontend), in-memory (tests and
/// fallback when local storage is unavailable).
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if unset or unreadable
    fn get_item(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Drop the value stored under `key`
    fn remove_item(&self, key: &str);
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries().remove(key);
    }
}
