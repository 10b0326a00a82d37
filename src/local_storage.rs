//! Browser Local Storage Backend
//!
//! `KeyValueStorage` over `window.localStorage`. When local storage is not
//! available (disabled, sandboxed frame) records are kept in memory for the
//! lifetime of the page instead.

use lost_found_core::{KeyValueStorage, MemoryStorage, StoreError, StoreResult};

/// Local storage with an in-memory fallback
#[derive(Debug, Default)]
pub struct BrowserStorage {
    fallback: MemoryStorage,
}

impl BrowserStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether writes will survive a reload
    pub fn is_persistent(&self) -> bool {
        local_storage().is_some()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match local_storage() {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.fallback.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        match local_storage() {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{:?}", e))),
            None => self.fallback.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("[STORE] Could not remove {}: {:?}", key, e);
                }
            }
            None => self.fallback.remove_item(key),
        }
    }
}
