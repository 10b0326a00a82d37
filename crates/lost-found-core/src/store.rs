//! Local Record Store
//!
//! Two append-only collections, each serialized as a JSON array under its
//! own key. Reads are forgiving: anything that is not a valid array of the
//! expected shape reads as an empty collection.
//!
//! `append` is load, push, save. It is not atomic across browser tabs; two
//! tabs appending at once can lose one write.

use log::{debug, warn};

use crate::config::StorageKeys;
use crate::error::{StoreError, StoreResult};
use crate::record::{CollectionRecord, Record, RecordKind};
use crate::storage::KeyValueStorage;

/// Record store over any key-value backend
#[derive(Debug)]
pub struct RecordStore<S> {
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStorage> RecordStore<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    /// Load a collection in stored order. Never fails.
    pub fn load<R: CollectionRecord>(&self) -> Vec<R> {
        let key = self.keys.key_for(R::KIND);
        let Some(raw) = self.storage.get_item(key) else {
            return Vec::new();
        };
        // "null" is what an explicitly cleared value looks like
        match serde_json::from_str::<Option<Vec<R>>>(&raw) {
            Ok(records) => {
                let records = records.unwrap_or_default();
                debug!("[STORE] Loaded {} {} records", records.len(), R::KIND.as_str());
                records
            }
            Err(e) => {
                warn!("[STORE] Ignoring malformed data under {}: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite a collection with `records`
    pub fn save<R: CollectionRecord>(&self, records: &[R]) -> StoreResult<()> {
        let key = self.keys.key_for(R::KIND);
        let encoded = serde_json::to_string(records).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.storage.set_item(key, &encoded)?;
        debug!("[STORE] Saved {} {} records", records.len(), R::KIND.as_str());
        Ok(())
    }

    /// Append one record to the end of its collection
    pub fn append<R: CollectionRecord>(&self, record: R) -> StoreResult<()> {
        let mut records = self.load::<R>();
        records.push(record);
        self.save(&records)
    }

    /// Append a record of either kind
    pub fn append_record(&self, record: Record) -> StoreResult<()> {
        debug!("[STORE] Appending {} record", record.kind().as_str());
        match record {
            Record::Lost(r) => self.append(r),
            Record::Found(r) => self.append(r),
        }
    }

    /// Remove a whole collection
    pub fn clear(&self, kind: RecordKind) {
        self.storage.remove_item(self.keys.key_for(kind));
        debug!("[STORE] Cleared {} records", kind.as_str());
    }
}
