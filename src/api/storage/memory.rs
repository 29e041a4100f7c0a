//! In-memory storage backend.
//!
//! Records live for the lifetime of the process. Used for tests and for
//! running the API without a database file.

use super::{Record, RecordStore, StorageError};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory record store backed by a `HashMap`.
pub struct MemoryStore<R> {
    records: RwLock<HashMap<String, R>>,
}

impl<R: Record> MemoryStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(collection: &str) -> StorageError {
    StorageError::Poisoned(collection.to_string())
}

impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn get(&self, key: &str) -> Result<Option<R>, StorageError> {
        let records = self.records.read().map_err(|_| poisoned(R::COLLECTION))?;
        Ok(records.get(key).cloned())
    }

    fn insert(&self, key: &str, record: R) -> Result<(), StorageError> {
        let mut records = self.records.write().map_err(|_| poisoned(R::COLLECTION))?;
        records.insert(key.to_string(), record);
        Ok(())
    }

    fn values(&self) -> Result<Vec<R>, StorageError> {
        let records = self.records.read().map_err(|_| poisoned(R::COLLECTION))?;
        Ok(records.values().cloned().collect())
    }

    fn len(&self) -> Result<usize, StorageError> {
        let records = self.records.read().map_err(|_| poisoned(R::COLLECTION))?;
        Ok(records.len())
    }
}
