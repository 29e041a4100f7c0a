//! Storage trait definitions for the record store backends.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::StorageError;

/// A record type that can live in a [`RecordStore`].
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Name of the collection (and SQLite table) holding this record type.
    const COLLECTION: &'static str;
}

/// Keyed record store.
///
/// `insert` on an existing key replaces the record wholesale. `values` returns
/// records in no meaningful order. There is no delete.
pub trait RecordStore<R: Record>: Send + Sync {
    /// Get a record by key
    fn get(&self, key: &str) -> Result<Option<R>, StorageError>;

    /// Insert or overwrite the record stored under `key`
    fn insert(&self, key: &str, record: R) -> Result<(), StorageError>;

    /// All records currently in the store
    fn values(&self) -> Result<Vec<R>, StorageError>;

    /// Check whether a key is present
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }

    /// Number of stored records
    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.values()?.len())
    }

    /// Whether the store holds no records
    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
