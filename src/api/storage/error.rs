//! Storage error types for the record store backends.

use thiserror::Error;

/// Storage operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Database connection or I/O error
    #[error("Connection error: {0}")]
    ConnectionError(String),
    /// A stored record could not be encoded or decoded
    #[error("Corrupt record in {collection} with id {record_id}: {reason}")]
    Serialization {
        collection: String,
        record_id: String,
        reason: String,
    },
    /// A lock guarding the store was poisoned by a panicking writer
    #[error("Store lock poisoned: {0}")]
    Poisoned(String),
    /// General storage error
    #[error("Storage error: {0}")]
    Other(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::ConnectionError(err.to_string())
    }
}
