//! Storage module for the API.
//!
//! Provides the keyed record store contract plus in-memory and SQLite backends,
//! and the [`Stores`] bundle holding one store per entity type.

pub mod error;
pub mod traits;

// Storage backend implementations
pub mod memory;
pub mod sqlite;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{Record, RecordStore};

use crate::models::{AssetMaintenanceRecord, Comment, ITAsset, Ticket, User};
use std::path::Path;
use std::sync::Arc;

/// One independent store per entity type.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn RecordStore<User>>,
    pub tickets: Arc<dyn RecordStore<Ticket>>,
    pub comments: Arc<dyn RecordStore<Comment>>,
    pub assets: Arc<dyn RecordStore<ITAsset>>,
    pub maintenance: Arc<dyn RecordStore<AssetMaintenanceRecord>>,
}

impl Stores {
    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryStore::<User>::new()),
            tickets: Arc::new(MemoryStore::<Ticket>::new()),
            comments: Arc::new(MemoryStore::<Comment>::new()),
            assets: Arc::new(MemoryStore::<ITAsset>::new()),
            maintenance: Arc::new(MemoryStore::<AssetMaintenanceRecord>::new()),
        }
    }

    /// Durable stores inside the SQLite database at `path`, created if missing.
    pub fn sqlite(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            users: Arc::new(SqliteStore::<User>::open(path)?),
            tickets: Arc::new(SqliteStore::<Ticket>::open(path)?),
            comments: Arc::new(SqliteStore::<Comment>::open(path)?),
            assets: Arc::new(SqliteStore::<ITAsset>::open(path)?),
            maintenance: Arc::new(SqliteStore::<AssetMaintenanceRecord>::open(path)?),
        })
    }
}
