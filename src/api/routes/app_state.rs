//! Application state management.
//!
//! Defines the AppState struct that holds the helpdesk services shared by all
//! route handlers.

use crate::config::ApiConfig;
use crate::services::{Helpdesk, ServiceContext};
use crate::storage::{StorageError, Stores};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Application state shared across all route handlers.
///
/// Mutating handlers take the write guard and queries take the read guard, so
/// no two mutations interleave and every query sees fully applied writes.
#[derive(Clone)]
pub struct AppState {
    pub helpdesk: Arc<RwLock<Helpdesk>>,
}

impl AppState {
    pub fn new(helpdesk: Helpdesk) -> Self {
        Self {
            helpdesk: Arc::new(RwLock::new(helpdesk)),
        }
    }

    /// State over fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(Helpdesk::in_memory())
    }

    /// Build state from configuration.
    ///
    /// Opens SQLite stores when a database path is configured, otherwise
    /// falls back to in-memory stores.
    pub fn from_config(config: &ApiConfig) -> Result<Self, StorageError> {
        let stores = match &config.database_path {
            Some(path) => {
                info!("Using SQLite storage at {}", path.display());
                Stores::sqlite(path)?
            }
            None => {
                info!("HELPDESK_DB_PATH not set, using in-memory storage");
                Stores::in_memory()
            }
        };

        Ok(Self::new(Helpdesk::new(ServiceContext::with_stores(stores))))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
