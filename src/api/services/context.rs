//! Shared dependencies handed to every service.

use super::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::storage::Stores;
use std::sync::Arc;

/// Stores plus the clock and id sources, cloned into each service.
#[derive(Clone)]
pub struct ServiceContext {
    pub stores: Stores,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
}

impl ServiceContext {
    pub fn new(stores: Stores, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { stores, clock, ids }
    }

    /// System clock and UUID identifiers over the given stores.
    pub fn with_stores(stores: Stores) -> Self {
        Self::new(stores, Arc::new(SystemClock), Arc::new(UuidGenerator))
    }

    /// Fresh in-memory stores with the system clock.
    pub fn in_memory() -> Self {
        Self::with_stores(Stores::in_memory())
    }
}
