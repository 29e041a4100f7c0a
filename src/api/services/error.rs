//! Error taxonomy shared by all domain services.

use crate::storage::StorageError;
use thiserror::Error;

/// Failure of a domain operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required field is missing or empty, or an enumerated value is unknown
    #[error("Validation error: {0}")]
    Validation(String),
    /// A referenced entity does not exist, or a listing is empty
    #[error("Not found: {0}")]
    NotFound(String),
    /// A uniqueness constraint would be violated
    #[error("Conflict: {0}")]
    Conflict(String),
    /// The caller's role does not allow the operation
    #[error("Not authorized: {0}")]
    Authorization(String),
    /// The persistence layer failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &str, id: &str) -> Self {
        ServiceError::NotFound(format!("{} with id {} not found", entity, id))
    }

    pub(crate) fn empty_collection(collection: &str) -> Self {
        ServiceError::NotFound(format!("No {} found", collection))
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::Conflict(_) => "CONFLICT",
            ServiceError::Authorization(_) => "AUTHORIZATION_ERROR",
            ServiceError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// Fail with [`ServiceError::Validation`] when `value` is empty.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.is_empty() {
        return Err(ServiceError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}
