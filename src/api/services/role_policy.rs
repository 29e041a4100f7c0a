//! Role-based gates for ticket operations.
//!
//! Roles are looked up from the user store on every call; nothing is cached,
//! so a role change is visible to the very next check.

use super::error::ServiceError;
use crate::models::{Role, User};
use crate::storage::{RecordStore, StorageError};

/// Role of `user_id`, or `None` if no such user exists.
pub fn role_of(users: &dyn RecordStore<User>, user_id: &str) -> Result<Option<Role>, StorageError> {
    Ok(users.get(user_id)?.map(|user| user.role))
}

pub fn is_admin(users: &dyn RecordStore<User>, user_id: &str) -> Result<bool, StorageError> {
    Ok(role_of(users, user_id)? == Some(Role::Admin))
}

pub fn is_it_support(users: &dyn RecordStore<User>, user_id: &str) -> Result<bool, StorageError> {
    Ok(role_of(users, user_id)? == Some(Role::ITSupport))
}

/// Require the caller to hold one of `allowed`. Unknown callers are rejected.
pub fn require_role(
    users: &dyn RecordStore<User>,
    caller_id: &str,
    allowed: &[Role],
    action: &str,
) -> Result<(), ServiceError> {
    match role_of(users, caller_id)? {
        Some(role) if allowed.contains(&role) => Ok(()),
        _ => Err(ServiceError::Authorization(format!(
            "user {} is not allowed to {}",
            caller_id, action
        ))),
    }
}
