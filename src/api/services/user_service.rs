//! User service for registering and looking up users.

use super::context::ServiceContext;
use super::error::{ServiceError, require_non_empty};
use crate::models::{Role, User};
use tracing::{debug, info};

/// Service for managing users.
#[derive(Clone)]
pub struct UserService {
    ctx: ServiceContext,
}

impl UserService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user. Usernames are unique across all users.
    pub fn create_user(&self, username: &str, role: Role) -> Result<User, ServiceError> {
        require_non_empty("username", username)?;

        let users = &self.ctx.stores.users;
        // Linear scan; callers serialize mutations so the check cannot race.
        if users.values()?.iter().any(|u| u.username == username) {
            return Err(ServiceError::Conflict(format!(
                "username {} is already taken",
                username
            )));
        }

        let user = User {
            id: self.ctx.ids.next_id(),
            username: username.to_string(),
            role,
            created_at: self.ctx.clock.now(),
        };
        users.insert(&user.id, user.clone())?;
        info!("Created user {} ({}) with role {:?}", user.username, user.id, role);

        Ok(user)
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<User, ServiceError> {
        debug!("Looking up user {}", id);
        self.ctx
            .stores
            .users
            .get(id)?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    /// All users. An empty store is reported as `NotFound`.
    pub fn get_all_users(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.ctx.stores.users.values()?;
        if users.is_empty() {
            return Err(ServiceError::empty_collection("users"));
        }
        Ok(users)
    }
}
