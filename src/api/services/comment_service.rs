//! Comment service for ticket discussion threads.

use super::context::ServiceContext;
use super::error::ServiceError;
use crate::models::Comment;
use tracing::info;

/// Service for adding and listing comments on tickets.
#[derive(Clone)]
pub struct CommentService {
    ctx: ServiceContext,
}

impl CommentService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to an existing ticket. The author id is not checked.
    pub fn add_comment_to_ticket(
        &self,
        ticket_id: &str,
        user_id: &str,
        content: &str,
    ) -> Result<Comment, ServiceError> {
        let stores = &self.ctx.stores;
        if !stores.tickets.contains(ticket_id)? {
            return Err(ServiceError::not_found("Ticket", ticket_id));
        }

        let comment = Comment {
            id: self.ctx.ids.next_id(),
            ticket_id: ticket_id.to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            created_at: self.ctx.clock.now(),
        };
        stores.comments.insert(&comment.id, comment.clone())?;
        info!("Added comment {} to ticket {}", comment.id, ticket_id);

        Ok(comment)
    }

    /// Comments on a ticket, in no particular order.
    ///
    /// A ticket without comments yields an empty list; only a missing ticket
    /// is `NotFound`.
    pub fn get_comments_for_ticket(&self, ticket_id: &str) -> Result<Vec<Comment>, ServiceError> {
        let stores = &self.ctx.stores;
        if !stores.tickets.contains(ticket_id)? {
            return Err(ServiceError::not_found("Ticket", ticket_id));
        }

        Ok(stores
            .comments
            .values()?
            .into_iter()
            .filter(|c| c.ticket_id == ticket_id)
            .collect())
    }
}
