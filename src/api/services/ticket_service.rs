//! Ticket service: filing, assignment and status changes.

use super::context::ServiceContext;
use super::error::{ServiceError, require_non_empty};
use super::role_policy::require_role;
use crate::models::{Priority, Role, Ticket, TicketStatus};
use tracing::{debug, info};

const STAFF: [Role; 2] = [Role::ITSupport, Role::Admin];

/// Service for managing support tickets.
#[derive(Clone)]
pub struct TicketService {
    ctx: ServiceContext,
}

impl TicketService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a new ticket on behalf of `user_id`, who must be IT support or an admin.
    pub fn create_ticket(
        &self,
        user_id: &str,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<Ticket, ServiceError> {
        require_non_empty("user_id", user_id)?;
        require_non_empty("title", title)?;
        require_non_empty("description", description)?;

        let stores = &self.ctx.stores;
        if !stores.users.contains(user_id)? {
            return Err(ServiceError::not_found("User", user_id));
        }
        require_role(stores.users.as_ref(), user_id, &STAFF, "create tickets")?;

        let ticket = Ticket {
            id: self.ctx.ids.next_id(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status: TicketStatus::opened(),
            priority,
            created_at: self.ctx.clock.now(),
            created_by: user_id.to_string(),
            assigned_to: None,
        };
        stores.tickets.insert(&ticket.id, ticket.clone())?;
        info!("Created ticket {} by user {}", ticket.id, user_id);

        Ok(ticket)
    }

    /// Assign a ticket to `user_id`, who is also the caller and must be IT support.
    /// Repeating the call with the same arguments leaves the ticket unchanged.
    pub fn assign_ticket(&self, ticket_id: &str, user_id: &str) -> Result<Ticket, ServiceError> {
        let stores = &self.ctx.stores;
        let mut ticket = stores
            .tickets
            .get(ticket_id)?
            .ok_or_else(|| ServiceError::not_found("Ticket", ticket_id))?;
        if !stores.users.contains(user_id)? {
            return Err(ServiceError::not_found("User", user_id));
        }
        require_role(
            stores.users.as_ref(),
            user_id,
            &[Role::ITSupport],
            "assign tickets",
        )?;

        ticket.assigned_to = Some(user_id.to_string());
        stores.tickets.insert(&ticket.id, ticket.clone())?;
        info!("Assigned ticket {} to user {}", ticket.id, user_id);

        Ok(ticket)
    }

    /// Move a ticket to `new_status`. Any status may follow any other.
    pub fn update_ticket_status(
        &self,
        ticket_id: &str,
        user_id: &str,
        new_status: TicketStatus,
    ) -> Result<Ticket, ServiceError> {
        let stores = &self.ctx.stores;
        require_role(stores.users.as_ref(), user_id, &STAFF, "update ticket status")?;

        let mut ticket = stores
            .tickets
            .get(ticket_id)?
            .ok_or_else(|| ServiceError::not_found("Ticket", ticket_id))?;

        ticket.status = new_status;
        stores.tickets.insert(&ticket.id, ticket.clone())?;
        info!(
            "Ticket {} status set to {:?} by user {}",
            ticket.id, ticket.status, user_id
        );

        Ok(ticket)
    }

    /// All tickets. An empty store is reported as `NotFound`.
    pub fn get_tickets(&self) -> Result<Vec<Ticket>, ServiceError> {
        let tickets = self.ctx.stores.tickets.values()?;
        if tickets.is_empty() {
            return Err(ServiceError::empty_collection("tickets"));
        }
        Ok(tickets)
    }

    pub fn get_ticket_by_id(&self, id: &str) -> Result<Ticket, ServiceError> {
        debug!("Looking up ticket {}", id);
        self.ctx
            .stores
            .tickets
            .get(id)?
            .ok_or_else(|| ServiceError::not_found("Ticket", id))
    }
}
