use super::enums::{Priority, TicketStatus};
use crate::storage::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ticket {
    pub id: String,
    /// Reporter of the ticket
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = Object)]
    pub status: TicketStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Record for Ticket {
    const COLLECTION: &'static str = "tickets";
}

/// Request body for creating a ticket
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Request body for assigning a ticket. The caller assigns the ticket to themselves.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssignTicketRequest {
    pub user_id: String,
}

/// Request body for changing a ticket's status
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTicketStatusRequest {
    pub user_id: String,
    #[schema(value_type = Object)]
    pub status: TicketStatus,
}
