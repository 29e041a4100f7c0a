use crate::storage::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Comment {
    const COLLECTION: &'static str = "comments";
}

/// Request body for commenting on a ticket
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub user_id: String,
    pub content: String,
}
