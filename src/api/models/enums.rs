use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    ITSupport,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Ticket lifecycle state. Each state carries an optional free-text note.
///
/// Serialized adjacently tagged, e.g. `{"state": "Open", "note": "ticket is open"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "note")]
pub enum TicketStatus {
    Open(Option<String>),
    InProgress(Option<String>),
    Closed(Option<String>),
}

impl TicketStatus {
    pub const DEFAULT_OPEN_NOTE: &'static str = "ticket is open";

    /// Status assigned to newly created tickets.
    pub fn opened() -> Self {
        TicketStatus::Open(Some(Self::DEFAULT_OPEN_NOTE.to_string()))
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            TicketStatus::Open(note) | TicketStatus::InProgress(note) | TicketStatus::Closed(note) => {
                note.as_deref()
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TicketStatus::Open(_))
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, TicketStatus::InProgress(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TicketStatus::Closed(_))
    }
}

/// Report categories understood by the reporting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReportType {
    OpenTickets,
    ClosedTickets,
    InProgressTickets,
    AssetUtilization,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::OpenTickets => "OpenTickets",
            ReportType::ClosedTickets => "ClosedTickets",
            ReportType::InProgressTickets => "InProgressTickets",
            ReportType::AssetUtilization => "AssetUtilization",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OpenTickets" => Ok(ReportType::OpenTickets),
            "ClosedTickets" => Ok(ReportType::ClosedTickets),
            "InProgressTickets" => Ok(ReportType::InProgressTickets),
            "AssetUtilization" => Ok(ReportType::AssetUtilization),
            other => Err(format!("Unknown report type: {}", other)),
        }
    }
}
