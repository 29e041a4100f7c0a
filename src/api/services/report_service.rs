//! Report service - read-only summaries of tickets and assets.

use super::context::ServiceContext;
use super::error::ServiceError;
use crate::models::{AssetUtilization, ReportType, Ticket, TicketStatus};
use crate::storage::StorageError;
use serde::Serialize;
use tracing::debug;

/// Service producing serialized reports.
#[derive(Clone)]
pub struct ReportService {
    ctx: ServiceContext,
}

impl ReportService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Generate the report named `report_type` as JSON text.
    ///
    /// An empty result is a valid report and serializes to `[]`.
    pub fn generate_report(&self, report_type: &str) -> Result<String, ServiceError> {
        let report: ReportType = report_type.parse().map_err(ServiceError::Validation)?;
        self.generate(report)
    }

    pub fn generate(&self, report: ReportType) -> Result<String, ServiceError> {
        debug!("Generating {} report", report);
        match report {
            ReportType::OpenTickets => self.tickets_where(TicketStatus::is_open),
            ReportType::ClosedTickets => self.tickets_where(TicketStatus::is_closed),
            ReportType::InProgressTickets => self.tickets_where(TicketStatus::is_in_progress),
            ReportType::AssetUtilization => {
                let rows: Vec<AssetUtilization> = self
                    .ctx
                    .stores
                    .assets
                    .values()?
                    .iter()
                    .map(AssetUtilization::from)
                    .collect();
                to_text(&rows)
            }
        }
    }

    fn tickets_where(&self, keep: fn(&TicketStatus) -> bool) -> Result<String, ServiceError> {
        let tickets: Vec<Ticket> = self
            .ctx
            .stores
            .tickets
            .values()?
            .into_iter()
            .filter(|t| keep(&t.status))
            .collect();
        to_text(&tickets)
    }
}

fn to_text<T: Serialize>(rows: &[T]) -> Result<String, ServiceError> {
    serde_json::to_string(rows)
        .map_err(|e| StorageError::Other(format!("Failed to serialize report: {}", e)).into())
}
