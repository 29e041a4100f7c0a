//! Report routes.

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
    routing::get,
};

use super::app_state::AppState;
use super::error::ApiError;

/// Create the reports router
pub fn reports_router() -> Router<AppState> {
    Router::new().route("/{report_type}", get(generate_report))
}

/// GET /reports/{report_type} - Generate a report
///
/// The body is the serialized report text, a JSON array.
#[utoipa::path(
    get,
    path = "/reports/{report_type}",
    tag = "Reports",
    params((
        "report_type" = String,
        Path,
        description = "OpenTickets, ClosedTickets, InProgressTickets or AssetUtilization"
    )),
    responses(
        (status = 200, description = "Serialized report", body = String),
        (status = 400, description = "Unknown report type")
    )
)]
pub async fn generate_report(
    State(state): State<AppState>,
    Path(report_type): Path<String>,
) -> Result<Response, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    let body = helpdesk.reports.generate_report(&report_type)?;

    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}
