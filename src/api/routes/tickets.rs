//! Ticket routes, including the per-ticket comment thread.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
};

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{
    AddCommentRequest, AssignTicketRequest, Comment, CreateTicketRequest, Ticket,
    UpdateTicketStatusRequest,
};

/// Create the tickets router
pub fn tickets_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_tickets).post(create_ticket))
        .route("/{id}", get(get_ticket_by_id))
        .route("/{id}/assign", post(assign_ticket))
        .route("/{id}/status", put(update_ticket_status))
        .route(
            "/{id}/comments",
            get(get_comments_for_ticket).post(add_comment_to_ticket),
        )
}

/// POST /tickets - File a ticket (IT support or admin only)
#[utoipa::path(
    post,
    path = "/tickets",
    tag = "Tickets",
    request_body = CreateTicketRequest,
    responses(
        (status = 200, description = "Ticket created", body = Ticket),
        (status = 400, description = "Missing field"),
        (status = 403, description = "Caller is neither IT support nor admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let helpdesk = state.helpdesk.write().await;
    let ticket = helpdesk.tickets.create_ticket(
        &request.user_id,
        &request.title,
        &request.description,
        request.priority,
    )?;
    Ok(Json(ticket))
}

/// GET /tickets - List all tickets
#[utoipa::path(
    get,
    path = "/tickets",
    tag = "Tickets",
    responses(
        (status = 200, description = "All tickets", body = [Ticket]),
        (status = 404, description = "No tickets filed")
    )
)]
pub async fn get_tickets(State(state): State<AppState>) -> Result<Json<Vec<Ticket>>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    Ok(Json(helpdesk.tickets.get_tickets()?))
}

/// GET /tickets/{id} - Get a ticket
#[utoipa::path(
    get,
    path = "/tickets/{id}",
    tag = "Tickets",
    params(("id" = String, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "The ticket", body = Ticket),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn get_ticket_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    Ok(Json(helpdesk.tickets.get_ticket_by_id(&id)?))
}

/// POST /tickets/{id}/assign - Assign the ticket to the calling IT support user
#[utoipa::path(
    post,
    path = "/tickets/{id}/assign",
    tag = "Tickets",
    params(("id" = String, Path, description = "Ticket id")),
    request_body = AssignTicketRequest,
    responses(
        (status = 200, description = "Ticket assigned", body = Ticket),
        (status = 403, description = "Caller is not IT support"),
        (status = 404, description = "Ticket or user not found")
    )
)]
pub async fn assign_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AssignTicketRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let helpdesk = state.helpdesk.write().await;
    Ok(Json(helpdesk.tickets.assign_ticket(&id, &request.user_id)?))
}

/// PUT /tickets/{id}/status - Change a ticket's status (IT support or admin only)
#[utoipa::path(
    put,
    path = "/tickets/{id}/status",
    tag = "Tickets",
    params(("id" = String, Path, description = "Ticket id")),
    request_body = UpdateTicketStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Ticket),
        (status = 403, description = "Caller is neither IT support nor admin"),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn update_ticket_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTicketStatusRequest>,
) -> Result<Json<Ticket>, ApiError> {
    let helpdesk = state.helpdesk.write().await;
    let ticket = helpdesk
        .tickets
        .update_ticket_status(&id, &request.user_id, request.status)?;
    Ok(Json(ticket))
}

/// POST /tickets/{id}/comments - Comment on a ticket
#[utoipa::path(
    post,
    path = "/tickets/{id}/comments",
    tag = "Comments",
    params(("id" = String, Path, description = "Ticket id")),
    request_body = AddCommentRequest,
    responses(
        (status = 200, description = "Comment added", body = Comment),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn add_comment_to_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    let helpdesk = state.helpdesk.write().await;
    let comment = helpdesk
        .comments
        .add_comment_to_ticket(&id, &request.user_id, &request.content)?;
    Ok(Json(comment))
}

/// GET /tickets/{id}/comments - List a ticket's comments
#[utoipa::path(
    get,
    path = "/tickets/{id}/comments",
    tag = "Comments",
    params(("id" = String, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Comments on the ticket, possibly none", body = [Comment]),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn get_comments_for_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    Ok(Json(helpdesk.comments.get_comments_for_ticket(&id)?))
}
