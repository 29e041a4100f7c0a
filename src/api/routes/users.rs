//! User routes.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::get,
};

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{CreateUserRequest, User};

/// Create the users router
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_users).post(create_user))
        .route("/{id}", get(get_user_by_id))
}

/// POST /users - Register a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Empty username"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let helpdesk = state.helpdesk.write().await;
    let user = helpdesk.users.create_user(&request.username, request.role)?;
    Ok(Json(user))
}

/// GET /users - List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 404, description = "No users registered")
    )
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    Ok(Json(helpdesk.users.get_all_users()?))
}

/// GET /users/{id} - Get a user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    Ok(Json(helpdesk.users.get_user_by_id(&id)?))
}
