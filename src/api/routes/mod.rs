//! API routes module - organizes all route handlers.

pub mod app_state;
pub mod assets;
pub mod error;
pub mod openapi;
pub mod reports;
pub mod tickets;
pub mod users;

use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use app_state::AppState;
pub use error::ApiError;

use crate::config::ApiConfig;
use crate::middleware::{create_cors_layer, create_rate_limiter, rate_limit_middleware};

/// Create the API router combining all route modules.
///
/// State is applied by the caller; see [`build_app`].
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/users", users::users_router())
        .nest("/tickets", tickets::tickets_router())
        .nest("/assets", assets::assets_router())
        .nest("/reports", reports::reports_router())
        // OpenAPI documentation endpoints
        .merge(openapi::openapi_router())
}

/// Build the complete application: health check, API under `/api/v1`,
/// optional rate limiting, request tracing and CORS.
pub fn build_app(state: AppState, config: &ApiConfig) -> Router {
    let mut api = create_api_router();
    if let Some(requests_per_minute) = config.rate_limit_per_minute {
        let limiter = create_rate_limiter(requests_per_minute);
        api = api.layer(axum::middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        ));
    }

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&config.cors_allowed_origins)),
        )
}

/// Create the application state over in-memory stores.
pub fn create_app_state() -> AppState {
    AppState::in_memory()
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "helpdesk-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
