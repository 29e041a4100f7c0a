//! IT asset routes: register, maintenance log and valuation.

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::get,
};

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{
    AddMaintenanceRequest, AssetMaintenanceRecord, AssetValuation, CreateITAssetRequest, ITAsset,
};

/// Create the assets router
pub fn assets_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_it_assets).post(create_it_asset))
        .route("/{id}", get(get_it_asset_by_id))
        .route("/{id}/value", get(calculate_asset_value))
        .route(
            "/{id}/maintenance",
            get(get_asset_maintenance_history).post(add_asset_maintenance_record),
        )
}

/// POST /assets - Register an asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "Assets",
    request_body = CreateITAssetRequest,
    responses(
        (status = 200, description = "Asset registered", body = ITAsset),
        (status = 400, description = "Missing name or type"),
        (status = 404, description = "Assigned user not found")
    )
)]
pub async fn create_it_asset(
    State(state): State<AppState>,
    Json(request): Json<CreateITAssetRequest>,
) -> Result<Json<ITAsset>, ApiError> {
    let helpdesk = state.helpdesk.write().await;
    Ok(Json(helpdesk.assets.create_it_asset(request)?))
}

/// GET /assets - List all assets
#[utoipa::path(
    get,
    path = "/assets",
    tag = "Assets",
    responses(
        (status = 200, description = "All assets", body = [ITAsset]),
        (status = 404, description = "No assets registered")
    )
)]
pub async fn get_it_assets(State(state): State<AppState>) -> Result<Json<Vec<ITAsset>>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    Ok(Json(helpdesk.assets.get_it_assets()?))
}

/// GET /assets/{id} - Get an asset
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "Assets",
    params(("id" = String, Path, description = "Asset id")),
    responses(
        (status = 200, description = "The asset", body = ITAsset),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn get_it_asset_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ITAsset>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    Ok(Json(helpdesk.assets.get_it_asset_by_id(&id)?))
}

/// GET /assets/{id}/value - Current depreciated value
#[utoipa::path(
    get,
    path = "/assets/{id}/value",
    tag = "Assets",
    params(("id" = String, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Current value", body = AssetValuation),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn calculate_asset_value(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssetValuation>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    let current_value = helpdesk.assets.calculate_asset_value(&id)?;
    Ok(Json(AssetValuation {
        asset_id: id,
        current_value,
    }))
}

/// POST /assets/{id}/maintenance - Log maintenance work
#[utoipa::path(
    post,
    path = "/assets/{id}/maintenance",
    tag = "Maintenance",
    params(("id" = String, Path, description = "Asset id")),
    request_body = AddMaintenanceRequest,
    responses(
        (status = 200, description = "Maintenance logged", body = AssetMaintenanceRecord),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn add_asset_maintenance_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddMaintenanceRequest>,
) -> Result<Json<AssetMaintenanceRecord>, ApiError> {
    let helpdesk = state.helpdesk.write().await;
    Ok(Json(helpdesk.assets.add_asset_maintenance_record(&id, request)?))
}

/// GET /assets/{id}/maintenance - Maintenance history
#[utoipa::path(
    get,
    path = "/assets/{id}/maintenance",
    tag = "Maintenance",
    params(("id" = String, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Maintenance records, possibly none", body = [AssetMaintenanceRecord]),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn get_asset_maintenance_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AssetMaintenanceRecord>>, ApiError> {
    let helpdesk = state.helpdesk.read().await;
    Ok(Json(helpdesk.assets.get_asset_maintenance_history(&id)?))
}
