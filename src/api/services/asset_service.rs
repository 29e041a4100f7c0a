//! Asset service: IT asset register, maintenance log and valuation.

use super::context::ServiceContext;
use super::depreciation::depreciated_value;
use super::error::{ServiceError, require_non_empty};
use crate::models::{AddMaintenanceRequest, AssetMaintenanceRecord, CreateITAssetRequest, ITAsset};
use tracing::{debug, info};

/// Service for managing IT assets and their maintenance history.
#[derive(Clone)]
pub struct AssetService {
    ctx: ServiceContext,
}

impl AssetService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register an asset assigned to an existing user.
    pub fn create_it_asset(&self, request: CreateITAssetRequest) -> Result<ITAsset, ServiceError> {
        require_non_empty("asset_name", &request.asset_name)?;
        require_non_empty("asset_type", &request.asset_type)?;

        let stores = &self.ctx.stores;
        if !stores.users.contains(&request.assigned_to)? {
            return Err(ServiceError::not_found("User", &request.assigned_to));
        }

        let asset = ITAsset {
            id: self.ctx.ids.next_id(),
            asset_name: request.asset_name,
            asset_type: request.asset_type,
            purchase_date: request.purchase_date,
            assigned_to: request.assigned_to,
            approx_value: request.approx_value,
            depreciation_rate: request.depreciation_rate,
        };
        stores.assets.insert(&asset.id, asset.clone())?;
        info!(
            "Registered asset {} ({}) for user {}",
            asset.asset_name, asset.id, asset.assigned_to
        );

        Ok(asset)
    }

    /// All assets. An empty store is reported as `NotFound`.
    pub fn get_it_assets(&self) -> Result<Vec<ITAsset>, ServiceError> {
        let assets = self.ctx.stores.assets.values()?;
        if assets.is_empty() {
            return Err(ServiceError::empty_collection("assets"));
        }
        Ok(assets)
    }

    pub fn get_it_asset_by_id(&self, id: &str) -> Result<ITAsset, ServiceError> {
        debug!("Looking up asset {}", id);
        self.ctx
            .stores
            .assets
            .get(id)?
            .ok_or_else(|| ServiceError::not_found("Asset", id))
    }

    pub fn add_asset_maintenance_record(
        &self,
        asset_id: &str,
        request: AddMaintenanceRequest,
    ) -> Result<AssetMaintenanceRecord, ServiceError> {
        let stores = &self.ctx.stores;
        if !stores.assets.contains(asset_id)? {
            return Err(ServiceError::not_found("Asset", asset_id));
        }

        let record = AssetMaintenanceRecord {
            id: self.ctx.ids.next_id(),
            asset_id: asset_id.to_string(),
            maintenance_type: request.maintenance_type,
            description: request.description,
            cost: request.cost,
            date: request.date,
        };
        stores.maintenance.insert(&record.id, record.clone())?;
        info!(
            "Logged {} maintenance {} for asset {}",
            record.maintenance_type, record.id, asset_id
        );

        Ok(record)
    }

    /// Maintenance records of an asset, in no particular order.
    ///
    /// An asset without maintenance yields an empty list; only a missing asset
    /// is `NotFound`.
    pub fn get_asset_maintenance_history(
        &self,
        asset_id: &str,
    ) -> Result<Vec<AssetMaintenanceRecord>, ServiceError> {
        let stores = &self.ctx.stores;
        if !stores.assets.contains(asset_id)? {
            return Err(ServiceError::not_found("Asset", asset_id));
        }

        Ok(stores
            .maintenance
            .values()?
            .into_iter()
            .filter(|r| r.asset_id == asset_id)
            .collect())
    }

    /// Current depreciated value of an asset as of the service clock.
    pub fn calculate_asset_value(&self, asset_id: &str) -> Result<u64, ServiceError> {
        let asset = self.get_it_asset_by_id(asset_id)?;
        let now = self.ctx.clock.now_millis();

        Ok(depreciated_value(
            asset.approx_value,
            asset.depreciation_rate,
            asset.purchase_date,
            now,
        ))
    }
}
