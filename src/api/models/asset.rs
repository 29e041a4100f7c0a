use crate::storage::Record;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ITAsset {
    pub id: String,
    pub asset_name: String,
    pub asset_type: String,
    /// Purchase date as milliseconds since the Unix epoch
    pub purchase_date: i64,
    pub assigned_to: String,
    pub approx_value: u64,
    /// Percent of the original value lost per full year
    pub depreciation_rate: u64,
}

impl Record for ITAsset {
    const COLLECTION: &'static str = "it_assets";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssetMaintenanceRecord {
    pub id: String,
    pub asset_id: String,
    pub maintenance_type: String,
    pub description: String,
    pub cost: u64,
    /// Milliseconds since the Unix epoch
    pub date: i64,
}

impl Record for AssetMaintenanceRecord {
    const COLLECTION: &'static str = "asset_maintenance_records";
}

/// Request body for registering an asset
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateITAssetRequest {
    pub asset_name: String,
    pub asset_type: String,
    pub purchase_date: i64,
    pub assigned_to: String,
    pub approx_value: u64,
    pub depreciation_rate: u64,
}

/// Request body for logging maintenance work against an asset
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddMaintenanceRequest {
    pub maintenance_type: String,
    #[serde(default)]
    pub description: String,
    pub cost: u64,
    pub date: i64,
}

/// One row of the asset utilization report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssetUtilization {
    pub id: String,
    pub name: String,
    pub assigned_to: String,
}

impl From<&ITAsset> for AssetUtilization {
    fn from(asset: &ITAsset) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.asset_name.clone(),
            assigned_to: asset.assigned_to.clone(),
        }
    }
}

/// Response body for the asset valuation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetValuation {
    pub asset_id: String,
    pub current_value: u64,
}
