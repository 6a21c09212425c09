use chrono::{DateTime, NaiveDate, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::asset::{AssetStatus, Computer, GeneralAsset, OwnershipType};

// Request para registrar un PC
#[derive(Debug, Deserialize, Validate)]
pub struct CreateComputerRequest {
    #[validate(length(min = 1, max = 50))]
    pub asset_number: String,

    #[validate(length(max = 100))]
    pub maker: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(length(max = 100))]
    pub assigned_to: Option<String>,

    pub status: Option<AssetStatus>,
    pub ownership_type: Option<OwnershipType>,

    pub warranty_expiration: Option<String>,

    #[validate(length(max = 100))]
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<Decimal>,
    pub lease_start: Option<String>,
    pub lease_end: Option<String>,
    #[validate(length(max = 100))]
    pub lease_contact: Option<String>,
    #[validate(length(max = 30))]
    pub lease_phone: Option<String>,
}

// Request para actualizar un PC
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateComputerRequest {
    #[validate(length(min = 1, max = 50))]
    pub asset_number: Option<String>,

    #[validate(length(max = 100))]
    pub maker: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(length(max = 100))]
    pub assigned_to: Option<String>,

    pub status: Option<AssetStatus>,
    pub ownership_type: Option<OwnershipType>,

    pub warranty_expiration: Option<String>,

    #[validate(length(max = 100))]
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<Decimal>,
    pub lease_start: Option<String>,
    pub lease_end: Option<String>,
    #[validate(length(max = 100))]
    pub lease_contact: Option<String>,
    #[validate(length(max = 30))]
    pub lease_phone: Option<String>,
}

// Response de PC
#[derive(Debug, Serialize)]
pub struct ComputerResponse {
    pub id: Uuid,
    pub asset_number: String,
    pub maker: Option<String>,
    pub model: Option<String>,
    pub assigned_to: Option<String>,
    pub status: AssetStatus,
    pub ownership_type: OwnershipType,
    pub warranty_expiration: Option<NaiveDate>,
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<f64>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub lease_contact: Option<String>,
    pub lease_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Computer> for ComputerResponse {
    fn from(computer: Computer) -> Self {
        Self {
            id: computer.id,
            asset_number: computer.asset_number,
            maker: computer.maker,
            model: computer.model,
            assigned_to: computer.assigned_to,
            status: computer.status,
            ownership_type: computer.ownership_type,
            warranty_expiration: computer.warranty_expiration,
            lease_company: computer.lease_company,
            lease_monthly_cost: computer.lease_monthly_cost.and_then(|c| c.to_f64()),
            lease_start: computer.lease_start,
            lease_end: computer.lease_end,
            lease_contact: computer.lease_contact,
            lease_phone: computer.lease_phone,
            created_at: computer.created_at,
            updated_at: computer.updated_at,
        }
    }
}

// Request para registrar un activo general
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGeneralAssetRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 50))]
    pub category: Option<String>,

    #[validate(length(max = 100))]
    pub location: Option<String>,

    pub status: Option<AssetStatus>,
    pub ownership_type: Option<OwnershipType>,

    pub warranty_expiration: Option<String>,

    #[validate(length(max = 100))]
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<Decimal>,
    pub lease_start: Option<String>,
    pub lease_end: Option<String>,
    #[validate(length(max = 100))]
    pub lease_contact: Option<String>,
    #[validate(length(max = 30))]
    pub lease_phone: Option<String>,
}

// Request para actualizar un activo general
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGeneralAssetRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 50))]
    pub category: Option<String>,

    #[validate(length(max = 100))]
    pub location: Option<String>,

    pub status: Option<AssetStatus>,
    pub ownership_type: Option<OwnershipType>,

    pub warranty_expiration: Option<String>,

    #[validate(length(max = 100))]
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<Decimal>,
    pub lease_start: Option<String>,
    pub lease_end: Option<String>,
    #[validate(length(max = 100))]
    pub lease_contact: Option<String>,
    #[validate(length(max = 30))]
    pub lease_phone: Option<String>,
}

// Response de activo general
#[derive(Debug, Serialize)]
pub struct GeneralAssetResponse {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: AssetStatus,
    pub ownership_type: OwnershipType,
    pub warranty_expiration: Option<NaiveDate>,
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<f64>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub lease_contact: Option<String>,
    pub lease_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GeneralAsset> for GeneralAssetResponse {
    fn from(asset: GeneralAsset) -> Self {
        Self {
            id: asset.id,
            name: asset.name,
            category: asset.category,
            location: asset.location,
            status: asset.status,
            ownership_type: asset.ownership_type,
            warranty_expiration: asset.warranty_expiration,
            lease_company: asset.lease_company,
            lease_monthly_cost: asset.lease_monthly_cost.and_then(|c| c.to_f64()),
            lease_start: asset.lease_start,
            lease_end: asset.lease_end,
            lease_contact: asset.lease_contact,
            lease_phone: asset.lease_phone,
            created_at: asset.created_at,
            updated_at: asset.updated_at,
        }
    }
}
