use chrono::{DateTime, NaiveDate, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::asset::{AssetStatus, OwnershipType};
use crate::models::vehicle::{TireType, Vehicle};

// Request para crear un vehículo. Las fechas de vencimiento llegan como
// string y se parsean de forma tolerante: un valor mal formado se trata
// como ausente.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub vehicle_number: String,

    #[validate(length(max = 100))]
    pub make: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2035))]
    pub year: Option<i32>,

    pub status: Option<AssetStatus>,
    pub ownership_type: Option<OwnershipType>,
    pub tire_type: Option<TireType>,

    pub inspection_date: Option<String>,
    pub maintenance_date: Option<String>,
    pub insurance_date: Option<String>,
    pub tire_change_date: Option<String>,

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

// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub vehicle_number: Option<String>,

    #[validate(length(max = 100))]
    pub make: Option<String>,

    #[validate(length(max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2035))]
    pub year: Option<i32>,

    pub status: Option<AssetStatus>,
    pub ownership_type: Option<OwnershipType>,
    pub tire_type: Option<TireType>,

    pub inspection_date: Option<String>,
    pub maintenance_date: Option<String>,
    pub insurance_date: Option<String>,
    pub tire_change_date: Option<String>,

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

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub vehicle_number: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub status: AssetStatus,
    pub ownership_type: OwnershipType,
    pub tire_type: TireType,
    pub inspection_date: Option<NaiveDate>,
    pub maintenance_date: Option<NaiveDate>,
    pub insurance_date: Option<NaiveDate>,
    pub tire_change_date: Option<NaiveDate>,
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<f64>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub lease_contact: Option<String>,
    pub lease_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vehicle_number: vehicle.vehicle_number,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            status: vehicle.status,
            ownership_type: vehicle.ownership_type,
            tire_type: vehicle.tire_type,
            inspection_date: vehicle.inspection_date,
            maintenance_date: vehicle.maintenance_date,
            insurance_date: vehicle.insurance_date,
            tire_change_date: vehicle.tire_change_date,
            lease_company: vehicle.lease_company,
            lease_monthly_cost: vehicle.lease_monthly_cost.and_then(|c| c.to_f64()),
            lease_start: vehicle.lease_start,
            lease_end: vehicle.lease_end,
            lease_contact: vehicle.lease_contact,
            lease_phone: vehicle.lease_phone,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
