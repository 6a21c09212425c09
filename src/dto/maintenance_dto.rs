use chrono::{DateTime, NaiveDate, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::MonthlyMileage;
use crate::repositories::maintenance_repository::MaintenanceRecordWithVendor;

// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRecordRequest {
    #[validate(
        length(min = 1, max = 50),
        custom = "crate::utils::validation::validate_not_empty"
    )]
    pub record_type: String,

    // Fecha del trabajo, formato YYYY-MM-DD (validada en el controller)
    pub date: String,

    pub cost: Decimal,

    pub vendor_id: Option<Uuid>,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(length(max = 100))]
    pub performed_by: Option<String>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

// Response de registro de mantenimiento con el proveedor resuelto.
// `vendor_name` en None significa proveedor desconocido (referencia
// huérfana tolerada).
#[derive(Debug, Serialize)]
pub struct MaintenanceRecordResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub record_type: String,
    pub date: NaiveDate,
    pub cost: f64,
    pub vendor_id: Option<Uuid>,
    pub vendor_name: Option<String>,
    pub description: Option<String>,
    pub performed_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MaintenanceRecordWithVendor> for MaintenanceRecordResponse {
    fn from(record: MaintenanceRecordWithVendor) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            record_type: record.record_type,
            date: record.date,
            cost: record.cost.to_f64().unwrap_or(0.0),
            vendor_id: record.vendor_id,
            vendor_name: record.vendor_name,
            description: record.description,
            performed_by: record.performed_by,
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

// Request para registrar kilometraje mensual
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMileageRequest {
    // Mes en formato YYYY-MM
    #[validate(custom = "crate::utils::validation::validate_month")]
    pub month: String,

    pub distance_km: Decimal,
}

// Response de kilometraje mensual
#[derive(Debug, Serialize)]
pub struct MileageResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub month: String,
    pub distance_km: f64,
    pub created_at: DateTime<Utc>,
}

impl From<MonthlyMileage> for MileageResponse {
    fn from(entry: MonthlyMileage) -> Self {
        Self {
            id: entry.id,
            vehicle_id: entry.vehicle_id,
            month: entry.month,
            distance_km: entry.distance_km.to_f64().unwrap_or(0.0),
            created_at: entry.created_at,
        }
    }
}
