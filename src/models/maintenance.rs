//! Modelos de mantenimiento
//!
//! Registros de mantenimiento/reparación y kilometraje mensual. Ambos
//! pertenecen exclusivamente a un vehículo: al eliminar el vehículo se
//! eliminan sus registros (cascada por contención, no por referencia).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Registro de mantenimiento - mapea a la tabla maintenance_records.
/// `vendor_id` es una referencia débil: eliminar el proveedor no toca el
/// registro, el consumidor muestra "proveedor desconocido".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub record_type: String,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub vendor_id: Option<Uuid>,
    pub description: Option<String>,
    pub performed_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Kilometraje mensual - mapea a la tabla monthly_mileage
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonthlyMileage {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub month: String,
    pub distance_km: Decimal,
    pub created_at: DateTime<Utc>,
}
