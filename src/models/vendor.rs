//! Modelo de Vendor
//!
//! Proveedores de mantenimiento. `work_count` no se almacena: es un
//! agregado de lectura (COUNT de registros con vendor_id = id) calculado
//! por el repositorio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vendor principal - mapea exactamente a la tabla vendors
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
