use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::repositories::vendor_repository::VendorWithWorkCount;

// Request para registrar un proveedor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVendorRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 100))]
    pub contact_person: Option<String>,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
}

// Request para actualizar un proveedor
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVendorRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub contact_person: Option<String>,

    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
}

// Response de proveedor. `work_count` es el agregado de lectura calculado
// por el repositorio, no un campo almacenado.
#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub id: Uuid,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
    pub work_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VendorResponse {
    /// Response para un proveedor recién creado: todavía sin trabajos
    pub fn from_new_vendor(vendor: crate::models::vendor::Vendor) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name,
            contact_person: vendor.contact_person,
            phone: vendor.phone,
            email: vendor.email,
            rating: vendor.rating,
            work_count: 0,
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        }
    }
}

impl From<VendorWithWorkCount> for VendorResponse {
    fn from(vendor: VendorWithWorkCount) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name,
            contact_person: vendor.contact_person,
            phone: vendor.phone,
            email: vendor.email,
            rating: vendor.rating,
            work_count: vendor.work_count,
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        }
    }
}
