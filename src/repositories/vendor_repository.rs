use crate::models::vendor::Vendor;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Fila de proveedor con su agregado de lectura `work_count`: el contador
/// no se almacena, se deriva contando los registros que lo referencian.
#[derive(Debug, sqlx::FromRow)]
pub struct VendorWithWorkCount {
    pub id: Uuid,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub work_count: i64,
}

const VENDOR_WITH_COUNT_QUERY: &str = r#"
    SELECT v.id, v.name, v.contact_person, v.phone, v.email, v.rating,
           v.created_at, v.updated_at, COUNT(r.id) AS work_count
    FROM vendors v
    LEFT JOIN maintenance_records r ON r.vendor_id = v.id
"#;

pub struct VendorRepository {
    pool: PgPool,
}

impl VendorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vendor: &Vendor) -> Result<Vendor, AppError> {
        let created = sqlx::query_as::<_, Vendor>(
            r#"
            INSERT INTO vendors (id, name, contact_person, phone, email, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(vendor.id)
        .bind(&vendor.name)
        .bind(&vendor.contact_person)
        .bind(&vendor.phone)
        .bind(&vendor.email)
        .bind(vendor.rating)
        .bind(vendor.created_at)
        .bind(vendor.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VendorWithWorkCount>, AppError> {
        let query = format!(
            "{} WHERE v.id = $1 GROUP BY v.id, v.name, v.contact_person, v.phone, v.email, v.rating, v.created_at, v.updated_at",
            VENDOR_WITH_COUNT_QUERY
        );
        let vendor = sqlx::query_as::<_, VendorWithWorkCount>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vendor)
    }

    pub async fn find_all(&self) -> Result<Vec<VendorWithWorkCount>, AppError> {
        let query = format!(
            "{} GROUP BY v.id, v.name, v.contact_person, v.phone, v.email, v.rating, v.created_at, v.updated_at ORDER BY v.name",
            VENDOR_WITH_COUNT_QUERY
        );
        let vendors = sqlx::query_as::<_, VendorWithWorkCount>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(vendors)
    }

    pub async fn update(&self, vendor: &Vendor) -> Result<Vendor, AppError> {
        let updated = sqlx::query_as::<_, Vendor>(
            r#"
            UPDATE vendors
            SET name = $2, contact_person = $3, phone = $4, email = $5, rating = $6, updated_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(vendor.id)
        .bind(&vendor.name)
        .bind(&vendor.contact_person)
        .bind(&vendor.phone)
        .bind(&vendor.email)
        .bind(vendor.rating)
        .bind(vendor.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Eliminar un proveedor. Sin cascada: los registros de mantenimiento
    /// conservan su vendor_id huérfano y el consumidor lo muestra como
    /// proveedor desconocido.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vendor not found".to_string()));
        }

        Ok(())
    }
}
