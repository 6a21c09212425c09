use crate::models::maintenance::{MaintenanceRecord, MonthlyMileage};
use crate::utils::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Registro de mantenimiento con el nombre del proveedor resuelto.
/// `vendor_name` queda en None cuando el vendor_id está huérfano.
#[derive(Debug, sqlx::FromRow)]
pub struct MaintenanceRecordWithVendor {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub record_type: String,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub vendor_id: Option<Uuid>,
    pub vendor_name: Option<String>,
    pub description: Option<String>,
    pub performed_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_record(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<MaintenanceRecord, AppError> {
        let created = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records (
                id, vehicle_id, record_type, date, cost, vendor_id,
                description, performed_by, notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(record.vehicle_id)
        .bind(&record.record_type)
        .bind(record.date)
        .bind(record.cost)
        .bind(record.vendor_id)
        .bind(&record.description)
        .bind(&record.performed_by)
        .bind(&record.notes)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE vehicle_id = $1 ORDER BY date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Registros de un vehículo con el nombre del proveedor resuelto
    /// mediante LEFT JOIN (tolerante a referencias huérfanas).
    pub async fn find_by_vehicle_with_vendor(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceRecordWithVendor>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecordWithVendor>(
            r#"
            SELECT r.id, r.vehicle_id, r.record_type, r.date, r.cost, r.vendor_id,
                   v.name AS vendor_name, r.description, r.performed_by, r.notes,
                   r.created_at, r.updated_at
            FROM maintenance_records r
            LEFT JOIN vendors v ON v.id = r.vendor_id
            WHERE r.vehicle_id = $1
            ORDER BY r.date DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn delete_record(&self, vehicle_id: Uuid, record_id: Uuid) -> Result<(), AppError> {
        let result =
            sqlx::query("DELETE FROM maintenance_records WHERE id = $1 AND vehicle_id = $2")
                .bind(record_id)
                .bind(vehicle_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Maintenance record not found".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn create_mileage(&self, entry: &MonthlyMileage) -> Result<MonthlyMileage, AppError> {
        let created = sqlx::query_as::<_, MonthlyMileage>(
            r#"
            INSERT INTO monthly_mileage (id, vehicle_id, month, distance_km, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(entry.vehicle_id)
        .bind(&entry.month)
        .bind(entry.distance_km)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_mileage_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MonthlyMileage>, AppError> {
        let entries = sqlx::query_as::<_, MonthlyMileage>(
            "SELECT * FROM monthly_mileage WHERE vehicle_id = $1 ORDER BY month",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn mileage_exists(&self, vehicle_id: Uuid, month: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM monthly_mileage WHERE vehicle_id = $1 AND month = $2)",
        )
        .bind(vehicle_id)
        .bind(month)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
