use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, vehicle_number, make, model, year, status, ownership_type, tire_type,
                inspection_date, maintenance_date, insurance_date, tire_change_date,
                lease_company, lease_monthly_cost, lease_start, lease_end, lease_contact, lease_phone,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.vehicle_number)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.status)
        .bind(vehicle.ownership_type)
        .bind(vehicle.tire_type)
        .bind(vehicle.inspection_date)
        .bind(vehicle.maintenance_date)
        .bind(vehicle.insurance_date)
        .bind(vehicle.tire_change_date)
        .bind(&vehicle.lease_company)
        .bind(vehicle.lease_monthly_cost)
        .bind(vehicle.lease_start)
        .bind(vehicle.lease_end)
        .bind(&vehicle.lease_contact)
        .bind(&vehicle.lease_phone)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY vehicle_number")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    pub async fn vehicle_number_exists(&self, vehicle_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vehicle_number = $1)")
                .bind(vehicle_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET vehicle_number = $2, make = $3, model = $4, year = $5, status = $6,
                ownership_type = $7, tire_type = $8, inspection_date = $9, maintenance_date = $10,
                insurance_date = $11, tire_change_date = $12, lease_company = $13,
                lease_monthly_cost = $14, lease_start = $15, lease_end = $16,
                lease_contact = $17, lease_phone = $18, updated_at = $19
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.vehicle_number)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.status)
        .bind(vehicle.ownership_type)
        .bind(vehicle.tire_type)
        .bind(vehicle.inspection_date)
        .bind(vehicle.maintenance_date)
        .bind(vehicle.insurance_date)
        .bind(vehicle.tire_change_date)
        .bind(&vehicle.lease_company)
        .bind(vehicle.lease_monthly_cost)
        .bind(vehicle.lease_start)
        .bind(vehicle.lease_end)
        .bind(&vehicle.lease_contact)
        .bind(&vehicle.lease_phone)
        .bind(vehicle.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Eliminar un vehículo con cascada por contención: sus registros de
    /// mantenimiento y su kilometraje se eliminan en la misma transacción.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM monthly_mileage WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM maintenance_records WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }
}
