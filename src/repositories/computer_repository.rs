use crate::models::asset::Computer;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ComputerRepository {
    pool: PgPool,
}

impl ComputerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, computer: &Computer) -> Result<Computer, AppError> {
        let created = sqlx::query_as::<_, Computer>(
            r#"
            INSERT INTO computers (
                id, asset_number, maker, model, assigned_to, status, ownership_type,
                warranty_expiration, lease_company, lease_monthly_cost, lease_start,
                lease_end, lease_contact, lease_phone, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(computer.id)
        .bind(&computer.asset_number)
        .bind(&computer.maker)
        .bind(&computer.model)
        .bind(&computer.assigned_to)
        .bind(computer.status)
        .bind(computer.ownership_type)
        .bind(computer.warranty_expiration)
        .bind(&computer.lease_company)
        .bind(computer.lease_monthly_cost)
        .bind(computer.lease_start)
        .bind(computer.lease_end)
        .bind(&computer.lease_contact)
        .bind(&computer.lease_phone)
        .bind(computer.created_at)
        .bind(computer.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Computer>, AppError> {
        let computer = sqlx::query_as::<_, Computer>("SELECT * FROM computers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(computer)
    }

    pub async fn find_all(&self) -> Result<Vec<Computer>, AppError> {
        let computers =
            sqlx::query_as::<_, Computer>("SELECT * FROM computers ORDER BY asset_number")
                .fetch_all(&self.pool)
                .await?;

        Ok(computers)
    }

    pub async fn asset_number_exists(&self, asset_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM computers WHERE asset_number = $1)")
                .bind(asset_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(&self, computer: &Computer) -> Result<Computer, AppError> {
        let updated = sqlx::query_as::<_, Computer>(
            r#"
            UPDATE computers
            SET asset_number = $2, maker = $3, model = $4, assigned_to = $5, status = $6,
                ownership_type = $7, warranty_expiration = $8, lease_company = $9,
                lease_monthly_cost = $10, lease_start = $11, lease_end = $12,
                lease_contact = $13, lease_phone = $14, updated_at = $15
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(computer.id)
        .bind(&computer.asset_number)
        .bind(&computer.maker)
        .bind(&computer.model)
        .bind(&computer.assigned_to)
        .bind(computer.status)
        .bind(computer.ownership_type)
        .bind(computer.warranty_expiration)
        .bind(&computer.lease_company)
        .bind(computer.lease_monthly_cost)
        .bind(computer.lease_start)
        .bind(computer.lease_end)
        .bind(&computer.lease_contact)
        .bind(&computer.lease_phone)
        .bind(computer.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM computers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Computer not found".to_string()));
        }

        Ok(())
    }
}
