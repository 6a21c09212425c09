use crate::models::asset::GeneralAsset;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct GeneralAssetRepository {
    pool: PgPool,
}

impl GeneralAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, asset: &GeneralAsset) -> Result<GeneralAsset, AppError> {
        let created = sqlx::query_as::<_, GeneralAsset>(
            r#"
            INSERT INTO general_assets (
                id, name, category, location, status, ownership_type, warranty_expiration,
                lease_company, lease_monthly_cost, lease_start, lease_end,
                lease_contact, lease_phone, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(asset.id)
        .bind(&asset.name)
        .bind(&asset.category)
        .bind(&asset.location)
        .bind(asset.status)
        .bind(asset.ownership_type)
        .bind(asset.warranty_expiration)
        .bind(&asset.lease_company)
        .bind(asset.lease_monthly_cost)
        .bind(asset.lease_start)
        .bind(asset.lease_end)
        .bind(&asset.lease_contact)
        .bind(&asset.lease_phone)
        .bind(asset.created_at)
        .bind(asset.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<GeneralAsset>, AppError> {
        let asset = sqlx::query_as::<_, GeneralAsset>("SELECT * FROM general_assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(asset)
    }

    pub async fn find_all(&self) -> Result<Vec<GeneralAsset>, AppError> {
        let assets = sqlx::query_as::<_, GeneralAsset>("SELECT * FROM general_assets ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(assets)
    }

    pub async fn update(&self, asset: &GeneralAsset) -> Result<GeneralAsset, AppError> {
        let updated = sqlx::query_as::<_, GeneralAsset>(
            r#"
            UPDATE general_assets
            SET name = $2, category = $3, location = $4, status = $5, ownership_type = $6,
                warranty_expiration = $7, lease_company = $8, lease_monthly_cost = $9,
                lease_start = $10, lease_end = $11, lease_contact = $12, lease_phone = $13,
                updated_at = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(asset.id)
        .bind(&asset.name)
        .bind(&asset.category)
        .bind(&asset.location)
        .bind(asset.status)
        .bind(asset.ownership_type)
        .bind(asset.warranty_expiration)
        .bind(&asset.lease_company)
        .bind(asset.lease_monthly_cost)
        .bind(asset.lease_start)
        .bind(asset.lease_end)
        .bind(&asset.lease_contact)
        .bind(&asset.lease_phone)
        .bind(asset.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM general_assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("General asset not found".to_string()));
        }

        Ok(())
    }
}
