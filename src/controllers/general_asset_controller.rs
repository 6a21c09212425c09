use crate::dto::asset_dto::{
    CreateGeneralAssetRequest, GeneralAssetResponse, UpdateGeneralAssetRequest,
};
use crate::dto::common_dto::ApiResponse;
use crate::models::asset::{AssetStatus, GeneralAsset, OwnershipType};
use crate::repositories::general_asset_repository::GeneralAssetRepository;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::parse_date_lenient;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct GeneralAssetController {
    repository: GeneralAssetRepository,
}

impl GeneralAssetController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GeneralAssetRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateGeneralAssetRequest,
    ) -> Result<ApiResponse<GeneralAssetResponse>, AppError> {
        request.validate()?;

        let lease_start = parse_date_lenient(request.lease_start.as_deref());
        let lease_end = parse_date_lenient(request.lease_end.as_deref());
        check_lease_period(lease_start, lease_end)?;

        let now = Utc::now();
        let asset = GeneralAsset {
            id: Uuid::new_v4(),
            name: request.name,
            category: request.category,
            location: request.location,
            status: request.status.unwrap_or(AssetStatus::Active),
            ownership_type: request.ownership_type.unwrap_or(OwnershipType::Owned),
            warranty_expiration: parse_date_lenient(request.warranty_expiration.as_deref()),
            lease_company: request.lease_company,
            lease_monthly_cost: request.lease_monthly_cost,
            lease_start,
            lease_end,
            lease_contact: request.lease_contact,
            lease_phone: request.lease_phone,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(&asset).await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Activo registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<GeneralAssetResponse, AppError> {
        let asset = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Activo no encontrado".to_string()))?;

        Ok(asset.into())
    }

    pub async fn list(&self) -> Result<Vec<GeneralAssetResponse>, AppError> {
        let assets = self.repository.find_all().await?;
        Ok(assets.into_iter().map(GeneralAssetResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateGeneralAssetRequest,
    ) -> Result<ApiResponse<GeneralAssetResponse>, AppError> {
        request.validate()?;

        let mut asset = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Activo no encontrado".to_string()))?;

        if let Some(name) = request.name {
            asset.name = name;
        }
        if request.category.is_some() {
            asset.category = request.category;
        }
        if request.location.is_some() {
            asset.location = request.location;
        }
        if let Some(status) = request.status {
            asset.status = status;
        }
        if let Some(ownership_type) = request.ownership_type {
            asset.ownership_type = ownership_type;
        }
        if let Some(raw) = request.warranty_expiration {
            asset.warranty_expiration = parse_date_lenient(Some(&raw));
        }
        if request.lease_company.is_some() {
            asset.lease_company = request.lease_company;
        }
        if request.lease_monthly_cost.is_some() {
            asset.lease_monthly_cost = request.lease_monthly_cost;
        }
        if let Some(raw) = request.lease_start {
            asset.lease_start = parse_date_lenient(Some(&raw));
        }
        if let Some(raw) = request.lease_end {
            asset.lease_end = parse_date_lenient(Some(&raw));
        }
        if request.lease_contact.is_some() {
            asset.lease_contact = request.lease_contact;
        }
        if request.lease_phone.is_some() {
            asset.lease_phone = request.lease_phone;
        }

        check_lease_period(asset.lease_start, asset.lease_end)?;

        asset.updated_at = Utc::now();
        let updated = self.repository.update(&asset).await?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Activo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

fn check_lease_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(bad_request_error(
                "El inicio del contrato de leasing es posterior a su fin",
            ));
        }
    }
    Ok(())
}
