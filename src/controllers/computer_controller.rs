use crate::dto::asset_dto::{ComputerResponse, CreateComputerRequest, UpdateComputerRequest};
use crate::dto::common_dto::ApiResponse;
use crate::models::asset::{AssetStatus, Computer, OwnershipType};
use crate::repositories::computer_repository::ComputerRepository;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::parse_date_lenient;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ComputerController {
    repository: ComputerRepository,
}

impl ComputerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ComputerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateComputerRequest,
    ) -> Result<ApiResponse<ComputerResponse>, AppError> {
        request.validate()?;

        if self
            .repository
            .asset_number_exists(&request.asset_number)
            .await?
        {
            return Err(AppError::Conflict(
                "El número de activo ya está registrado".to_string(),
            ));
        }

        let lease_start = parse_date_lenient(request.lease_start.as_deref());
        let lease_end = parse_date_lenient(request.lease_end.as_deref());
        check_lease_period(lease_start, lease_end)?;

        let now = Utc::now();
        let computer = Computer {
            id: Uuid::new_v4(),
            asset_number: request.asset_number,
            maker: request.maker,
            model: request.model,
            assigned_to: request.assigned_to,
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

        let created = self.repository.create(&computer).await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "PC registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ComputerResponse, AppError> {
        let computer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("PC no encontrado".to_string()))?;

        Ok(computer.into())
    }

    pub async fn list(&self) -> Result<Vec<ComputerResponse>, AppError> {
        let computers = self.repository.find_all().await?;
        Ok(computers.into_iter().map(ComputerResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateComputerRequest,
    ) -> Result<ApiResponse<ComputerResponse>, AppError> {
        request.validate()?;

        let mut computer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("PC no encontrado".to_string()))?;

        if let Some(asset_number) = request.asset_number {
            if asset_number != computer.asset_number
                && self.repository.asset_number_exists(&asset_number).await?
            {
                return Err(AppError::Conflict(
                    "El número de activo ya está registrado".to_string(),
                ));
            }
            computer.asset_number = asset_number;
        }

        if request.maker.is_some() {
            computer.maker = request.maker;
        }
        if request.model.is_some() {
            computer.model = request.model;
        }
        if request.assigned_to.is_some() {
            computer.assigned_to = request.assigned_to;
        }
        if let Some(status) = request.status {
            computer.status = status;
        }
        if let Some(ownership_type) = request.ownership_type {
            computer.ownership_type = ownership_type;
        }
        if let Some(raw) = request.warranty_expiration {
            computer.warranty_expiration = parse_date_lenient(Some(&raw));
        }
        if request.lease_company.is_some() {
            computer.lease_company = request.lease_company;
        }
        if request.lease_monthly_cost.is_some() {
            computer.lease_monthly_cost = request.lease_monthly_cost;
        }
        if let Some(raw) = request.lease_start {
            computer.lease_start = parse_date_lenient(Some(&raw));
        }
        if let Some(raw) = request.lease_end {
            computer.lease_end = parse_date_lenient(Some(&raw));
        }
        if request.lease_contact.is_some() {
            computer.lease_contact = request.lease_contact;
        }
        if request.lease_phone.is_some() {
            computer.lease_phone = request.lease_phone;
        }

        check_lease_period(computer.lease_start, computer.lease_end)?;

        computer.updated_at = Utc::now();
        let updated = self.repository.update(&computer).await?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "PC actualizado exitosamente".to_string(),
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
