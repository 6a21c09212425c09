use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::models::asset::{AssetStatus, OwnershipType};
use crate::models::vehicle::{TireType, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::parse_date_lenient;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        // Verificar que el número de vehículo no exista
        if self
            .repository
            .vehicle_number_exists(&request.vehicle_number)
            .await?
        {
            return Err(AppError::Conflict(
                "El número de vehículo ya está registrado".to_string(),
            ));
        }

        let lease_start = parse_date_lenient(request.lease_start.as_deref());
        let lease_end = parse_date_lenient(request.lease_end.as_deref());
        check_lease_period(lease_start, lease_end)?;

        let now = Utc::now();
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            vehicle_number: request.vehicle_number,
            make: request.make,
            model: request.model,
            year: request.year,
            status: request.status.unwrap_or(AssetStatus::Active),
            ownership_type: request.ownership_type.unwrap_or(OwnershipType::Owned),
            tire_type: request.tire_type.unwrap_or(TireType::Summer),
            inspection_date: parse_date_lenient(request.inspection_date.as_deref()),
            maintenance_date: parse_date_lenient(request.maintenance_date.as_deref()),
            insurance_date: parse_date_lenient(request.insurance_date.as_deref()),
            tire_change_date: parse_date_lenient(request.tire_change_date.as_deref()),
            lease_company: request.lease_company,
            lease_monthly_cost: request.lease_monthly_cost,
            lease_start,
            lease_end,
            lease_contact: request.lease_contact,
            lease_phone: request.lease_phone,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let mut vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if let Some(vehicle_number) = request.vehicle_number {
            if vehicle_number != vehicle.vehicle_number
                && self.repository.vehicle_number_exists(&vehicle_number).await?
            {
                return Err(AppError::Conflict(
                    "El número de vehículo ya está registrado".to_string(),
                ));
            }
            vehicle.vehicle_number = vehicle_number;
        }

        if request.make.is_some() {
            vehicle.make = request.make;
        }
        if request.model.is_some() {
            vehicle.model = request.model;
        }
        if request.year.is_some() {
            vehicle.year = request.year;
        }
        if let Some(status) = request.status {
            vehicle.status = status;
        }
        if let Some(ownership_type) = request.ownership_type {
            vehicle.ownership_type = ownership_type;
        }
        if let Some(tire_type) = request.tire_type {
            vehicle.tire_type = tire_type;
        }

        // Fechas: el campo presente reemplaza el valor; un valor mal
        // formado se trata como ausente (limpia la fecha)
        if let Some(raw) = request.inspection_date {
            vehicle.inspection_date = parse_date_lenient(Some(&raw));
        }
        if let Some(raw) = request.maintenance_date {
            vehicle.maintenance_date = parse_date_lenient(Some(&raw));
        }
        if let Some(raw) = request.insurance_date {
            vehicle.insurance_date = parse_date_lenient(Some(&raw));
        }
        if let Some(raw) = request.tire_change_date {
            vehicle.tire_change_date = parse_date_lenient(Some(&raw));
        }

        if request.lease_company.is_some() {
            vehicle.lease_company = request.lease_company;
        }
        if request.lease_monthly_cost.is_some() {
            vehicle.lease_monthly_cost = request.lease_monthly_cost;
        }
        if let Some(raw) = request.lease_start {
            vehicle.lease_start = parse_date_lenient(Some(&raw));
        }
        if let Some(raw) = request.lease_end {
            vehicle.lease_end = parse_date_lenient(Some(&raw));
        }
        if request.lease_contact.is_some() {
            vehicle.lease_contact = request.lease_contact;
        }
        if request.lease_phone.is_some() {
            vehicle.lease_phone = request.lease_phone;
        }

        check_lease_period(vehicle.lease_start, vehicle.lease_end)?;

        vehicle.updated_at = Utc::now();
        let updated = self.repository.update(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

/// Invariante del contrato de leasing: el inicio no puede ser posterior al fin
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
