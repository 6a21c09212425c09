use crate::dto::common_dto::ApiResponse;
use crate::dto::dashboard_dto::CostReportResponse;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRecordRequest, CreateMileageRequest, MaintenanceRecordResponse,
    MileageResponse,
};
use crate::models::maintenance::{MaintenanceRecord, MonthlyMileage};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::cost_service::{compute_cost_summary, grand_total};
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::validate_date;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct MaintenanceController {
    vehicles: VehicleRepository,
    maintenance: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool),
        }
    }

    async fn ensure_vehicle_exists(&self, vehicle_id: Uuid) -> Result<(), AppError> {
        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;
        Ok(())
    }

    pub async fn add_record(
        &self,
        vehicle_id: Uuid,
        request: CreateMaintenanceRecordRequest,
    ) -> Result<ApiResponse<MaintenanceRecordResponse>, AppError> {
        request.validate()?;
        self.ensure_vehicle_exists(vehicle_id).await?;

        // La fecha del trabajo es el eje del bucketing de costos: aquí se
        // exige bien formada, no se descarta en silencio
        let date = validate_date(&request.date)
            .map_err(|_| bad_request_error("Fecha inválida, formato esperado YYYY-MM-DD"))?;

        if request.cost < Decimal::ZERO {
            return Err(bad_request_error("El costo no puede ser negativo"));
        }

        let now = Utc::now();
        let record = MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id,
            record_type: request.record_type,
            date,
            cost: request.cost,
            vendor_id: request.vendor_id,
            description: request.description,
            performed_by: request.performed_by,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };

        let created = self.maintenance.create_record(&record).await?;

        // Responder con el proveedor resuelto (None si la referencia quedó huérfana)
        let records = self
            .maintenance
            .find_by_vehicle_with_vendor(vehicle_id)
            .await?;
        let response = records
            .into_iter()
            .find(|r| r.id == created.id)
            .map(MaintenanceRecordResponse::from)
            .ok_or_else(|| AppError::Internal("Registro recién creado no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            response,
            "Registro de mantenimiento creado exitosamente".to_string(),
        ))
    }

    pub async fn list_records(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<MaintenanceRecordResponse>, AppError> {
        self.ensure_vehicle_exists(vehicle_id).await?;

        let records = self
            .maintenance
            .find_by_vehicle_with_vendor(vehicle_id)
            .await?;
        Ok(records
            .into_iter()
            .map(MaintenanceRecordResponse::from)
            .collect())
    }

    pub async fn delete_record(&self, vehicle_id: Uuid, record_id: Uuid) -> Result<(), AppError> {
        self.maintenance.delete_record(vehicle_id, record_id).await
    }

    pub async fn add_mileage(
        &self,
        vehicle_id: Uuid,
        request: CreateMileageRequest,
    ) -> Result<ApiResponse<MileageResponse>, AppError> {
        request.validate()?;
        self.ensure_vehicle_exists(vehicle_id).await?;

        if request.distance_km < Decimal::ZERO {
            return Err(bad_request_error("El kilometraje no puede ser negativo"));
        }

        if self
            .maintenance
            .mileage_exists(vehicle_id, &request.month)
            .await?
        {
            return Err(AppError::Conflict(
                "Ya existe kilometraje registrado para ese mes".to_string(),
            ));
        }

        let entry = MonthlyMileage {
            id: Uuid::new_v4(),
            vehicle_id,
            month: request.month,
            distance_km: request.distance_km,
            created_at: Utc::now(),
        };

        let created = self.maintenance.create_mileage(&entry).await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Kilometraje registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_mileage(&self, vehicle_id: Uuid) -> Result<Vec<MileageResponse>, AppError> {
        self.ensure_vehicle_exists(vehicle_id).await?;

        let entries = self.maintenance.find_mileage_by_vehicle(vehicle_id).await?;
        Ok(entries.into_iter().map(MileageResponse::from).collect())
    }

    /// Filas mensuales de costo de un vehículo: el resumen agregado con un
    /// snapshot de un solo vehículo y su historial
    pub async fn vehicle_costs(
        &self,
        vehicle_id: Uuid,
        start_month: &str,
        end_month: &str,
    ) -> Result<CostReportResponse, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let records = self.maintenance.find_by_vehicle(vehicle_id).await?;
        let months = compute_cost_summary(&[vehicle], &records, start_month, end_month);
        let grand_total = grand_total(&months);

        Ok(CostReportResponse {
            months,
            grand_total,
        })
    }
}
