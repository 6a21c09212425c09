use crate::cache::DashboardCache;
use crate::dto::dashboard_dto::{
    CategoryCostReportResponse, CostReportResponse, VehicleCostReportResponse,
    WarningFeedResponse,
};
use crate::models::warning::AssetCategory;
use crate::repositories::computer_repository::ComputerRepository;
use crate::repositories::general_asset_repository::GeneralAssetRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::cost_service::{
    compute_category_cost_summary, compute_cost_summary, compute_vehicle_cost_breakdown,
    grand_total,
};
use crate::services::warning_service::{compute_warnings, filter_warnings};
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct DashboardController {
    vehicles: VehicleRepository,
    computers: ComputerRepository,
    general_assets: GeneralAssetRepository,
    maintenance: MaintenanceRepository,
    cache: DashboardCache,
}

impl DashboardController {
    pub fn new(pool: PgPool, cache: DashboardCache) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            computers: ComputerRepository::new(pool.clone()),
            general_assets: GeneralAssetRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool),
            cache,
        }
    }

    /// Feed unificado de avisos de vencimiento, ordenado por días
    /// restantes. El filtro por categoría subsetea la lista ya calculada,
    /// nunca recalcula.
    pub async fn warning_feed(
        &self,
        category: Option<String>,
    ) -> Result<WarningFeedResponse, AppError> {
        let category = match category {
            Some(raw) => Some(raw.parse::<AssetCategory>().map_err(AppError::BadRequest)?),
            None => None,
        };

        let today = Utc::now().date_naive();

        let warnings = match self.cache.get_warnings(today).await {
            Ok(Some(cached)) => cached,
            Ok(None) => self.compute_and_cache_warnings(today).await?,
            Err(e) => {
                // Caché caído: calcular igual, el motor no depende de él
                log::warn!("⚠️ Caché del dashboard no disponible: {}", e);
                self.compute_and_cache_warnings(today).await?
            }
        };

        let warnings = match category {
            Some(category) => filter_warnings(&warnings, category),
            None => warnings,
        };

        Ok(WarningFeedResponse::new(warnings, today))
    }

    async fn compute_and_cache_warnings(
        &self,
        today: chrono::NaiveDate,
    ) -> Result<Vec<crate::models::warning::DeadlineWarning>, AppError> {
        let (vehicles, computers, general_assets) = tokio::try_join!(
            self.vehicles.find_all(),
            self.computers.find_all(),
            self.general_assets.find_all(),
        )?;

        let warnings = compute_warnings(&vehicles, &computers, &general_assets, today);

        if let Err(e) = self.cache.store_warnings(today, &warnings).await {
            log::warn!("⚠️ No se pudo guardar el feed de avisos en caché: {}", e);
        }

        Ok(warnings)
    }

    /// Resumen mensual agregado de costos del rango [start, end]
    pub async fn monthly_costs(
        &self,
        start_month: &str,
        end_month: &str,
    ) -> Result<CostReportResponse, AppError> {
        let (vehicles, records) =
            tokio::try_join!(self.vehicles.find_all(), self.maintenance.find_all())?;

        let months = compute_cost_summary(&vehicles, &records, start_month, end_month);
        let grand_total = grand_total(&months);

        Ok(CostReportResponse {
            months,
            grand_total,
        })
    }

    /// Desglose por vehículo del rango (solo vehículos con actividad)
    pub async fn vehicle_costs(
        &self,
        start_month: &str,
        end_month: &str,
    ) -> Result<VehicleCostReportResponse, AppError> {
        let (vehicles, records) =
            tokio::try_join!(self.vehicles.find_all(), self.maintenance.find_all())?;

        let breakdown = compute_vehicle_cost_breakdown(&vehicles, &records, start_month, end_month);
        let grand_total: Decimal = breakdown.iter().map(|row| row.total).sum();

        Ok(VehicleCostReportResponse {
            vehicles: breakdown,
            grand_total,
        })
    }

    /// Desglose mensual por categoría de activo
    pub async fn category_costs(
        &self,
        start_month: &str,
        end_month: &str,
    ) -> Result<CategoryCostReportResponse, AppError> {
        let (vehicles, computers, general_assets, records) = tokio::try_join!(
            self.vehicles.find_all(),
            self.computers.find_all(),
            self.general_assets.find_all(),
            self.maintenance.find_all(),
        )?;

        let months = compute_category_cost_summary(
            &vehicles,
            &computers,
            &general_assets,
            &records,
            start_month,
            end_month,
        );
        let grand_total: Decimal = months.iter().map(|row| row.total).sum();

        Ok(CategoryCostReportResponse {
            months,
            grand_total,
        })
    }
}
