use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::cost::{CategoryCostSummary, CostSummary, VehicleCostBreakdown};
use crate::models::warning::{DeadlineWarning, WarningLevel};

// Query del feed de avisos: filtro opcional por categoría de activo
#[derive(Debug, Deserialize)]
pub struct WarningFeedQuery {
    pub category: Option<String>,
}

// Feed de avisos ordenado con contadores por severidad
#[derive(Debug, Serialize)]
pub struct WarningFeedResponse {
    pub warnings: Vec<DeadlineWarning>,
    pub total: usize,
    pub critical_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub computed_for: NaiveDate,
}

impl WarningFeedResponse {
    pub fn new(warnings: Vec<DeadlineWarning>, computed_for: NaiveDate) -> Self {
        let critical_count = warnings
            .iter()
            .filter(|w| w.level == WarningLevel::Critical)
            .count();
        let warning_count = warnings
            .iter()
            .filter(|w| w.level == WarningLevel::Warning)
            .count();
        let info_count = warnings
            .iter()
            .filter(|w| w.level == WarningLevel::Info)
            .count();
        Self {
            total: warnings.len(),
            critical_count,
            warning_count,
            info_count,
            warnings,
            computed_for,
        }
    }
}

// Query de rango de meses cerrado [start, end], formato YYYY-MM
#[derive(Debug, Deserialize)]
pub struct CostRangeQuery {
    pub start: String,
    pub end: String,
}

// Resumen mensual agregado del rango
#[derive(Debug, Serialize)]
pub struct CostReportResponse {
    pub months: Vec<CostSummary>,
    pub grand_total: Decimal,
}

// Desglose por vehículo del rango (solo vehículos con actividad)
#[derive(Debug, Serialize)]
pub struct VehicleCostReportResponse {
    pub vehicles: Vec<VehicleCostBreakdown>,
    pub grand_total: Decimal,
}

// Desglose mensual por categoría de activo
#[derive(Debug, Serialize)]
pub struct CategoryCostReportResponse {
    pub months: Vec<CategoryCostSummary>,
    pub grand_total: Decimal,
}
