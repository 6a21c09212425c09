//! Modelos de resúmenes de costos
//!
//! View-models derivados por el motor de agregación de costos: un bucket
//! por mes calendario del rango consultado. Nunca se persisten.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resumen mensual: leasing prorrateado + mantenimiento puntual
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostSummary {
    pub month: String,
    pub lease_cost: Decimal,
    pub maintenance_cost: Decimal,
    pub total: Decimal,
}

/// Desglose por vehículo sobre el rango completo. Los vehículos sin
/// actividad (leasing y mantenimiento a cero) se omiten del resultado.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleCostBreakdown {
    pub vehicle_id: Uuid,
    pub vehicle_number: String,
    pub lease_cost: Decimal,
    pub maintenance_cost: Decimal,
    pub total: Decimal,
}

/// Desglose mensual por categoría de activo en la vista agregada.
/// PCs y activos generales solo aportan leasing (no tienen mantenimiento).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryCostSummary {
    pub month: String,
    pub vehicle_cost: Decimal,
    pub computer_cost: Decimal,
    pub general_cost: Decimal,
    pub total: Decimal,
}
