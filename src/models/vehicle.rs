//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle con sus fechas de vencimiento
//! (inspección, mantenimiento, seguro, cambio de neumáticos) y las columnas
//! planas de leasing. Mapea exactamente al schema PostgreSQL con primary
//! key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use super::asset::{lease_term_from_columns, AssetStatus, LeaseTerm, OwnershipType};

/// Tipo de neumático montado actualmente - mapea al ENUM tire_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "tire_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TireType {
    Summer,
    Winter,
}

impl TireType {
    /// Temporada del juego de recambio: el aviso de cambio nombra la
    /// temporada opuesta a la montada actualmente.
    pub fn replacement_season_label(&self) -> &'static str {
        match self {
            TireType::Summer => "invierno",
            TireType::Winter => "verano",
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub vehicle_number: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub status: AssetStatus,
    pub ownership_type: OwnershipType,
    pub tire_type: TireType,
    pub inspection_date: Option<NaiveDate>,
    pub maintenance_date: Option<NaiveDate>,
    pub insurance_date: Option<NaiveDate>,
    pub tire_change_date: Option<NaiveDate>,
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<Decimal>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub lease_contact: Option<String>,
    pub lease_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        match (&self.make, &self.model) {
            (Some(make), Some(model)) => format!("{} ({} {})", self.vehicle_number, make, model),
            (Some(make), None) => format!("{} ({})", self.vehicle_number, make),
            _ => self.vehicle_number.clone(),
        }
    }

    /// Fecha de fin de leasing, solo si el vehículo es leased
    pub fn lease_end_date(&self) -> Option<NaiveDate> {
        if self.ownership_type == OwnershipType::Leased {
            self.lease_end
        } else {
            None
        }
    }

    pub fn lease_term(&self) -> Option<LeaseTerm> {
        lease_term_from_columns(
            self.ownership_type,
            self.lease_start,
            self.lease_end,
            self.lease_monthly_cost,
        )
    }
}
