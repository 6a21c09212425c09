//! Modelos de activos generales
//!
//! Este módulo contiene los enums compartidos por todas las categorías de
//! activos (estado, tipo de propiedad) y los structs Computer y GeneralAsset.
//! Mapean exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del activo - mapea al ENUM asset_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "asset_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Active,
    Maintenance,
    Retired,
}

/// Tipo de propiedad del activo - mapea al ENUM ownership_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "ownership_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OwnershipType {
    Owned,
    Leased,
    Rental,
}

/// Término de contrato de leasing, visto por los motores de cálculo.
/// Solo existe cuando el activo es leased y las tres columnas están presentes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaseTerm {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub monthly_cost: Decimal,
}

impl LeaseTerm {
    /// Un contrato cubre un bucket mensual si el límite de mes (el primer
    /// día del bucket) cae dentro de [start, end] inclusive.
    pub fn covers_month_start(&self, first_day: NaiveDate) -> bool {
        self.start <= first_day && first_day <= self.end
    }
}

/// Construir el término de leasing desde las columnas planas de un activo.
/// Contratos invertidos (start > end) se tratan como ausentes.
pub(crate) fn lease_term_from_columns(
    ownership_type: OwnershipType,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    monthly_cost: Option<Decimal>,
) -> Option<LeaseTerm> {
    if ownership_type != OwnershipType::Leased {
        return None;
    }
    match (start, end, monthly_cost) {
        (Some(start), Some(end), Some(monthly_cost)) if start <= end => Some(LeaseTerm {
            start,
            end,
            monthly_cost,
        }),
        _ => None,
    }
}

/// PC / equipo informático - mapea a la tabla computers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Computer {
    pub id: Uuid,
    pub asset_number: String,
    pub maker: Option<String>,
    pub model: Option<String>,
    pub assigned_to: Option<String>,
    pub status: AssetStatus,
    pub ownership_type: OwnershipType,
    pub warranty_expiration: Option<NaiveDate>,
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<Decimal>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub lease_contact: Option<String>,
    pub lease_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Computer {
    pub fn display_name(&self) -> String {
        match &self.model {
            Some(model) => format!("{} ({})", self.asset_number, model),
            None => self.asset_number.clone(),
        }
    }

    /// Fecha de fin de leasing, solo si el activo es leased
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

/// Activo general (mobiliario, equipamiento, etc.) - mapea a la tabla general_assets
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneralAsset {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: AssetStatus,
    pub ownership_type: OwnershipType,
    pub warranty_expiration: Option<NaiveDate>,
    pub lease_company: Option<String>,
    pub lease_monthly_cost: Option<Decimal>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub lease_contact: Option<String>,
    pub lease_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GeneralAsset {
    pub fn display_name(&self) -> String {
        self.name.clone()
    }

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
