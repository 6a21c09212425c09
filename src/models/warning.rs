//! Modelos de avisos de vencimiento
//!
//! `DeadlineWarning` es un view-model derivado: se calcula fresco en cada
//! consulta y nunca se persiste. Su única identidad es la clave compuesta
//! (activo, dimensión), que garantiza como máximo un aviso por dimensión.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Categoría del activo que originó el aviso
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Vehicle,
    Pc,
    General,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Vehicle => "vehicle",
            AssetCategory::Pc => "pc",
            AssetCategory::General => "general",
        }
    }
}

impl FromStr for AssetCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vehicle" => Ok(AssetCategory::Vehicle),
            "pc" => Ok(AssetCategory::Pc),
            "general" => Ok(AssetCategory::General),
            other => Err(format!("unknown asset category '{}'", other)),
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimensión de vencimiento. Los vehículos emiten `lease` para el fin de
/// contrato; los PCs y activos generales emiten `contract` para la misma
/// dimensión (los dos nombres que maneja el frontend).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineType {
    Inspection,
    Maintenance,
    TireChange,
    Contract,
    Warranty,
    Lease,
}

impl DeadlineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadlineType::Inspection => "inspection",
            DeadlineType::Maintenance => "maintenance",
            DeadlineType::TireChange => "tire_change",
            DeadlineType::Contract => "contract",
            DeadlineType::Warranty => "warranty",
            DeadlineType::Lease => "lease",
        }
    }
}

/// Severidad del aviso
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Critical,
    Warning,
    Info,
}

/// Aviso de vencimiento derivado (nunca persistido)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeadlineWarning {
    pub id: String,
    pub asset_id: Uuid,
    pub asset_name: String,
    pub asset_category: AssetCategory,
    pub deadline_type: DeadlineType,
    pub title: String,
    pub deadline_date: NaiveDate,
    pub days_remaining: i64,
    pub level: WarningLevel,
}
