//! Motor de avisos de vencimiento
//!
//! Recorre todos los activos registrados (vehículos, PCs, activos
//! generales) buscando obligaciones con fecha, calcula los días restantes
//! respecto a "hoy", clasifica la severidad y devuelve una lista única
//! ordenada. Función pura: sin I/O, determinista dado `today`, no muta
//! sus entradas.
//!
//! Las dimensiones de servicio del vehículo (inspección, mantenimiento,
//! cambio de neumáticos) usan una ventana de 60 días con corte binario
//! critical/warning. Fin de contrato y garantía usan una ventana de 90
//! días en tres niveles. La asimetría es intencional: así se comporta el
//! producto en ambas vistas.

use chrono::NaiveDate;

use crate::models::asset::{Computer, GeneralAsset};
use crate::models::vehicle::Vehicle;
use crate::models::warning::{AssetCategory, DeadlineType, DeadlineWarning, WarningLevel};

/// Ventana de aviso para dimensiones de servicio del vehículo (días)
const SERVICE_WINDOW_DAYS: i64 = 60;
/// Ventana de aviso para garantía y fin de contrato (días)
const CONTRACT_WINDOW_DAYS: i64 = 90;
/// Umbral de severidad critical (días)
const CRITICAL_DAYS: i64 = 30;
/// Umbral de severidad warning dentro de la ventana de contrato (días)
const WARNING_DAYS: i64 = 60;

/// Regla de clasificación aplicable a una dimensión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassificationRule {
    /// Ventana de 60 días, critical/warning sin nivel info
    Service,
    /// Ventana de 90 días, critical/warning/info
    Contract,
}

/// Dimensión de vencimiento normalizada extraída de un activo
struct DeadlineDimension {
    deadline_type: DeadlineType,
    date: NaiveDate,
    title: String,
    rule: ClassificationRule,
}

/// Calcular el feed unificado de avisos para todos los activos.
///
/// Orden de recorrido: vehículos, luego PCs, luego activos generales, cada
/// grupo en orden de entrada. Después se aplica un sort estable ascendente
/// por `days_remaining`, de modo que los vencidos (días negativos) quedan
/// primero y los empates conservan el orden de recorrido.
pub fn compute_warnings(
    vehicles: &[Vehicle],
    computers: &[Computer],
    general_assets: &[GeneralAsset],
    today: NaiveDate,
) -> Vec<DeadlineWarning> {
    let mut warnings = Vec::new();

    for vehicle in vehicles {
        push_warnings(
            &mut warnings,
            vehicle.id,
            vehicle.display_name(),
            AssetCategory::Vehicle,
            vehicle_dimensions(vehicle),
            today,
        );
    }

    for computer in computers {
        push_warnings(
            &mut warnings,
            computer.id,
            computer.display_name(),
            AssetCategory::Pc,
            contract_dimensions(computer.warranty_expiration, computer.lease_end_date()),
            today,
        );
    }

    for asset in general_assets {
        push_warnings(
            &mut warnings,
            asset.id,
            asset.display_name(),
            AssetCategory::General,
            contract_dimensions(asset.warranty_expiration, asset.lease_end_date()),
            today,
        );
    }

    warnings.sort_by_key(|w| w.days_remaining);
    warnings
}

/// Filtrar la lista ya ordenada por categoría de activo.
/// Nunca recalcula: solo devuelve el subconjunto, conservando el orden.
pub fn filter_warnings(
    warnings: &[DeadlineWarning],
    category: AssetCategory,
) -> Vec<DeadlineWarning> {
    warnings
        .iter()
        .filter(|w| w.asset_category == category)
        .cloned()
        .collect()
}

/// Dimensiones con fecha de un vehículo. Una fecha ausente no aporta
/// dimensión. El aviso de cambio de neumáticos nombra la temporada del
/// juego de recambio (la opuesta a la montada).
fn vehicle_dimensions(vehicle: &Vehicle) -> Vec<DeadlineDimension> {
    let mut dimensions = Vec::new();

    if let Some(date) = vehicle.inspection_date {
        dimensions.push(DeadlineDimension {
            deadline_type: DeadlineType::Inspection,
            date,
            title: "Inspección técnica".to_string(),
            rule: ClassificationRule::Service,
        });
    }

    if let Some(date) = vehicle.maintenance_date {
        dimensions.push(DeadlineDimension {
            deadline_type: DeadlineType::Maintenance,
            date,
            title: "Mantenimiento programado".to_string(),
            rule: ClassificationRule::Service,
        });
    }

    if let Some(date) = vehicle.tire_change_date {
        dimensions.push(DeadlineDimension {
            deadline_type: DeadlineType::TireChange,
            date,
            title: format!(
                "Cambio de neumáticos ({})",
                vehicle.tire_type.replacement_season_label()
            ),
            rule: ClassificationRule::Service,
        });
    }

    if let Some(date) = vehicle.lease_end_date() {
        dimensions.push(DeadlineDimension {
            deadline_type: DeadlineType::Lease,
            date,
            title: "Fin de contrato de leasing".to_string(),
            rule: ClassificationRule::Contract,
        });
    }

    dimensions
}

/// Dimensiones compartidas por PCs y activos generales: garantía y fin de
/// contrato de leasing (emitido como `contract` en estas categorías).
fn contract_dimensions(
    warranty_expiration: Option<NaiveDate>,
    lease_end: Option<NaiveDate>,
) -> Vec<DeadlineDimension> {
    let mut dimensions = Vec::new();

    if let Some(date) = warranty_expiration {
        dimensions.push(DeadlineDimension {
            deadline_type: DeadlineType::Warranty,
            date,
            title: "Vencimiento de garantía".to_string(),
            rule: ClassificationRule::Contract,
        });
    }

    if let Some(date) = lease_end {
        dimensions.push(DeadlineDimension {
            deadline_type: DeadlineType::Contract,
            date,
            title: "Fin de contrato de leasing".to_string(),
            rule: ClassificationRule::Contract,
        });
    }

    dimensions
}

fn push_warnings(
    out: &mut Vec<DeadlineWarning>,
    asset_id: uuid::Uuid,
    asset_name: String,
    category: AssetCategory,
    dimensions: Vec<DeadlineDimension>,
    today: NaiveDate,
) {
    for dimension in dimensions {
        // Días de calendario completos: NaiveDate no arrastra hora ni zona
        let days_remaining = dimension.date.signed_duration_since(today).num_days();

        let level = match dimension.rule {
            ClassificationRule::Service => classify_service(days_remaining),
            ClassificationRule::Contract => classify_contract(days_remaining),
        };

        if let Some(level) = level {
            out.push(DeadlineWarning {
                id: format!("{}:{}", asset_id, dimension.deadline_type.as_str()),
                asset_id,
                asset_name: asset_name.clone(),
                asset_category: category,
                deadline_type: dimension.deadline_type,
                title: dimension.title,
                deadline_date: dimension.date,
                days_remaining,
                level,
            });
        }
    }
}

fn classify_service(days_remaining: i64) -> Option<WarningLevel> {
    if days_remaining > SERVICE_WINDOW_DAYS {
        return None;
    }
    if days_remaining <= CRITICAL_DAYS {
        Some(WarningLevel::Critical)
    } else {
        Some(WarningLevel::Warning)
    }
}

fn classify_contract(days_remaining: i64) -> Option<WarningLevel> {
    if days_remaining > CONTRACT_WINDOW_DAYS {
        return None;
    }
    if days_remaining <= CRITICAL_DAYS {
        Some(WarningLevel::Critical)
    } else if days_remaining <= WARNING_DAYS {
        Some(WarningLevel::Warning)
    } else {
        Some(WarningLevel::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::{AssetStatus, OwnershipType};
    use crate::models::vehicle::TireType;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn in_days(days: i64) -> NaiveDate {
        today() + Duration::days(days)
    }

    fn test_vehicle(number: &str) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            vehicle_number: number.to_string(),
            make: None,
            model: None,
            year: None,
            status: AssetStatus::Active,
            ownership_type: OwnershipType::Owned,
            tire_type: TireType::Summer,
            inspection_date: None,
            maintenance_date: None,
            insurance_date: None,
            tire_change_date: None,
            lease_company: None,
            lease_monthly_cost: None,
            lease_start: None,
            lease_end: None,
            lease_contact: None,
            lease_phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn leased_vehicle(number: &str, lease_end: NaiveDate) -> Vehicle {
        let mut vehicle = test_vehicle(number);
        vehicle.ownership_type = OwnershipType::Leased;
        vehicle.lease_company = Some("Arrendadora Norte".to_string());
        vehicle.lease_monthly_cost = Some(Decimal::new(45_000, 0));
        vehicle.lease_start = Some(lease_end - Duration::days(365));
        vehicle.lease_end = Some(lease_end);
        vehicle
    }

    fn test_computer(number: &str) -> Computer {
        Computer {
            id: Uuid::new_v4(),
            asset_number: number.to_string(),
            maker: None,
            model: None,
            assigned_to: None,
            status: AssetStatus::Active,
            ownership_type: OwnershipType::Owned,
            warranty_expiration: None,
            lease_company: None,
            lease_monthly_cost: None,
            lease_start: None,
            lease_end: None,
            lease_contact: None,
            lease_phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_general_asset(name: &str) -> GeneralAsset {
        GeneralAsset {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: None,
            location: None,
            status: AssetStatus::Active,
            ownership_type: OwnershipType::Owned,
            warranty_expiration: None,
            lease_company: None,
            lease_monthly_cost: None,
            lease_start: None,
            lease_end: None,
            lease_contact: None,
            lease_phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compute_warnings(&[], &[], &[], today()).is_empty());
    }

    #[test]
    fn test_inspection_threshold_boundaries() {
        // Exactamente 30 días: critical
        let mut vehicle = test_vehicle("V-001");
        vehicle.inspection_date = Some(in_days(30));
        let warnings = compute_warnings(&[vehicle], &[], &[], today());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarningLevel::Critical);
        assert_eq!(warnings[0].days_remaining, 30);

        // Exactamente 31 días: warning
        let mut vehicle = test_vehicle("V-001");
        vehicle.inspection_date = Some(in_days(31));
        let warnings = compute_warnings(&[vehicle], &[], &[], today());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarningLevel::Warning);

        // Exactamente 60 días: todavía warning
        let mut vehicle = test_vehicle("V-001");
        vehicle.inspection_date = Some(in_days(60));
        let warnings = compute_warnings(&[vehicle], &[], &[], today());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarningLevel::Warning);

        // 61 días: fuera de la ventana de servicio, sin aviso
        let mut vehicle = test_vehicle("V-001");
        vehicle.inspection_date = Some(in_days(61));
        assert!(compute_warnings(&[vehicle], &[], &[], today()).is_empty());
    }

    #[test]
    fn test_service_dimensions_have_no_info_level() {
        // Las dimensiones de servicio nunca producen info, ni en el borde
        let mut vehicle = test_vehicle("V-001");
        vehicle.maintenance_date = Some(in_days(60));
        vehicle.tire_change_date = Some(in_days(45));
        let warnings = compute_warnings(&[vehicle], &[], &[], today());
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.level != WarningLevel::Info));
    }

    #[test]
    fn test_lease_three_tier_boundaries() {
        for (days, expected) in [
            (30, Some(WarningLevel::Critical)),
            (31, Some(WarningLevel::Warning)),
            (60, Some(WarningLevel::Warning)),
            (61, Some(WarningLevel::Info)),
            (90, Some(WarningLevel::Info)),
            (91, None),
        ] {
            let vehicle = leased_vehicle("V-777", in_days(days));
            let warnings = compute_warnings(&[vehicle], &[], &[], today());
            match expected {
                Some(level) => {
                    assert_eq!(warnings.len(), 1, "days={}", days);
                    assert_eq!(warnings[0].level, level, "days={}", days);
                    assert_eq!(warnings[0].deadline_type, DeadlineType::Lease);
                }
                None => assert!(warnings.is_empty(), "days={}", days),
            }
        }
    }

    #[test]
    fn test_warranty_three_tier_for_computer() {
        let mut computer = test_computer("PC-010");
        computer.warranty_expiration = Some(in_days(75));
        let warnings = compute_warnings(&[], &[computer], &[], today());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarningLevel::Info);
        assert_eq!(warnings[0].deadline_type, DeadlineType::Warranty);
        assert_eq!(warnings[0].asset_category, AssetCategory::Pc);
    }

    #[test]
    fn test_asset_lease_emits_contract_type() {
        let mut asset = test_general_asset("Fotocopiadora");
        asset.ownership_type = OwnershipType::Leased;
        asset.lease_end = Some(in_days(20));
        let warnings = compute_warnings(&[], &[], &[asset], today());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].deadline_type, DeadlineType::Contract);
        assert_eq!(warnings[0].level, WarningLevel::Critical);
    }

    #[test]
    fn test_owned_asset_lease_end_is_ignored() {
        // El fin de leasing solo aplica a activos leased
        let mut vehicle = test_vehicle("V-002");
        vehicle.lease_end = Some(in_days(10));
        assert!(compute_warnings(&[vehicle], &[], &[], today()).is_empty());

        let mut computer = test_computer("PC-020");
        computer.lease_end = Some(in_days(10));
        assert!(compute_warnings(&[], &[computer], &[], today()).is_empty());
    }

    #[test]
    fn test_overdue_sorts_first() {
        let mut overdue = test_vehicle("V-OLD");
        overdue.inspection_date = Some(in_days(-5));
        let mut upcoming = test_vehicle("V-NEW");
        upcoming.inspection_date = Some(in_days(10));

        // El vencido entra último pero ordena primero
        let warnings = compute_warnings(&[upcoming, overdue], &[], &[], today());
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].days_remaining, -5);
        assert_eq!(warnings[0].level, WarningLevel::Critical);
        assert_eq!(warnings[1].days_remaining, 10);
    }

    #[test]
    fn test_sort_is_nondecreasing() {
        let mut v1 = test_vehicle("V-1");
        v1.inspection_date = Some(in_days(45));
        v1.maintenance_date = Some(in_days(3));
        let mut v2 = leased_vehicle("V-2", in_days(80));
        v2.tire_change_date = Some(in_days(-12));
        let mut pc = test_computer("PC-1");
        pc.warranty_expiration = Some(in_days(29));

        let warnings = compute_warnings(&[v1, v2], &[pc], &[], today());
        assert_eq!(warnings.len(), 5);
        for pair in warnings.windows(2) {
            assert!(pair[0].days_remaining <= pair[1].days_remaining);
        }
    }

    #[test]
    fn test_tie_keeps_encounter_order() {
        // Mismo días restantes: vehículos antes que PCs, PCs antes que generales
        let mut vehicle = test_vehicle("V-1");
        vehicle.inspection_date = Some(in_days(15));
        let mut computer = test_computer("PC-1");
        computer.warranty_expiration = Some(in_days(15));
        let mut asset = test_general_asset("Proyector");
        asset.warranty_expiration = Some(in_days(15));

        let warnings = compute_warnings(&[vehicle], &[computer], &[asset], today());
        assert_eq!(warnings.len(), 3);
        assert_eq!(warnings[0].asset_category, AssetCategory::Vehicle);
        assert_eq!(warnings[1].asset_category, AssetCategory::Pc);
        assert_eq!(warnings[2].asset_category, AssetCategory::General);
    }

    #[test]
    fn test_missing_dates_produce_no_warnings() {
        let vehicle = test_vehicle("V-1");
        let computer = test_computer("PC-1");
        let asset = test_general_asset("Escritorio");
        assert!(compute_warnings(&[vehicle], &[computer], &[asset], today()).is_empty());
    }

    #[test]
    fn test_insurance_date_is_not_a_dimension() {
        let mut vehicle = test_vehicle("V-1");
        vehicle.insurance_date = Some(in_days(5));
        assert!(compute_warnings(&[vehicle], &[], &[], today()).is_empty());
    }

    #[test]
    fn test_one_warning_per_dimension_with_composite_id() {
        let mut vehicle = leased_vehicle("V-1", in_days(40));
        vehicle.inspection_date = Some(in_days(10));
        vehicle.maintenance_date = Some(in_days(20));
        vehicle.tire_change_date = Some(in_days(30));

        let warnings = compute_warnings(&[vehicle.clone()], &[], &[], today());
        assert_eq!(warnings.len(), 4);

        let mut ids: Vec<&str> = warnings.iter().map(|w| w.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(warnings
            .iter()
            .any(|w| w.id == format!("{}:inspection", vehicle.id)));
    }

    #[test]
    fn test_tire_change_names_opposite_season() {
        let mut winter = test_vehicle("V-W");
        winter.tire_type = TireType::Winter;
        winter.tire_change_date = Some(in_days(10));
        let warnings = compute_warnings(&[winter], &[], &[], today());
        assert!(warnings[0].title.contains("verano"));

        let mut summer = test_vehicle("V-S");
        summer.tire_type = TireType::Summer;
        summer.tire_change_date = Some(in_days(10));
        let warnings = compute_warnings(&[summer], &[], &[], today());
        assert!(warnings[0].title.contains("invierno"));
    }

    #[test]
    fn test_filter_is_idempotent_and_preserves_order() {
        let mut v1 = test_vehicle("V-1");
        v1.inspection_date = Some(in_days(50));
        let mut v2 = test_vehicle("V-2");
        v2.maintenance_date = Some(in_days(5));
        let mut pc = test_computer("PC-1");
        pc.warranty_expiration = Some(in_days(25));

        let all = compute_warnings(&[v1, v2], &[pc], &[], today());
        let filtered = filter_warnings(&all, AssetCategory::Vehicle);
        let refiltered = filter_warnings(&filtered, AssetCategory::Vehicle);

        assert_eq!(filtered, refiltered);
        assert_eq!(filtered.len(), 2);
        assert!(filtered[0].days_remaining <= filtered[1].days_remaining);
        assert!(filter_warnings(&all, AssetCategory::General).is_empty());
    }
}
