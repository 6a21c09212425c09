//! Motor de agregación de costos
//!
//! Dado un rango cerrado de meses "YYYY-MM", produce un bucket por mes
//! calendario sumando (a) el costo de leasing prorrateado de cada activo
//! cuyo contrato cubre ese mes y (b) el costo de mantenimiento registrado
//! dentro del mes. Función pura: sin I/O, sin estado, no muta sus entradas.
//!
//! Atribución de leasing por bucket: se cuentan los límites de mes
//! calendario dentro de [inicio_mes, inicio_mes+1) que caen dentro de
//! [contractStart, contractEnd] inclusive. Cada mes se evalúa de forma
//! independiente, sin doble conteo en rangos multi-mes.

use std::collections::HashSet;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::asset::{Computer, GeneralAsset, LeaseTerm};
use crate::models::cost::{CategoryCostSummary, CostSummary, VehicleCostBreakdown};
use crate::models::maintenance::MaintenanceRecord;
use crate::models::vehicle::Vehicle;
use crate::utils::validation::{format_month, parse_month};

/// Resumen mensual agregado sobre los vehículos dados.
///
/// Un límite mal formado o un rango invertido produce una lista vacía,
/// nunca un error.
pub fn compute_cost_summary(
    vehicles: &[Vehicle],
    records: &[MaintenanceRecord],
    start_month: &str,
    end_month: &str,
) -> Vec<CostSummary> {
    let buckets = month_buckets(start_month, end_month);
    let vehicle_ids: HashSet<Uuid> = vehicles.iter().map(|v| v.id).collect();
    let lease_terms: Vec<LeaseTerm> = vehicles.iter().filter_map(|v| v.lease_term()).collect();

    buckets
        .into_iter()
        .map(|first_day| {
            let lease_cost = monthly_lease_cost(&lease_terms, first_day);
            let maintenance_cost: Decimal = records
                .iter()
                .filter(|r| vehicle_ids.contains(&r.vehicle_id) && in_month(r.date, first_day))
                .map(|r| r.cost)
                .sum();
            CostSummary {
                month: format_month(first_day),
                lease_cost,
                maintenance_cost,
                total: lease_cost + maintenance_cost,
            }
        })
        .collect()
}

/// Desglose por vehículo sobre el rango completo.
///
/// Un vehículo entra en el resultado solo si registró actividad en el
/// rango (leasing o mantenimiento mayor que cero); los demás se omiten,
/// no se devuelven filas en cero.
pub fn compute_vehicle_cost_breakdown(
    vehicles: &[Vehicle],
    records: &[MaintenanceRecord],
    start_month: &str,
    end_month: &str,
) -> Vec<VehicleCostBreakdown> {
    let buckets = month_buckets(start_month, end_month);
    if buckets.is_empty() {
        return Vec::new();
    }
    let range_start = buckets[0];
    let range_end = next_month(buckets[buckets.len() - 1]);

    vehicles
        .iter()
        .filter_map(|vehicle| {
            let lease_cost = vehicle
                .lease_term()
                .map(|term| {
                    let covered_months = buckets
                        .iter()
                        .filter(|first_day| term.covers_month_start(**first_day))
                        .count();
                    term.monthly_cost * Decimal::from(covered_months as i64)
                })
                .unwrap_or(Decimal::ZERO);

            let maintenance_cost: Decimal = records
                .iter()
                .filter(|r| {
                    r.vehicle_id == vehicle.id && r.date >= range_start && r.date < range_end
                })
                .map(|r| r.cost)
                .sum();

            if lease_cost.is_zero() && maintenance_cost.is_zero() {
                return None;
            }

            Some(VehicleCostBreakdown {
                vehicle_id: vehicle.id,
                vehicle_number: vehicle.vehicle_number.clone(),
                lease_cost,
                maintenance_cost,
                total: lease_cost + maintenance_cost,
            })
        })
        .collect()
}

/// Resumen mensual desglosado por categoría de activo. Los PCs y activos
/// generales solo aportan leasing; el mantenimiento pertenece a vehículos.
pub fn compute_category_cost_summary(
    vehicles: &[Vehicle],
    computers: &[Computer],
    general_assets: &[GeneralAsset],
    records: &[MaintenanceRecord],
    start_month: &str,
    end_month: &str,
) -> Vec<CategoryCostSummary> {
    let buckets = month_buckets(start_month, end_month);
    let vehicle_ids: HashSet<Uuid> = vehicles.iter().map(|v| v.id).collect();
    let vehicle_terms: Vec<LeaseTerm> = vehicles.iter().filter_map(|v| v.lease_term()).collect();
    let computer_terms: Vec<LeaseTerm> = computers.iter().filter_map(|c| c.lease_term()).collect();
    let general_terms: Vec<LeaseTerm> =
        general_assets.iter().filter_map(|a| a.lease_term()).collect();

    buckets
        .into_iter()
        .map(|first_day| {
            let vehicle_maintenance: Decimal = records
                .iter()
                .filter(|r| vehicle_ids.contains(&r.vehicle_id) && in_month(r.date, first_day))
                .map(|r| r.cost)
                .sum();
            let vehicle_cost = monthly_lease_cost(&vehicle_terms, first_day) + vehicle_maintenance;
            let computer_cost = monthly_lease_cost(&computer_terms, first_day);
            let general_cost = monthly_lease_cost(&general_terms, first_day);

            CategoryCostSummary {
                month: format_month(first_day),
                vehicle_cost,
                computer_cost,
                general_cost,
                total: vehicle_cost + computer_cost + general_cost,
            }
        })
        .collect()
}

/// Total general del rango: suma de los totales mensuales
pub fn grand_total(summaries: &[CostSummary]) -> Decimal {
    summaries.iter().map(|s| s.total).sum()
}

/// Enumerar los primeros días de cada mes de [start, end] inclusive.
/// Límite inválido o rango invertido: lista vacía.
fn month_buckets(start_month: &str, end_month: &str) -> Vec<NaiveDate> {
    let (start, end) = match (parse_month(start_month), parse_month(end_month)) {
        (Some(start), Some(end)) => (start, end),
        _ => return Vec::new(),
    };

    let mut buckets = Vec::new();
    let mut current = start;
    while current <= end {
        buckets.push(current);
        current = next_month(current);
    }
    buckets
}

fn next_month(first_day: NaiveDate) -> NaiveDate {
    first_day
        .checked_add_months(Months::new(1))
        .expect("rango de meses dentro de los límites de chrono")
}

fn in_month(date: NaiveDate, first_day: NaiveDate) -> bool {
    date.year() == first_day.year() && date.month() == first_day.month()
}

/// Costo de leasing del bucket: un contrato aporta su cuota mensual por
/// cada límite de mes del bucket que cubra (0 o 1 para un bucket simple).
fn monthly_lease_cost(terms: &[LeaseTerm], first_day: NaiveDate) -> Decimal {
    terms
        .iter()
        .filter(|term| term.covers_month_start(first_day))
        .map(|term| term.monthly_cost)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::{AssetStatus, OwnershipType};
    use crate::models::vehicle::TireType;
    use chrono::Utc;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
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

    fn leased_vehicle(
        number: &str,
        start: NaiveDate,
        end: NaiveDate,
        monthly_cost: i64,
    ) -> Vehicle {
        let mut vehicle = test_vehicle(number);
        vehicle.ownership_type = OwnershipType::Leased;
        vehicle.lease_company = Some("Arrendadora Norte".to_string());
        vehicle.lease_monthly_cost = Some(Decimal::new(monthly_cost, 0));
        vehicle.lease_start = Some(start);
        vehicle.lease_end = Some(end);
        vehicle
    }

    fn maintenance_record(vehicle_id: Uuid, day: NaiveDate, cost: i64) -> MaintenanceRecord {
        MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id,
            record_type: "repair".to_string(),
            date: day,
            cost: Decimal::new(cost, 0),
            vendor_id: None,
            description: None,
            performed_by: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_lease_proration_single_month() {
        // Contrato ene-mar a 45.000/mes: febrero aporta exactamente una cuota
        let vehicle = leased_vehicle("V-1", date(2024, 1, 1), date(2024, 3, 31), 45_000);
        let summary = compute_cost_summary(&[vehicle.clone()], &[], "2024-02", "2024-02");
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].month, "2024-02");
        assert_eq!(summary[0].lease_cost, Decimal::new(45_000, 0));
        assert_eq!(summary[0].total, Decimal::new(45_000, 0));

        // Contrato ya terminado en mayo: sin fila en el desglose
        let breakdown = compute_vehicle_cost_breakdown(&[vehicle], &[], "2024-05", "2024-05");
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_lease_not_double_counted_across_months() {
        let vehicle = leased_vehicle("V-1", date(2024, 1, 1), date(2024, 3, 31), 45_000);
        let summary = compute_cost_summary(&[vehicle], &[], "2024-01", "2024-06");
        assert_eq!(summary.len(), 6);

        // Una cuota por mes cubierto, cero después
        for (index, row) in summary.iter().enumerate() {
            let expected = if index < 3 {
                Decimal::new(45_000, 0)
            } else {
                Decimal::ZERO
            };
            assert_eq!(row.lease_cost, expected, "mes {}", row.month);
        }
        assert_eq!(grand_total(&summary), Decimal::new(135_000, 0));
    }

    #[test]
    fn test_mid_month_contract_start_skips_partial_month() {
        // El límite de mes de enero (01-01) queda fuera de un contrato que
        // empieza el 15: enero no se cobra, febrero sí
        let vehicle = leased_vehicle("V-1", date(2024, 1, 15), date(2024, 12, 31), 30_000);
        let summary = compute_cost_summary(&[vehicle], &[], "2024-01", "2024-02");
        assert_eq!(summary[0].lease_cost, Decimal::ZERO);
        assert_eq!(summary[1].lease_cost, Decimal::new(30_000, 0));
    }

    #[test]
    fn test_maintenance_only_vehicle_included_then_excluded() {
        let vehicle = test_vehicle("V-1");
        let record = maintenance_record(vehicle.id, date(2024, 10, 15), 8_000);

        // Octubre: exactamente una fila, solo mantenimiento
        let breakdown = compute_vehicle_cost_breakdown(
            &[vehicle.clone()],
            &[record.clone()],
            "2024-10",
            "2024-10",
        );
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].lease_cost, Decimal::ZERO);
        assert_eq!(breakdown[0].maintenance_cost, Decimal::new(8_000, 0));
        assert_eq!(breakdown[0].total, Decimal::new(8_000, 0));

        // Noviembre: sin actividad, sin fila
        let breakdown = compute_vehicle_cost_breakdown(&[vehicle], &[record], "2024-11", "2024-11");
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_maintenance_bucketed_by_record_month() {
        let vehicle = test_vehicle("V-1");
        let records = vec![
            maintenance_record(vehicle.id, date(2024, 10, 2), 5_000),
            maintenance_record(vehicle.id, date(2024, 10, 28), 3_000),
            maintenance_record(vehicle.id, date(2024, 11, 1), 7_000),
        ];
        let summary = compute_cost_summary(&[vehicle], &records, "2024-10", "2024-12");
        assert_eq!(summary[0].maintenance_cost, Decimal::new(8_000, 0));
        assert_eq!(summary[1].maintenance_cost, Decimal::new(7_000, 0));
        assert_eq!(summary[2].maintenance_cost, Decimal::ZERO);
    }

    #[test]
    fn test_records_of_other_vehicles_are_ignored() {
        let vehicle = test_vehicle("V-1");
        let foreign_record = maintenance_record(Uuid::new_v4(), date(2024, 10, 15), 9_999);
        let summary = compute_cost_summary(&[vehicle], &[foreign_record], "2024-10", "2024-10");
        assert_eq!(summary[0].maintenance_cost, Decimal::ZERO);
    }

    #[test]
    fn test_empty_inputs_produce_zeroed_months() {
        let summary = compute_cost_summary(&[], &[], "2024-01", "2024-12");
        assert_eq!(summary.len(), 12);
        assert_eq!(summary[0].month, "2024-01");
        assert_eq!(summary[11].month, "2024-12");
        assert!(summary
            .iter()
            .all(|s| s.lease_cost.is_zero() && s.maintenance_cost.is_zero() && s.total.is_zero()));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(compute_cost_summary(&[], &[], "2024-12", "2024-01").is_empty());
        assert!(compute_vehicle_cost_breakdown(&[], &[], "2024-12", "2024-01").is_empty());
    }

    #[test]
    fn test_malformed_month_is_empty_not_error() {
        let vehicle = leased_vehicle("V-1", date(2024, 1, 1), date(2024, 12, 31), 45_000);
        assert!(compute_cost_summary(&[vehicle.clone()], &[], "2024-13", "2024-02").is_empty());
        assert!(compute_cost_summary(&[vehicle.clone()], &[], "enero", "2024-02").is_empty());
        assert!(compute_vehicle_cost_breakdown(&[vehicle], &[], "", "2024-02").is_empty());
    }

    #[test]
    fn test_year_rollover() {
        let summary = compute_cost_summary(&[], &[], "2023-11", "2024-02");
        let months: Vec<&str> = summary.iter().map(|s| s.month.as_str()).collect();
        assert_eq!(months, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_single_vehicle_monthly_rows() {
        // La vista de detalle reutiliza el resumen mensual con un solo vehículo
        let vehicle = leased_vehicle("V-1", date(2024, 1, 1), date(2024, 2, 29), 45_000);
        let record = maintenance_record(vehicle.id, date(2024, 2, 10), 8_000);
        let rows = compute_cost_summary(&[vehicle], &[record], "2024-01", "2024-03");
        assert_eq!(rows[0].total, Decimal::new(45_000, 0));
        assert_eq!(rows[1].total, Decimal::new(53_000, 0));
        assert_eq!(rows[2].total, Decimal::ZERO);
    }

    #[test]
    fn test_category_breakdown() {
        let vehicle = leased_vehicle("V-1", date(2024, 1, 1), date(2024, 12, 31), 45_000);
        let record = maintenance_record(vehicle.id, date(2024, 3, 5), 8_000);

        let computer = crate::models::asset::Computer {
            id: Uuid::new_v4(),
            asset_number: "PC-1".to_string(),
            maker: None,
            model: None,
            assigned_to: Some("Soporte".to_string()),
            status: AssetStatus::Active,
            ownership_type: OwnershipType::Leased,
            warranty_expiration: None,
            lease_company: Some("TecnoRenta".to_string()),
            lease_monthly_cost: Some(Decimal::new(5_000, 0)),
            lease_start: Some(date(2024, 1, 1)),
            lease_end: Some(date(2024, 12, 31)),
            lease_contact: None,
            lease_phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let summary = compute_category_cost_summary(
            &[vehicle],
            &[computer],
            &[],
            &[record],
            "2024-03",
            "2024-03",
        );
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].vehicle_cost, Decimal::new(53_000, 0));
        assert_eq!(summary[0].computer_cost, Decimal::new(5_000, 0));
        assert_eq!(summary[0].general_cost, Decimal::ZERO);
        assert_eq!(summary[0].total, Decimal::new(58_000, 0));
    }
}
