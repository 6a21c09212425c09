//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos. Las fechas introducidas por el usuario se
//! parsean de forma tolerante: un valor mal formado se trata como
//! ausente, nunca aborta el cálculo.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref MONTH_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}$").unwrap();
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Parsear una fecha opcional introducida por el usuario.
/// Un valor ausente, vacío o mal formado produce `None`.
pub fn parse_date_lenient(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parsear un mes "YYYY-MM" al primer día del mes.
/// Un valor mal formado produce `None` (resultado vacío aguas arriba).
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !MONTH_REGEX.is_match(value) {
        return None;
    }
    let year: i32 = value[..4].parse().ok()?;
    let month: u32 = value[5..7].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Formatear el primer día de un mes como "YYYY-MM"
pub fn format_month(first_day: NaiveDate) -> String {
    format!("{:04}-{:02}", first_day.year(), first_day.month())
}

/// Validar formato de mes "YYYY-MM" para requests
pub fn validate_month(value: &str) -> Result<(), ValidationError> {
    if parse_month(value).is_none() {
        let mut error = ValidationError::new("month");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-02"),
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
        assert_eq!(parse_month(" 2024-11 "), NaiveDate::from_ymd_opt(2024, 11, 1));

        // Valores mal formados no lanzan error, devuelven None
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(parse_month("2024-00"), None);
        assert_eq!(parse_month("2024/02"), None);
        assert_eq!(parse_month("febrero"), None);
        assert_eq!(parse_month(""), None);
    }

    #[test]
    fn test_format_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_month(date), "2024-03");
    }

    #[test]
    fn test_parse_date_lenient() {
        assert_eq!(
            parse_date_lenient(Some("2024-10-15")),
            NaiveDate::from_ymd_opt(2024, 10, 15)
        );
        assert_eq!(parse_date_lenient(Some("15/10/2024")), None);
        assert_eq!(parse_date_lenient(Some("")), None);
        assert_eq!(parse_date_lenient(None), None);
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-10-15").is_ok());
        assert!(validate_date("not-a-date").is_err());
    }
}
