//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y normalización de identificadores naturales (VIN, matrícula).

use chrono::NaiveDate;
use validator::ValidationError;

/// Normalizar un VIN: trim + mayúsculas.
pub fn normalize_vin(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Normalizar una matrícula: trim + mayúsculas; vacía equivale a "sin matrícula".
pub fn normalize_plate(value: Option<&str>) -> Option<String> {
    let plate = value?.trim().to_uppercase();
    if plate.is_empty() {
        None
    } else {
        Some(plate)
    }
}

/// Validar formato de VIN (ya normalizado): entre 11 y 17 caracteres
pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if !(11..=17).contains(&len) {
        let mut error = ValidationError::new("vin");
        error.add_param("value".into(), &value.to_string());
        error.add_param("length".into(), &"11-17 characters".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar año de fabricación
pub fn validate_year(value: i32) -> Result<(), ValidationError> {
    if !(1980..=2026).contains(&value) {
        let mut error = ValidationError::new("year");
        error.add_param("value".into(), &value);
        error.add_param("range".into(), &"1980 to 2026".to_string());
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

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<
    T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize,
>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_vin() {
        assert_eq!(normalize_vin("  1hgcm82633a004352 "), "1HGCM82633A004352");
        assert_eq!(normalize_vin("DEMO1234567890001"), "DEMO1234567890001");
    }

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate(Some(" ab-1234 ")), Some("AB-1234".to_string()));
        assert_eq!(normalize_plate(Some("   ")), None);
        assert_eq!(normalize_plate(Some("")), None);
        assert_eq!(normalize_plate(None), None);
    }

    #[test]
    fn test_validate_vin() {
        assert!(validate_vin("1HGCM82633A004352").is_ok());
        assert!(validate_vin("DEMO12345678").is_ok());
        assert!(validate_vin("SHORT").is_err());
        assert!(validate_vin(&"A".repeat(18)).is_err());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(2018).is_ok());
        assert!(validate_year(1980).is_ok());
        assert!(validate_year(1979).is_err());
        assert!(validate_year(2027).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Toyota").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-08-01").is_ok());
        assert!(validate_date("2025/08/01").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5.0).is_ok());
        assert!(validate_positive(0.0).is_err());
        assert!(validate_positive(-5.0).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0.0).is_ok());
        assert!(validate_non_negative(12.5).is_ok());
        assert!(validate_non_negative(-0.01).is_err());
    }
}
