//! Utilidades de validación
//!
//! Validadores custom para los DTOs de entrada (`validator`) y conversión
//! de los campos de texto a tipos de dominio.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Formato de fecha aceptado para eventos
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convertir string a fecha (YYYY-MM-DD)
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que el string sea una fecha YYYY-MM-DD
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    parse_date(value).map(|_| ())
}

/// Validar que un string no esté vacío (ignorando espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un importe no sea negativo
pub fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut error = ValidationError::new("non_negative");
        error.add_param("actual".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
