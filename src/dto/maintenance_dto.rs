use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::models::NewMaintenanceEvent;
use crate::utils::validation::{parse_date, validate_date, validate_non_negative, validate_not_empty};

// Request para registrar un evento de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceEventRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub service_type: String,

    /// YYYY-MM-DD
    #[validate(custom = "validate_date")]
    pub date: String,

    #[validate(range(min = 0))]
    pub mileage: i64,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom = "validate_non_negative")]
    pub cost: Option<Decimal>,

    pub notes: Option<String>,
}

impl CreateMaintenanceEventRequest {
    /// Validar y convertir a un evento nuevo
    pub fn into_new_event(self) -> Result<NewMaintenanceEvent, ValidationErrors> {
        self.validate()?;

        let date = parse_date(&self.date).map_err(|error| {
            let mut errors = ValidationErrors::new();
            errors.add("date", error);
            errors
        })?;

        Ok(NewMaintenanceEvent {
            service_type: self.service_type.trim().to_string(),
            date,
            mileage: self.mileage,
            cost: self.cost,
            notes: self.notes,
        })
    }
}
