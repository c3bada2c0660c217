//! Modelos de reglas de servicio y recordatorios
//!
//! Los recordatorios son derivados: nunca se persisten, se calculan en cada
//! consulta a partir del vehículo y su historial.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Regla de intervalo para un tipo de servicio canónico
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRule {
    pub service_type: String,
    pub interval_km: i64,
    pub interval_days: i64,
}

impl ServiceRule {
    pub fn new(service_type: &str, interval_km: i64, interval_days: i64) -> Self {
        Self {
            service_type: service_type.to_string(),
            interval_km,
            interval_days,
        }
    }
}

/// Estado del recordatorio.
///
/// El orden de las variantes es el rango de ordenación: `Overdue` primero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Overdue,
    DueSoon,
    Ok,
}

/// Recordatorio calculado para un tipo de servicio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceReminder {
    pub service_type: String,
    /// Negativo = vencido por esa cantidad de km
    pub due_in_km: i64,
    /// Negativo = vencido por esa cantidad de días
    pub due_in_days: i64,
    pub last_service_date: Option<NaiveDate>,
    pub last_service_mileage: Option<i64>,
    pub status: ReminderStatus,
}
