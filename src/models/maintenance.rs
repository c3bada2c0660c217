//! Modelo de MaintenanceEvent
//!
//! Eventos de mantenimiento registrados para un vehículo. Son inmutables
//! una vez creados y se eliminan en cascada con su vehículo.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Evento de mantenimiento - mapea a la entrada `maintenance_events` del documento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    pub id: i64,
    pub vehicle_id: i64,
    /// Texto libre, p.ej. "Full Oil Change"
    #[serde(rename = "type")]
    pub service_type: String,
    /// Fecha ISO 8601 (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Lectura del odómetro en el momento del servicio
    pub mileage: i64,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub cost: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Datos de un evento todavía sin id ni vehículo asignado
#[derive(Debug, Clone)]
pub struct NewMaintenanceEvent {
    pub service_type: String,
    pub date: NaiveDate,
    pub mileage: i64,
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
}

impl NewMaintenanceEvent {
    pub fn into_event(self, id: i64, vehicle_id: i64) -> MaintenanceEvent {
        MaintenanceEvent {
            id,
            vehicle_id,
            service_type: self.service_type,
            date: self.date,
            mileage: self.mileage,
            cost: self.cost,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_uses_type_key() {
        let event = NewMaintenanceEvent {
            service_type: "Oil Change".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            mileage: 12000,
            cost: Some(Decimal::new(455, 1)),
            notes: None,
        }
        .into_event(7, 3);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["vehicle_id"], 3);
        assert_eq!(value["type"], "Oil Change");
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["cost"], 45.5);
        assert!(value["notes"].is_null());
    }

    #[test]
    fn test_event_reads_legacy_document_entry() {
        // Entradas sin cost/notes también deben cargarse
        let event: MaintenanceEvent = serde_json::from_value(json!({
            "id": 1,
            "vehicle_id": 1,
            "type": "Tire Rotation",
            "date": "2023-11-20",
            "mileage": 30000
        }))
        .unwrap();

        assert_eq!(event.service_type, "Tire Rotation");
        assert_eq!(event.cost, None);
        assert_eq!(event.notes, None);
    }
}
