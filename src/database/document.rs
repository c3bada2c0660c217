//! Documento persistido
//!
//! Estado completo del store: vehículos, eventos y los contadores de ids.
//! Las operaciones aquí son en memoria; `JsonFileStore` se encarga de
//! cargarlo y guardarlo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{MaintenanceEvent, NewMaintenanceEvent, Vehicle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub vehicles: Vec<Vehicle>,
    pub maintenance_events: Vec<MaintenanceEvent>,
    /// Contadores monotónicos, nunca se reutilizan tras un borrado
    pub next_vehicle_id: i64,
    pub next_event_id: i64,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            vehicles: Vec::new(),
            maintenance_events: Vec::new(),
            next_vehicle_id: 1,
            next_event_id: 1,
        }
    }
}

impl StoreDocument {
    pub fn find_vehicle(&self, id: i64) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn insert_vehicle(
        &mut self,
        model: String,
        year: i32,
        current_mileage: i64,
        created_at: DateTime<Utc>,
    ) -> Vehicle {
        let vehicle = Vehicle {
            id: self.next_vehicle_id,
            model,
            year,
            current_mileage,
            created_at,
        };
        self.vehicles.push(vehicle.clone());
        self.next_vehicle_id += 1;
        vehicle
    }

    /// Elimina el vehículo y sus eventos. Devuelve cuántos eventos se borraron,
    /// o None si el vehículo no existe.
    pub fn remove_vehicle(&mut self, id: i64) -> Option<usize> {
        let position = self.vehicles.iter().position(|v| v.id == id)?;
        self.vehicles.remove(position);

        let before = self.maintenance_events.len();
        self.maintenance_events.retain(|e| e.vehicle_id != id);
        Some(before - self.maintenance_events.len())
    }

    /// Registra el evento y sube el kilometraje del vehículo si hace falta.
    /// None si el vehículo no existe.
    pub fn insert_event(
        &mut self,
        vehicle_id: i64,
        event: NewMaintenanceEvent,
    ) -> Option<MaintenanceEvent> {
        let vehicle = self.vehicles.iter_mut().find(|v| v.id == vehicle_id)?;
        vehicle.record_odometer(event.mileage);

        let event = event.into_event(self.next_event_id, vehicle_id);
        self.maintenance_events.push(event.clone());
        self.next_event_id += 1;
        Some(event)
    }

    /// Eventos del vehículo en orden del store
    pub fn events_for(&self, vehicle_id: i64) -> Vec<MaintenanceEvent> {
        self.maintenance_events
            .iter()
            .filter(|e| e.vehicle_id == vehicle_id)
            .cloned()
            .collect()
    }
}
