use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::database::JsonFileStore;
use crate::models::{MaintenanceEvent, NewMaintenanceEvent, Vehicle};
use crate::utils::errors::{vehicle_not_found, AppError, AppResult};

/// Acceso a vehículos y eventos de mantenimiento.
///
/// Los controllers dependen solo de este trait; el motor de recordatorios
/// nunca lo ve.
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn create_vehicle(&self, model: String, year: i32, current_mileage: i64) -> AppResult<Vehicle>;

    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>>;

    async fn find_vehicle(&self, id: i64) -> AppResult<Option<Vehicle>>;

    /// Elimina el vehículo y todos sus eventos
    async fn delete_vehicle(&self, id: i64) -> AppResult<()>;

    /// Registra un evento; sube el kilometraje del vehículo si la lectura es mayor
    async fn add_event(&self, vehicle_id: i64, event: NewMaintenanceEvent) -> AppResult<MaintenanceEvent>;

    async fn list_events_by_vehicle(&self, vehicle_id: i64) -> AppResult<Vec<MaintenanceEvent>>;

    /// Vehículo y sus eventos leídos del mismo estado del store
    async fn vehicle_with_events(&self, vehicle_id: i64) -> AppResult<(Vehicle, Vec<MaintenanceEvent>)>;
}

#[async_trait]
impl MaintenanceRepository for JsonFileStore {
    async fn create_vehicle(&self, model: String, year: i32, current_mileage: i64) -> AppResult<Vehicle> {
        let vehicle = self
            .update(|doc| Ok::<_, AppError>(doc.insert_vehicle(model, year, current_mileage, Utc::now())))
            .await?;

        info!("🚗 Vehículo creado: id={} model='{}'", vehicle.id, vehicle.model);
        Ok(vehicle)
    }

    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.read(|doc| doc.vehicles.clone()).await?)
    }

    async fn find_vehicle(&self, id: i64) -> AppResult<Option<Vehicle>> {
        Ok(self.read(|doc| doc.find_vehicle(id).cloned()).await?)
    }

    async fn delete_vehicle(&self, id: i64) -> AppResult<()> {
        let removed_events = self
            .update(|doc| doc.remove_vehicle(id).ok_or_else(vehicle_not_found))
            .await?;

        info!("🗑️ Vehículo {} eliminado junto con {} eventos", id, removed_events);
        Ok(())
    }

    async fn add_event(&self, vehicle_id: i64, event: NewMaintenanceEvent) -> AppResult<MaintenanceEvent> {
        let event = self
            .update(|doc| doc.insert_event(vehicle_id, event).ok_or_else(vehicle_not_found))
            .await?;

        info!(
            "🔧 Evento {} registrado para vehículo {}: '{}' a {} km",
            event.id, vehicle_id, event.service_type, event.mileage
        );
        Ok(event)
    }

    async fn list_events_by_vehicle(&self, vehicle_id: i64) -> AppResult<Vec<MaintenanceEvent>> {
        let (_, events) = self.vehicle_with_events(vehicle_id).await?;
        Ok(events)
    }

    async fn vehicle_with_events(&self, vehicle_id: i64) -> AppResult<(Vehicle, Vec<MaintenanceEvent>)> {
        self.read(|doc| {
            doc.find_vehicle(vehicle_id)
                .cloned()
                .map(|vehicle| (vehicle, doc.events_for(vehicle_id)))
        })
        .await?
        .ok_or_else(vehicle_not_found)
    }
}
