use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::dto::maintenance_dto::CreateMaintenanceEventRequest;
use crate::models::{MaintenanceEvent, MaintenanceReminder, ServiceRule};
use crate::repositories::MaintenanceRepository;
use crate::services::ReminderEngine;
use crate::utils::errors::{AppError, AppResult};

pub struct MaintenanceController {
    repository: Arc<dyn MaintenanceRepository>,
    engine: Arc<ReminderEngine>,
}

impl MaintenanceController {
    pub fn new(repository: Arc<dyn MaintenanceRepository>, engine: Arc<ReminderEngine>) -> Self {
        Self { repository, engine }
    }

    pub async fn add_event(
        &self,
        vehicle_id: i64,
        request: CreateMaintenanceEventRequest,
    ) -> AppResult<MaintenanceEvent> {
        let event = request.into_new_event().map_err(AppError::Validation)?;

        // Se aceptan fechas futuras; solo se registran en el log
        if event.date > today() {
            warn!(
                "📅 Evento con fecha futura para vehículo {}: {}",
                vehicle_id, event.date
            );
        }

        self.repository.add_event(vehicle_id, event).await
    }

    /// Historial ordenado por fecha descendente
    pub async fn history(&self, vehicle_id: i64) -> AppResult<Vec<MaintenanceEvent>> {
        let mut events = self.repository.list_events_by_vehicle(vehicle_id).await?;
        events.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(events)
    }

    pub async fn reminders(&self, vehicle_id: i64) -> AppResult<Vec<MaintenanceReminder>> {
        self.reminders_on(vehicle_id, today()).await
    }

    /// Recordatorios calculados a una fecha dada
    pub async fn reminders_on(
        &self,
        vehicle_id: i64,
        today: NaiveDate,
    ) -> AppResult<Vec<MaintenanceReminder>> {
        let (vehicle, events) = self.repository.vehicle_with_events(vehicle_id).await?;
        let reminders = self.engine.generate(&vehicle, &events, today);

        debug!(
            "⏰ {} recordatorios para vehículo {} ({} eventos)",
            reminders.len(),
            vehicle_id,
            events.len()
        );
        Ok(reminders)
    }

    pub fn rules(&self) -> Vec<ServiceRule> {
        self.engine.rules().to_vec()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
