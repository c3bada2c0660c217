//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::MaintenanceRepository;
use crate::services::ReminderEngine;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub repository: Arc<dyn MaintenanceRepository>,
    pub engine: Arc<ReminderEngine>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        repository: Arc<dyn MaintenanceRepository>,
        engine: ReminderEngine,
    ) -> Self {
        Self {
            config,
            repository,
            engine: Arc::new(engine),
        }
    }
}
