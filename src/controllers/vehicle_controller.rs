use std::sync::Arc;

use validator::Validate;

use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::models::Vehicle;
use crate::repositories::MaintenanceRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleController {
    repository: Arc<dyn MaintenanceRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn MaintenanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate().map_err(AppError::Validation)?;

        self.repository
            .create_vehicle(request.model.trim().to_string(), request.year, request.current_mileage)
            .await
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.repository.list_vehicles().await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete_vehicle(id).await
    }
}
