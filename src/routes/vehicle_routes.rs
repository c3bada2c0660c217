use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, MessageResponse};
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de vehículos; `/vehicles` y `/vehicles/` van al mismo handler
pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/:id", delete(delete_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let vehicle = controller.create(request).await?;
    Ok(Json(vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let vehicles = controller.list().await?;
    Ok(Json(vehicles))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Vehicle deleted successfully")))
}
