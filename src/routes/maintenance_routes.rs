use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::CreateMaintenanceEventRequest;
use crate::models::{MaintenanceEvent, MaintenanceReminder, ServiceRule};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/rules", get(list_rules))
        .route("/history/:vehicle_id", get(get_history))
        .route("/reminders/:vehicle_id", get(get_reminders))
        .route("/:vehicle_id", post(add_maintenance))
}

fn controller(state: &AppState) -> MaintenanceController {
    MaintenanceController::new(state.repository.clone(), state.engine.clone())
}

async fn add_maintenance(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
    Json(request): Json<CreateMaintenanceEventRequest>,
) -> Result<Json<MaintenanceEvent>, AppError> {
    let event = controller(&state).add_event(vehicle_id, request).await?;
    Ok(Json(event))
}

async fn get_history(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<Json<Vec<MaintenanceEvent>>, AppError> {
    let events = controller(&state).history(vehicle_id).await?;
    Ok(Json(events))
}

async fn get_reminders(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<Json<Vec<MaintenanceReminder>>, AppError> {
    let reminders = controller(&state).reminders(vehicle_id).await?;
    Ok(Json(reminders))
}

async fn list_rules(State(state): State<AppState>) -> Json<Vec<ServiceRule>> {
    Json(controller(&state).rules())
}
