pub mod maintenance_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la API con sus capas
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(vehicle_routes::create_vehicle_router())
        .nest("/maintenance", maintenance_routes::create_maintenance_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Información básica de la API
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Automotive Maintenance Tracker API",
        "docs": "/docs"
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
