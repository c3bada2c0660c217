use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use maintenance_tracker::config::environment::EnvironmentConfig;
use maintenance_tracker::database::JsonFileStore;
use maintenance_tracker::routes::create_app_router;
use maintenance_tracker::services::ReminderEngine;
use maintenance_tracker::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Automotive Maintenance Tracker API");
    info!("=====================================");
    info!("⚙️ Entorno: {}", config.environment);

    // Inicializar store
    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    if let Err(e) = store.initialize().await {
        error!("❌ Error abriendo el store {}: {}", store.path().display(), e);
        return Err(anyhow::anyhow!("Error de store: {}", e));
    }

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.server_url()))?;

    if config.cors_origins.is_empty() {
        if !config.is_development() {
            warn!("⚠️ CORS abierto a cualquier origen fuera de desarrollo");
        }
    } else {
        info!("🌍 CORS limitado a: {}", config.cors_origins.join(", "));
    }

    let state = AppState::new(config, store, ReminderEngine::default());
    let app = create_app_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Información de la API");
    info!("   GET    /health - Health check");
    info!("🚗 Vehículos:");
    info!("   POST   /vehicles - Crear vehículo");
    info!("   GET    /vehicles - Listar vehículos");
    info!("   DELETE /vehicles/:id - Eliminar vehículo y su historial");
    info!("🔧 Mantenimiento:");
    info!("   POST   /maintenance/:vehicle_id - Registrar evento");
    info!("   GET    /maintenance/history/:vehicle_id - Historial");
    info!("   GET    /maintenance/reminders/:vehicle_id - Recordatorios");
    info!("   GET    /maintenance/rules - Reglas de intervalo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
