use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use freight_logistics::config::environment::EnvironmentConfig;
use freight_logistics::database::DatabaseConnection;
use freight_logistics::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Freight Logistics - Backend de gestión logística");
    info!("===================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if !db_connection.check().await {
        error!("❌ La base de datos no responde al round-trip inicial");
    }

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, config.clone());
    let app = freight_logistics::create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Endpoint de prueba");
    info!("   GET  /api/db-check - Verificación de conexión");
    info!("📋 Por cada entidad bajo /api/<entidad>:");
    info!("   POST   /initiate - Recrear y poblar la tabla");
    info!("   POST   /         - Insertar registro");
    info!("   GET    /         - Listar registros");
    info!("   POST   /update   - Actualizar un atributo");
    info!("   DELETE /         - Borrar por clave");
    info!("   GET    /filter   - Selección con predicado tipado");
    info!("📦 Consultas de pedidos:");
    info!("   GET  /api/order/long-haul - Pedidos en rutas largas");
    info!("   GET  /api/order/projection - Proyección de columnas");
    info!("   GET  /api/order/count-by-customer - Pedidos por cliente");
    info!("   GET  /api/order/earliest-departures - Primera salida por fecha cargada");
    info!("   GET  /api/order/above-average-weight - Pedidos sobre el peso promedio del día");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    // Drenar el pool antes de salir
    db_connection.close(Duration::from_secs(10)).await;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
