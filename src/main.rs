use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use autogo_backend::config::EnvironmentConfig;
use autogo_backend::database::DatabaseConnection;
use autogo_backend::routes::create_app_router;
use autogo_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenvy::dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 AutoGo Backend - Inventario de Concesionaria");
    info!("===============================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos: tablas base (fatal), evolución de esquema,
    // y datos de demo si el inventario está vacío
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };
    db_connection.initialize(true).await?;

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, config.clone());

    let app = create_app_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("🚗 Vehículos:");
    info!("   POST   /api/vehicles - Registrar vehículo");
    info!("   GET    /api/vehicles - Listar vehículos (q, page, page_size)");
    info!("   GET    /api/vehicles/:id - Obtener vehículo");
    info!("   PATCH  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo (cascada)");
    info!("   POST   /api/vehicles/:id/photos - Agregar foto");
    info!("   GET    /api/vehicles/:id/photos - Listar fotos");
    info!("   GET    /api/vehicles/:id/sales - Ventas del vehículo");
    info!("   GET    /api/vehicles/:id/costs - Costos del vehículo");
    info!("   GET    /api/vehicles/:id/costs/total - Total de costos");
    info!("💰 Ventas y pagos:");
    info!("   POST   /api/sales - Abrir venta");
    info!("   GET    /api/sales/:id - Obtener venta");
    info!("   POST   /api/sales/:id/settle - Recalcular liquidación");
    info!("   POST   /api/sales/:id/payments - Aplicar pago");
    info!("   GET    /api/sales/:id/payments - Listar pagos");
    info!("   DELETE /api/payments/:id - Revertir pago");
    info!("🧾 Costos:");
    info!("   POST   /api/costs - Registrar costo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

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
