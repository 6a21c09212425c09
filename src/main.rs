mod cache;
mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{extract::State, response::Json, routing::get, Router};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use dotenvy::dotenv;
use serde_json::json;

use cache::{CacheConfig, RedisClient};
use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏢 Asset Portal - Gestión de activos, avisos y costos");
    info!("====================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Inicializar Redis y cache
    let redis_config = CacheConfig {
        redis_url: config.redis_url.clone(),
        default_ttl: config.cache_ttl_seconds,
        max_connections: 10,
    };

    let redis_client = match RedisClient::new(redis_config).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    // CORS: permisivo en desarrollo, lista de orígenes en producción
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone(), redis_client);

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest(
            "/api/computer",
            routes::computer_routes::create_computer_router(),
        )
        .nest(
            "/api/asset",
            routes::general_asset_routes::create_general_asset_router(),
        )
        .nest("/api/vendor", routes::vendor_routes::create_vendor_router())
        .nest(
            "/api/dashboard",
            routes::dashboard_routes::create_dashboard_router(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .with_state(app_state);

    // Puerto del servidor
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo (cascada de registros)");
    info!("   GET  /api/vehicle/:id/maintenance - Historial de mantenimiento");
    info!("   POST /api/vehicle/:id/maintenance - Registrar mantenimiento");
    info!("   DELETE /api/vehicle/:id/maintenance/:record_id - Eliminar registro");
    info!("   GET  /api/vehicle/:id/mileage - Kilometraje mensual");
    info!("   POST /api/vehicle/:id/mileage - Registrar kilometraje");
    info!("   GET  /api/vehicle/:id/costs - Costos mensuales del vehículo");
    info!("💻 Endpoints - Computer:");
    info!("   POST /api/computer - Registrar PC");
    info!("   GET  /api/computer - Listar PCs");
    info!("   GET  /api/computer/:id - Obtener PC");
    info!("   PUT  /api/computer/:id - Actualizar PC");
    info!("   DELETE /api/computer/:id - Eliminar PC");
    info!("📦 Endpoints - General Asset:");
    info!("   POST /api/asset - Registrar activo");
    info!("   GET  /api/asset - Listar activos");
    info!("   GET  /api/asset/:id - Obtener activo");
    info!("   PUT  /api/asset/:id - Actualizar activo");
    info!("   DELETE /api/asset/:id - Eliminar activo");
    info!("🔧 Endpoints - Vendor:");
    info!("   POST /api/vendor - Registrar proveedor");
    info!("   GET  /api/vendor - Listar proveedores (con work_count)");
    info!("   GET  /api/vendor/:id - Obtener proveedor");
    info!("   PUT  /api/vendor/:id - Actualizar proveedor");
    info!("   DELETE /api/vendor/:id - Eliminar proveedor (sin cascada)");
    info!("📊 Endpoints - Dashboard:");
    info!("   GET  /api/dashboard/warnings - Feed de avisos de vencimiento");
    info!("   GET  /api/dashboard/costs - Resumen mensual de costos");
    info!("   GET  /api/dashboard/costs/vehicles - Desglose por vehículo");
    info!("   GET  /api/dashboard/costs/categories - Desglose por categoría");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple con estado de las conexiones
async fn test_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Asset Portal funcionando correctamente!",
        "status": "ok",
        "redis_connected": state.redis.is_connected().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
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
