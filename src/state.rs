//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::cache::{DashboardCache, RedisClient};
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub redis: RedisClient,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, redis: RedisClient) -> Self {
        Self {
            pool,
            config,
            redis,
        }
    }

    /// Caché del dashboard sobre el cliente Redis compartido
    pub fn dashboard_cache(&self) -> DashboardCache {
        DashboardCache::new(self.redis.clone())
    }

    /// Invalidar el caché del dashboard tras una escritura. Best effort:
    /// un fallo de Redis no debe hacer fallar la operación de escritura.
    pub async fn invalidate_dashboard_cache(&self) {
        if let Err(e) = self.dashboard_cache().invalidate().await {
            log::warn!("⚠️ No se pudo invalidar el caché del dashboard: {}", e);
        }
    }
}
