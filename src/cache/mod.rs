//! Cache
//!
//! Este módulo contiene el cliente Redis y el caché del dashboard.
//! Los motores de cálculo no saben que existe: el caché vive por fuera
//! del core y se invalida en las escrituras.

pub mod dashboard_cache;
pub mod redis_client;

use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use dashboard_cache::DashboardCache;
pub use redis_client::RedisClient;

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
    pub default_ttl: u64,
    pub max_connections: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            default_ttl: 3600, // 1 hora
            max_connections: 10,
        }
    }
}

/// Operaciones de cache
#[async_trait::async_trait]
pub trait CacheOperations {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T, ttl: u64) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
    async fn exists(&self, key: &str) -> Result<bool>;
}
