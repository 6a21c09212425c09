use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::redis_client::RedisClient;
use super::CacheOperations;
use crate::models::warning::DeadlineWarning;

/// Feed de avisos cacheado. `computed_for` es la fecha de cálculo: un feed
/// calculado otro día está obsoleto aunque el TTL no haya expirado, porque
/// los días restantes dependen de "hoy".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedWarningFeed {
    pub computed_for: NaiveDate,
    pub checksum: String,
    pub warnings: Vec<DeadlineWarning>,
}

/// Caché del feed de avisos del dashboard. Las escrituras de activos y
/// registros lo invalidan; los motores de cálculo no lo conocen.
#[derive(Clone)]
pub struct DashboardCache {
    redis: RedisClient,
    ttl: u64,
}

impl DashboardCache {
    pub fn new(redis: RedisClient) -> Self {
        let ttl = redis.default_ttl();
        Self { redis, ttl }
    }

    fn warnings_key(&self) -> String {
        self.redis.dashboard_key("warnings")
    }

    /// Obtener el feed cacheado si fue calculado hoy
    pub async fn get_warnings(&self, today: NaiveDate) -> Result<Option<Vec<DeadlineWarning>>> {
        let key = self.warnings_key();
        match self.redis.get::<CachedWarningFeed>(&key).await? {
            Some(cached) if cached.computed_for == today => {
                log::info!(
                    "✅ Feed de avisos encontrado en caché ({} avisos, checksum {})",
                    cached.warnings.len(),
                    cached.checksum
                );
                Ok(Some(cached.warnings))
            }
            Some(cached) => {
                // Calculado otro día: descartar
                log::info!(
                    "🗑️ Feed de avisos obsoleto (calculado {}), descartando",
                    cached.computed_for
                );
                self.redis.delete(&key).await?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Guardar el feed calculado hoy
    pub async fn store_warnings(
        &self,
        today: NaiveDate,
        warnings: &[DeadlineWarning],
    ) -> Result<()> {
        let serialized = serde_json::to_string(warnings)?;
        let checksum = format!("{:x}", md5::compute(serialized.as_bytes()));
        let feed = CachedWarningFeed {
            computed_for: today,
            checksum,
            warnings: warnings.to_vec(),
        };
        self.redis.set(&self.warnings_key(), &feed, self.ttl).await
    }

    /// Invalidar el feed tras una escritura de activos o registros
    pub async fn invalidate(&self) -> Result<()> {
        log::info!("🧹 Invalidando caché del dashboard");
        self.redis.delete(&self.warnings_key()).await
    }
}
