//! Store manager that dispatches to the configured backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use doccache_core::config::cache::CacheConfig;
use doccache_core::error::AppError;
use doccache_core::result::AppResult;
use doccache_core::traits::cache::CacheStore;

/// Wraps the backing store selected by configuration.
///
/// Built once per process and shared; clones share the same handle.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn CacheStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &CacheConfig) -> AppResult<Self> {
        let inner: Arc<dyn CacheStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis cache store");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory cache store");
                Arc::new(crate::memory::MemoryStore::new(&config.memory))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown cache provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl CacheStore for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.inner.set(key, value, ttl).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doccache_core::error::ErrorKind;

    #[tokio::test]
    async fn test_unknown_provider_is_configuration_error() {
        let config = CacheConfig {
            provider: "memcached".to_string(),
            ..CacheConfig::default()
        };
        let err = StoreManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("memcached"));
    }

    #[cfg(feature = "memory")]
    #[tokio::test]
    async fn test_memory_provider_delegates() {
        let manager = StoreManager::new(&CacheConfig::default()).await.unwrap();
        manager
            .set("k", "v", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(manager.get("k").await.unwrap(), Some("v".to_string()));
        assert!(manager.health_check().await.unwrap());
    }
}
