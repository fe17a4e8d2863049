//! Fail-open cache client.
//!
//! [`CacheClient`] is advisory: a failed write simply means the value is
//! not cached, and a failed read looks exactly like a miss. Every
//! absorbed failure is reported to the configured [`ErrorSink`] under the
//! `"cache"` component tag.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use doccache_core::config::cache::{CacheConfig, DEFAULT_NAMESPACE};
use doccache_core::result::AppResult;
use doccache_core::traits::cache::CacheStore;
use doccache_core::traits::sink::{ErrorSink, TracingErrorSink};

use crate::keys;
use crate::provider::StoreManager;

/// Lifetime of every cache entry: 7 hours.
pub const CACHE_TTL: Duration = Duration::from_secs(7 * 60 * 60);

/// Component tag attached to every absorbed error.
pub const COMPONENT: &str = "cache";

/// Typed, fail-open wrapper over a [`CacheStore`].
#[derive(Debug, Clone)]
pub struct CacheClient {
    store: Arc<dyn CacheStore>,
    sink: Arc<dyn ErrorSink>,
    namespace: String,
}

impl CacheClient {
    /// Create a client over `store` with the default namespace and a
    /// tracing-backed error sink.
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            sink: Arc::new(TracingErrorSink),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Build the configured store and wrap it.
    pub async fn from_config(config: &CacheConfig) -> AppResult<Self> {
        let manager = StoreManager::new(config).await?;
        Ok(Self::new(Arc::new(manager)).with_namespace(config.namespace.clone()))
    }

    /// Replace the key namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Replace the sink absorbed errors are reported to.
    pub fn with_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The physical store key `key` maps to.
    pub fn storage_key(&self, key: &str) -> String {
        keys::storage_key(&self.namespace, key)
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.health_check().await
    }

    /// Cache `value` under `key` for [`CACHE_TTL`].
    ///
    /// Never fails: serialization and store errors are reported to the
    /// sink and otherwise ignored.
    pub async fn write<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized + Sync,
    {
        if let Err(e) = self.try_write(key, value).await {
            self.sink.report(&e, COMPONENT);
        }
    }

    /// Read the value cached under `key`.
    ///
    /// Returns `None` when the key was never written, has expired, or the
    /// store or decoding failed.
    pub async fn read<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match self.try_read(key).await {
            Ok(value) => value,
            Err(e) => {
                self.sink.report(&e, COMPONENT);
                None
            }
        }
    }

    async fn try_write<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + ?Sized + Sync,
    {
        let storage_key = self.storage_key(key);
        let json = serde_json::to_string(value)?;
        debug!(key = %storage_key, bytes = json.len(), "Cache write");
        self.store.set(&storage_key, &json, CACHE_TTL).await
    }

    async fn try_read<T>(&self, key: &str) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let storage_key = self.storage_key(key);
        let raw = self.store.get(&storage_key).await?;
        debug!(key = %storage_key, hit = raw.is_some(), "Cache read");
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
