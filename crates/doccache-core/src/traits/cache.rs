//! Backing store trait for the doccache client.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// A remote (or in-process) key-value store holding serialized entries.
///
/// Keys arrive already namespaced and hashed; values are JSON strings.
/// Expiry is owned by the store: an entry written with `ttl` must stop
/// being returned by [`get`](CacheStore::get) once `ttl` has elapsed.
#[async_trait]
pub trait CacheStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist or has expired.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value that expires `ttl` after the write.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
