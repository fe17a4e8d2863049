//! Redis store implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use doccache_core::error::{AppError, ErrorKind};
use doccache_core::result::AppResult;
use doccache_core::traits::cache::CacheStore;

use super::client::RedisClient;

/// Redis-backed store. Expiry is delegated to Redis via `SET ... EX`.
#[derive(Debug, Clone)]
pub struct RedisStore {
    client: RedisClient,
}

impl RedisStore {
    /// Create a new Redis store.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Cache, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        // Redis rejects `EX 0`.
        let seconds = ttl.as_secs().max(1);
        let mut conn = self.client.conn_mut();
        let _: () = conn
            .set_ex(key, value, seconds)
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}
