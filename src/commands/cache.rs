//! Cache inspection commands.

use doccache_cache::{CACHE_TTL, CacheClient, keys};
use doccache_core::config::AppConfig;
use doccache_core::error::AppError;

/// Print the digest and namespaced store key for `key`.
pub fn hash(key: &str, namespace: &str) {
    println!("{}", describe_key(key, namespace));
}

/// Render the digest and store key lines printed by `hash`.
fn describe_key(key: &str, namespace: &str) -> String {
    format!(
        "digest: {}\nstore key: {}",
        keys::hash_key(key),
        keys::storage_key(namespace, key)
    )
}

/// Build a client over a store that outlives this process.
///
/// The in-memory store starts empty on every run, so `get` and `set`
/// against it could never observe each other.
async fn shared_client(config: &AppConfig) -> Result<CacheClient, AppError> {
    if config.cache.provider == "memory" {
        return Err(AppError::configuration(
            "The in-memory cache store does not persist between CLI runs; set cache.provider = \"redis\"",
        ));
    }
    CacheClient::from_config(&config.cache).await
}

/// Read `key` through the fail-open client.
pub async fn get(key: &str, config: &AppConfig) -> Result<(), AppError> {
    let client = shared_client(config).await?;

    match client.read::<serde_json::Value>(key).await {
        Some(value) => {
            let json = serde_json::to_string_pretty(&value)?;
            println!("{}", json);
        }
        None => println!("⚠ No cached value for '{}'", key),
    }

    Ok(())
}

/// Write a JSON value under `key`.
///
/// The value is parsed up front so malformed input is reported to the
/// operator instead of being absorbed by the client.
pub async fn set(key: &str, raw: &str, config: &AppConfig) -> Result<(), AppError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let client = shared_client(config).await?;

    client.write(key, &value).await;

    println!(
        "✓ Write issued for '{}' (expires in {}s)",
        client.storage_key(key),
        CACHE_TTL.as_secs()
    );
    Ok(())
}

/// Ping the configured store.
pub async fn health(config: &AppConfig) -> Result<(), AppError> {
    let client = CacheClient::from_config(&config.cache).await?;

    if client.health_check().await? {
        println!("✓ Cache store '{}' is healthy", config.cache.provider);
        Ok(())
    } else {
        Err(AppError::cache(format!(
            "Cache store '{}' did not respond to health check",
            config.cache.provider
        )))
    }
}
