//! # doccache-cache
//!
//! A fail-open cache client over a pluggable key-value store:
//!
//! - **keys**: SHA-256 key hashing and namespacing
//! - **memory**: in-process store using [moka](https://crates.io/crates/moka)
//! - **redis**: Redis-backed store using the [redis](https://crates.io/crates/redis) crate
//! - **client**: [`CacheClient`], which never surfaces store failures to callers
//!
//! The store is selected at runtime based on configuration.

pub mod client;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use client::{CACHE_TTL, CacheClient};
pub use provider::StoreManager;
