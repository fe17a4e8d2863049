//! Collaborator traits the cache client is generic over.

pub mod cache;
pub mod sink;

pub use cache::CacheStore;
pub use sink::ErrorSink;
