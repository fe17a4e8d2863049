//! # doccache-core
//!
//! Core crate for doccache. Contains the collaborator traits the cache
//! client is built against, configuration schemas, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other doccache crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
