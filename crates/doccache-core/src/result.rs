//! Convenience result type alias for doccache.

use crate::error::AppError;

/// A specialized `Result` type for doccache operations.
///
/// Every store call returns this; only the public cache client collapses
/// the error arm.
pub type AppResult<T> = Result<T, AppError>;
