//! Log sink for failures the cache absorbs.

use tracing::warn;

use crate::error::AppError;

/// Receives errors that are recovered locally instead of propagated.
///
/// `component` tags the subsystem that swallowed the error (the cache
/// client always passes `"cache"`).
pub trait ErrorSink: Send + Sync + std::fmt::Debug + 'static {
    /// Record an absorbed error.
    fn report(&self, error: &AppError, component: &'static str);
}

/// Default sink: a `warn` level tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, error: &AppError, component: &'static str) {
        warn!(component, kind = %error.kind, error = %error, "Cache operation failed");
    }
}
