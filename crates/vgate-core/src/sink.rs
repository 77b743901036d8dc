//! Log sink for selection failures
//!
//! A [`Selector`](crate::Selector) reports rejected candidates through a
//! [`LogSink`] before returning the error. The default sink forwards to
//! `tracing`; tests substitute a capturing sink.

use std::fmt;

/// Receiver for error-severity selection diagnostics
pub trait LogSink: Send + Sync + fmt::Debug {
    /// Record an error-severity message
    fn error(&self, message: &str);
}

/// Sink that forwards messages to `tracing::error!`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
