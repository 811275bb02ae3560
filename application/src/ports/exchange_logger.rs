//! Port for structured exchange logging.
//!
//! Defines the [`ExchangeLogger`] trait for recording each model exchange
//! (prompt sent, completion received or failed, structure decoded) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! prompt/completion transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured exchange event for logging.
pub struct ExchangeEvent {
    /// Event type identifier (e.g., "prompt_sent", "completion_received").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExchangeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging exchange events to a structured log.
///
/// The `log` method is synchronous and non-fallible: logging failures must
/// not disturb the pipelines.
pub trait ExchangeLogger: Send + Sync {
    /// Record an exchange event.
    fn log(&self, event: ExchangeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExchangeLogger;

impl ExchangeLogger for NoExchangeLogger {
    fn log(&self, _event: ExchangeEvent) {}
}
