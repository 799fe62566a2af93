//! Port for structured extraction logging.
//!
//! Separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port records each interaction in a
//! machine-readable form (JSONL).

use serde_json::Value;

/// A structured extraction event.
pub struct ExtractionEvent {
    /// Event type identifier (e.g. "upload_received", "extraction_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExtractionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging extraction events.
///
/// `log` is synchronous and non-fallible; write failures are ignored so the
/// interaction itself is never disturbed.
pub trait ExtractionLogger: Send + Sync {
    fn log(&self, event: ExtractionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExtractionLogger;

impl ExtractionLogger for NoExtractionLogger {
    fn log(&self, _event: ExtractionEvent) {}
}
