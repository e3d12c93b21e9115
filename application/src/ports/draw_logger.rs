//! Port for structured draw logging.
//!
//! Defines the [`DrawLogger`] trait for recording completed draws (winner,
//! weights, exclusion) to a machine-readable audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each draw in
//! full so the distribution behind a result can be inspected later.

use serde_json::Value;

/// A structured draw event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. Adapters add the timestamp.
pub struct DrawEvent {
    /// Event type identifier (e.g., "draw_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DrawEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging draw events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a failing audit log
/// never undoes or fails a draw that has already been persisted.
pub trait DrawLogger {
    /// Record a draw event.
    fn log(&self, event: DrawEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDrawLogger;

impl DrawLogger for NoDrawLogger {
    fn log(&self, _event: DrawEvent) {}
}
