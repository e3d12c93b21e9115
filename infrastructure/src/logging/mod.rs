//! Logging infrastructure - structured draw logging.
//!
//! Provides [`JsonlDrawLogger`], a JSONL file writer that implements
//! the [`DrawLogger`](rossini_application::DrawLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlDrawLogger;
