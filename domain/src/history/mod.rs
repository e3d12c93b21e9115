//! Winner history
//!
//! The ledger of past draws. Only the most recent record influences the next
//! draw; older records are kept for audit.

pub mod record;

pub use record::{History, HistoryRecord};
