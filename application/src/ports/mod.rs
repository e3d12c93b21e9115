//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod draw_logger;
pub mod history_ledger;
pub mod roster_source;
