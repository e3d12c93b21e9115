//! Application layer for rossini
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SelectionParams;
pub use ports::{
    draw_logger::{DrawEvent, DrawLogger, NoDrawLogger},
    history_ledger::{HistoryLedger, LedgerError},
    roster_source::{RosterSource, RosterSourceError},
};
pub use use_cases::select_leader::{
    DrawStage, ErrorKind, SelectLeaderError, SelectLeaderUseCase, SelectionOutcome,
    WeightedParticipant,
};
