//! File system adapters
//!
//! - [`FileRosterSource`] - reads the roster text file
//! - [`FileHistoryLedger`] - reads and appends the winner ledger

mod ledger;
mod roster;

pub use ledger::FileHistoryLedger;
pub use roster::FileRosterSource;
