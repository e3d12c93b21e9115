//! History ledger port
//!
//! Defines the append-only store of past winners.

use rossini_domain::{History, HistoryRecord, RosterFormatError};
use thiserror::Error;

/// Errors that can occur while reading or appending the ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("cannot access ledger {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ledger {location}: {source}")]
    Format {
        location: String,
        #[source]
        source: RosterFormatError,
    },
}

impl LedgerError {
    /// Whether the ledger could be read but not parsed
    pub fn is_format(&self) -> bool {
        matches!(self, LedgerError::Format { .. })
    }
}

/// Append-only record of past winners
///
/// An absent store means "no history yet" and is not an error. Reads have no
/// side effects. No locking is performed: concurrent writers racing on the
/// same store are unsupported.
pub trait HistoryLedger {
    /// All records, oldest first
    fn records(&self) -> Result<History, LedgerError>;

    /// Identifier of the most recently appended winner, if any
    fn previous_winner(&self) -> Result<Option<String>, LedgerError> {
        Ok(self.records()?.previous_winner().map(str::to_string))
    }

    /// Append one record as the new last entry, creating the store if absent
    fn append(&self, record: &HistoryRecord) -> Result<(), LedgerError>;

    /// Human-readable location of the ledger (e.g. a file path)
    fn location(&self) -> String;
}
