//! Roster source port
//!
//! Defines where the participant roster comes from.

use rossini_domain::{Roster, RosterFormatError};
use thiserror::Error;

/// Errors that can occur while loading a roster
#[derive(Error, Debug)]
pub enum RosterSourceError {
    #[error("cannot read roster {location}: {source}")]
    Unavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed roster {location}: {source}")]
    Format {
        location: String,
        #[source]
        source: RosterFormatError,
    },
}

impl RosterSourceError {
    /// Whether the roster could be read but not parsed
    pub fn is_format(&self) -> bool {
        matches!(self, RosterSourceError::Format { .. })
    }
}

/// Source of the participant roster
///
/// A missing or unreadable roster is an error, unlike a missing ledger.
pub trait RosterSource {
    /// Load a fresh roster snapshot
    fn load(&self) -> Result<Roster, RosterSourceError>;

    /// Human-readable location of the roster (e.g. a file path)
    fn location(&self) -> String;
}
