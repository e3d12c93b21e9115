//! Roster file adapter
//!
//! Reads a whitespace-separated roster file (header line first) and
//! implements the [`RosterSource`] port.

use rossini_application::{RosterSource, RosterSourceError};
use rossini_domain::{Roster, parse_roster};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Roster read from a text file on the local file system.
#[derive(Debug, Clone)]
pub struct FileRosterSource {
    path: PathBuf,
}

impl FileRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for FileRosterSource {
    fn load(&self) -> Result<Roster, RosterSourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| {
            RosterSourceError::Unavailable {
                location: self.location(),
                source,
            }
        })?;

        let roster = parse_roster(&text).map_err(|source| RosterSourceError::Format {
            location: self.location(),
            source,
        })?;
        debug!(
            "Read {} participants from {}",
            roster.len(),
            self.path.display()
        );
        Ok(roster)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
