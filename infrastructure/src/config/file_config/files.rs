//! File locations from TOML (`[files]` section)
//!
//! ```toml
//! [files]
//! roster = "people.dat"
//! ledger = "people_old.dat"
//! draw_log = "rossini.draws.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw file location configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocationsConfig {
    /// Roster of participants and tiers
    pub roster: PathBuf,
    /// Ledger of past winners
    pub ledger: PathBuf,
    /// Optional JSONL audit log of completed draws
    pub draw_log: Option<PathBuf>,
}

impl Default for FileLocationsConfig {
    fn default() -> Self {
        Self {
            roster: PathBuf::from("people.dat"),
            ledger: PathBuf::from("people_old.dat"),
            draw_log: None,
        }
    }
}
