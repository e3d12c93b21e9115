//! Selection configuration from TOML (`[selection]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [selection]
//! ratio = 0.75             # 0 < ratio <= 1, smaller separates tiers more
//! exclude_previous = true  # the last leader sits out the next draw
//! seed = 42                # optional, for reproducible draws
//! ```

use rossini_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_DECAY_RATIO, DecayRatio, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Raw selection configuration
///
/// The ratio is kept as a plain float so that an out-of-range value is
/// reported by [`FileConfig::validate`](super::FileConfig::validate) instead
/// of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionConfig {
    /// Ratio between individual weights of adjacent tiers
    pub ratio: f64,
    /// Remove the previous winner before drawing
    pub exclude_previous: bool,
    /// Seed for the random number generator
    pub seed: Option<u64>,
}

impl Default for FileSelectionConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_DECAY_RATIO,
            exclude_previous: true,
            seed: None,
        }
    }
}

impl FileSelectionConfig {
    /// Parse the ratio into a validated [`DecayRatio`]
    pub fn parse_ratio(&self) -> (Result<DecayRatio, ValidationError>, Vec<ConfigIssue>) {
        match DecayRatio::new(self.ratio) {
            Ok(ratio) => (Ok(ratio), Vec::new()),
            Err(e) => {
                let issue = ConfigIssue::error(
                    ConfigIssueCode::InvalidRatio { value: self.ratio },
                    format!(
                        "selection.ratio must satisfy 0 < ratio <= 1 (got {})",
                        self.ratio
                    ),
                );
                (Err(e), vec![issue])
            }
        }
    }
}
