//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for selection results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Banner, weight table, sanity check and winner (default)
    #[default]
    Full,
    /// Only the winner identifier
    Winner,
    /// JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "winner" => Ok(OutputFormat::Winner),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Valid: full, winner, json",
                s
            )),
        }
    }
}
