//! CLI command definitions

use clap::{Parser, ValueEnum};
use rossini_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for the draw report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Weight table, sanity check and winner
    Full,
    /// Only the winner identifier
    Winner,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Winner => DomainOutputFormat::Winner,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for rossini
#[derive(Parser, Debug)]
#[command(name = "rossini")]
#[command(author, version, about = "Pick the next discussion leader with tiered, semi-uniform odds")]
#[command(long_about = r#"
Rossini draws the next discussion leader from a roster of participants.

Each participant belongs to a tier. Everyone can be picked, but a
participant is only --ratio times as likely as one in the tier after it,
so the last tier is the most likely. The previous leader sits out the draw
unless --keep-previous is given, and the winner is appended to the ledger.

Roster format (first line is a header and is skipped):
  name tier
  alice 1
  bob 2

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./rossini.toml           Project-level config
3. ~/.config/rossini/config.toml   Global config
ROSSINI_* environment variables override files, flags override everything.

Example:
  rossini people.dat people_old.dat
  rossini --ratio 0.5 --dry-run -o json
  rossini --history
"#)]
pub struct Cli {
    /// Roster file (default: people.dat)
    pub roster: Option<PathBuf>,

    /// Ledger of past winners (default: people_old.dat)
    pub ledger: Option<PathBuf>,

    /// Ratio between individual weights of adjacent tiers (0 < ratio <= 1)
    #[arg(short, long, value_name = "RATIO")]
    pub ratio: Option<f64>,

    /// Let the previous winner take part in the draw
    #[arg(long)]
    pub keep_previous: bool,

    /// Seed the random number generator for a reproducible draw
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Draw without appending the winner to the ledger
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the ledger of past winners in the chosen output format and exit
    #[arg(long)]
    pub history: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
