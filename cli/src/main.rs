//! CLI entrypoint for rossini
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rossini_application::{
    ErrorKind, HistoryLedger, SelectLeaderError, SelectLeaderUseCase, SelectionParams,
};
use rossini_domain::{ConfigIssueCode, DecayRatio, OutputFormat, ValidationError};
use rossini_infrastructure::{
    ConfigLoader, FileConfig, FileHistoryLedger, FileRosterSource, JsonlDrawLogger,
};
use rossini_presentation::{Cli, ConsoleFormatter};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: u8 = 1;
const EXIT_VALIDATION: u8 = 2;
const EXIT_FORMAT: u8 = 3;
const EXIT_RESOURCE: u8 = 4;
const EXIT_CONFIG: u8 = 5;

/// Configuration could not be loaded or failed validation
#[derive(Error, Debug)]
#[error("{0}")]
struct ConfigError(String);

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level, RUST_LOG takes precedence
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let ledger = Arc::new(FileHistoryLedger::new(config.files.ledger.clone()));

    if cli.history {
        let history = ledger.records().map_err(SelectLeaderError::History)?;
        println!("{}", ConsoleFormatter::render_history(&history, format).trim_end());
        return Ok(());
    }

    let ratio = match cli.ratio {
        Some(value) => DecayRatio::new(value)?,
        None => config.selection.parse_ratio().0?,
    };
    let params = SelectionParams::default()
        .with_ratio(ratio)
        .with_exclude_previous(config.selection.exclude_previous && !cli.keep_previous)
        .with_dry_run(cli.dry_run);

    let roster = Arc::new(FileRosterSource::new(config.files.roster.clone()));
    let mut use_case = SelectLeaderUseCase::new(roster, ledger);
    if let Some(path) = &config.files.draw_log
        && !path.as_os_str().is_empty()
        && let Some(logger) = JsonlDrawLogger::new(path)
    {
        info!("Logging draws to {}", logger.path().display());
        use_case = use_case.with_logger(Arc::new(logger));
    }

    let mut rng = match cli.seed.or(config.selection.seed) {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let outcome = use_case.execute_with_rng(params, &mut rng)?;

    // Output results
    println!("{}", ConsoleFormatter::render(&outcome, format).trim_end());

    Ok(())
}

/// Load configuration files, apply path overrides from the command line, and
/// validate the result
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            return Err(ConfigError(format!("config file not found: {}", path.display())).into());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| ConfigError(format!("failed to load configuration: {}", e)))?
    };

    if let Some(roster) = &cli.roster {
        config.files.roster = roster.clone();
    }
    if let Some(ledger) = &cli.ledger {
        config.files.ledger = ledger.clone();
    }

    // A ratio given on the command line replaces the configured one
    let issues: Vec<_> = config
        .validate()
        .into_iter()
        .filter(|issue| {
            cli.ratio.is_none() || !matches!(issue.code, ConfigIssueCode::InvalidRatio { .. })
        })
        .collect();

    for issue in &issues {
        if issue.is_error() {
            error!("Config: {}", issue.message);
        } else {
            warn!("Config: {}", issue.message);
        }
    }

    if FileConfig::has_errors(&issues) {
        let messages: Vec<&str> = issues
            .iter()
            .filter(|issue| issue.is_error())
            .map(|issue| issue.message.as_str())
            .collect();
        return Err(ConfigError(format!("invalid configuration: {}", messages.join("; "))).into());
    }

    Ok(config)
}

fn exit_code(error: &anyhow::Error) -> u8 {
    if let Some(e) = error.downcast_ref::<SelectLeaderError>() {
        return match e.kind() {
            ErrorKind::Validation => EXIT_VALIDATION,
            ErrorKind::RosterFormat => EXIT_FORMAT,
            ErrorKind::Resource => EXIT_RESOURCE,
        };
    }
    if error.is::<ValidationError>() {
        EXIT_VALIDATION
    } else if error.is::<ConfigError>() {
        EXIT_CONFIG
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rossini_application::RosterSourceError;

    #[test]
    fn test_exit_code_by_error_kind() {
        let partition = anyhow::Error::from(SelectLeaderError::Partition(
            ValidationError::EmptyRoster,
        ));
        assert_eq!(exit_code(&partition), EXIT_VALIDATION);

        let missing = anyhow::Error::from(SelectLeaderError::Roster(
            RosterSourceError::Unavailable {
                location: "people.dat".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            },
        ));
        assert_eq!(exit_code(&missing), EXIT_RESOURCE);
    }

    #[test]
    fn test_exit_code_for_setup_errors() {
        let ratio = anyhow::Error::from(ValidationError::InvalidRatio(1.5));
        assert_eq!(exit_code(&ratio), EXIT_VALIDATION);

        let config = anyhow::Error::from(ConfigError("bad".to_string()));
        assert_eq!(exit_code(&config), EXIT_CONFIG);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), EXIT_FAILURE);
    }

    #[test]
    fn test_cli_paths_override_config() {
        let cli = Cli::parse_from(["rossini", "--no-config", "team.dat", "leaders.dat"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.files.roster, std::path::PathBuf::from("team.dat"));
        assert_eq!(config.files.ledger, std::path::PathBuf::from("leaders.dat"));
    }

    #[test]
    fn test_shared_roster_and_ledger_is_config_error() {
        let cli = Cli::parse_from(["rossini", "--no-config", "same.dat", "same.dat"]);
        let err = load_config(&cli).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_CONFIG);
    }

    #[test]
    fn test_missing_explicit_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = Cli::parse_from(["rossini", "--config", path.to_str().unwrap()]);
        let err = load_config(&cli).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_CONFIG);
    }
}
