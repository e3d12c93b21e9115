//! Presentation layer for rossini
//!
//! This crate contains the CLI definition and the formatters that
//! render a draw for the terminal or as JSON.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
