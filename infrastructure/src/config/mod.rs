//! Configuration file loading for rossini
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ROSSINI_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./rossini.toml` or `./.rossini.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/rossini/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLocationsConfig, FileOutputConfig, FileOutputFormat, FileSelectionConfig,
};
pub use loader::ConfigLoader;
