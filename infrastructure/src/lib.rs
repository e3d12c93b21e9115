//! Infrastructure layer for rossini
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod files;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLocationsConfig, FileOutputConfig, FileOutputFormat,
    FileSelectionConfig,
};
pub use files::{FileHistoryLedger, FileRosterSource};
pub use logging::JsonlDrawLogger;
