//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod files;
mod output;
mod selection;

pub use files::FileLocationsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use selection::FileSelectionConfig;

use rossini_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Draw behaviour
    pub selection: FileSelectionConfig,
    /// Roster, ledger and audit log locations
    pub files: FileLocationsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The decay ratio range
    /// 2. Blank roster and ledger paths
    /// 3. Roster and ledger sharing one file
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Ratio
        issues.extend(self.selection.parse_ratio().1);

        // 2. Required paths
        for (field, path) in [
            ("files.roster", &self.files.roster),
            ("files.ledger", &self.files.ledger),
        ] {
            if path.as_os_str().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    format!("{} must not be empty", field),
                ));
            }
        }
        if let Some(draw_log) = &self.files.draw_log
            && draw_log.as_os_str().is_empty()
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyPath {
                    field: "files.draw_log".to_string(),
                },
                "files.draw_log is empty, draw logging disabled",
            ));
        }

        // 3. Appending winners to the roster would corrupt it
        if !self.files.roster.as_os_str().is_empty() && self.files.roster == self.files.ledger {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::SharedPath,
                format!(
                    "files.roster and files.ledger both point to {}",
                    self.files.roster.display()
                ),
            ));
        }

        issues
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.is_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[selection]
ratio = 0.0

[files]
roster = "same.dat"
ledger = "same.dat"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 2);
        assert!(FileConfig::has_errors(&issues));
        assert!(
            issues
                .iter()
                .any(|i| matches!(i.code, ConfigIssueCode::InvalidRatio { .. }))
        );
        assert!(
            issues
                .iter()
                .any(|i| i.code == ConfigIssueCode::SharedPath)
        );
    }

    #[test]
    fn test_validate_empty_paths() {
        let mut config = FileConfig::default();
        config.files.roster = PathBuf::new();
        config.files.draw_log = Some(PathBuf::new());

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].is_error());
        assert!(!issues[1].is_error());
    }
}
