//! Domain error types

use crate::roster::Tier;
use thiserror::Error;

/// Validation failures raised by the weighting core.
///
/// Every variant describes input that the partitioner, the weight
/// calculator or the draw cannot work with. None of them are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("tier and identifier sequences differ in length ({tiers} tiers, {ids} identifiers)")]
    LengthMismatch { tiers: usize, ids: usize },

    #[error("invalid decay ratio {0}: expected 0 < ratio <= 1")]
    InvalidRatio(f64),

    #[error("tier {tier} has no members")]
    EmptyTier { tier: Tier },

    #[error("tier token is blank")]
    BlankTier,

    #[error("weights cannot be sampled: {0}")]
    InvalidWeights(String),
}

impl ValidationError {
    /// Check if this error came from an empty roster
    pub fn is_empty_roster(&self) -> bool {
        matches!(self, ValidationError::EmptyRoster)
    }
}

/// What was wrong with a roster or ledger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Only the identifier column was present
    MissingTier,
    /// More than two columns were present
    ExtraColumns(usize),
}

impl std::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatIssue::MissingTier => write!(f, "missing tier column"),
            FormatIssue::ExtraColumns(n) => write!(f, "expected 2 columns, found {}", n),
        }
    }
}

/// A roster or ledger line that could not be read as `<identifier> <tier>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {issue} in {content:?}")]
pub struct RosterFormatError {
    /// 1-based line number within the source text
    pub line: usize,
    /// The offending line, trimmed
    pub content: String,
    pub issue: FormatIssue,
}

impl RosterFormatError {
    pub fn new(line: usize, content: impl Into<String>, issue: FormatIssue) -> Self {
        Self {
            line,
            content: content.into(),
            issue,
        }
    }
}
