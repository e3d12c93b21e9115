//! Selection parameters - draw behaviour.
//!
//! [`SelectionParams`] is passed explicitly into
//! [`SelectLeaderUseCase`](crate::use_cases::select_leader::SelectLeaderUseCase)
//! so that no process-wide defaults leak into a draw.

use rossini_domain::DecayRatio;
use serde::{Deserialize, Serialize};

/// Parameters controlling one draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionParams {
    /// Ratio between individual weights of adjacent tiers.
    pub ratio: DecayRatio,
    /// Remove the most recent winner from the roster before drawing.
    pub exclude_previous: bool,
    /// Draw without recording the winner in the ledger.
    pub dry_run: bool,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            ratio: DecayRatio::default(),
            exclude_previous: true,
            dry_run: false,
        }
    }
}

impl SelectionParams {
    // ==================== Builder Methods ====================

    pub fn with_ratio(mut self, ratio: DecayRatio) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_exclude_previous(mut self, exclude: bool) -> Self {
        self.exclude_previous = exclude;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
