//! Output formatter trait

use rossini_application::SelectionOutcome;
use rossini_domain::History;

/// Trait for formatting draw results
pub trait OutputFormatter {
    /// Format the complete draw report
    fn format(&self, outcome: &SelectionOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &SelectionOutcome) -> String;

    /// Format the winner only (for scripts)
    fn format_winner(&self, outcome: &SelectionOutcome) -> String;

    /// Format the ledger of past winners
    fn format_history(&self, history: &History) -> String;
}
