//! Console output formatter for draw results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use rossini_application::SelectionOutcome;
use rossini_domain::{History, OutputFormat, WEIGHT_SUM_TOLERANCE};

/// Formats draw results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render an outcome in the requested format
    pub fn render(outcome: &SelectionOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(outcome),
            OutputFormat::Winner => Self::format_winner(outcome),
            OutputFormat::Json => Self::format_json(outcome),
        }
    }

    /// Format the complete draw report
    pub fn format(outcome: &SelectionOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Discussion Leader Draw"));
        output.push('\n');

        // Previous winner
        let previous = match &outcome.previous_winner {
            Some(id) if outcome.excluded > 0 => format!("{} {}", id, "(sits out)".dimmed()),
            Some(id) => format!("{} {}", id, "(in the draw)".dimmed()),
            None => "none".dimmed().to_string(),
        };
        output.push_str(&format!("{} {}\n", "Previous leader:".cyan().bold(), previous));
        output.push_str(&format!(
            "{} {}\n",
            "Ratio:".cyan().bold(),
            outcome.ratio
        ));

        // Tier summary
        output.push_str(&Self::section_header("Tiers"));
        for tier in &outcome.tiers {
            output.push_str(&format!(
                "  tier {:<6} {:>3} x {:.6} = {:.6}\n",
                tier.tier.to_string(),
                tier.count,
                tier.weight,
                tier.mass()
            ));
        }

        // Per-person weights
        output.push_str(&Self::section_header("Weights"));
        let width = outcome
            .participants
            .iter()
            .map(|p| p.id.chars().count())
            .max()
            .unwrap_or(0)
            .max("Participant".len());
        output.push_str(&format!(
            "  {:<width$}  {:<6}  {}\n",
            "Participant".bold(),
            "Tier".bold(),
            "Weight".bold(),
            width = width
        ));
        for participant in &outcome.participants {
            let line = format!(
                "  {:<width$}  {:<6}  {:.6}",
                participant.id,
                participant.tier.to_string(),
                participant.weight,
                width = width
            );
            if participant.id == outcome.winner {
                output.push_str(&format!("{}\n", line.green().bold()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        // Sanity check
        output.push('\n');
        let check = if outcome.normalized {
            "OK".green().bold().to_string()
        } else {
            format!("WARNING: expected 1 within {:e}", WEIGHT_SUM_TOLERANCE)
                .yellow()
                .bold()
                .to_string()
        };
        output.push_str(&format!(
            "{} {:.6}  {}\n",
            "Sum of weights:".cyan().bold(),
            outcome.weight_sum,
            check
        ));

        // Winner
        output.push_str(&format!(
            "\n{} {} (tier {})\n",
            "Next leader:".green().bold(),
            outcome.winner.bold(),
            outcome.tier
        ));
        if !outcome.persisted {
            output.push_str(&format!("{}\n", "Dry run: ledger not updated".yellow()));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &SelectionOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the winner only
    pub fn format_winner(outcome: &SelectionOutcome) -> String {
        outcome.winner.clone()
    }

    /// Render the ledger of past winners in the requested format
    pub fn render_history(history: &History, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_history(history),
            OutputFormat::Winner => history.previous_winner().unwrap_or_default().to_string(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(history).unwrap_or_else(|_| "[]".to_string())
            }
        }
    }

    /// Format the ledger of past winners, oldest first, with a tally per leader
    pub fn format_history(history: &History) -> String {
        if history.is_empty() {
            return format!("{}\n", "No leaders recorded yet".dimmed());
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Past leaders:".cyan().bold(),
            history.len()
        ));
        for (i, record) in history.records().iter().enumerate() {
            output.push_str(&format!(
                "  {:>3}. {} (tier {})\n",
                i + 1,
                record.winner,
                record.tier
            ));
        }

        output.push_str(&Self::section_header("Times led"));
        let mut seen: Vec<&str> = Vec::new();
        for record in history.records() {
            if !seen.contains(&record.winner.as_str()) {
                seen.push(&record.winner);
            }
        }
        for id in seen {
            output.push_str(&format!("  {:<20} {}\n", id, history.wins_of(id)));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &SelectionOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &SelectionOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_winner(&self, outcome: &SelectionOutcome) -> String {
        Self::format_winner(outcome)
    }

    fn format_history(&self, history: &History) -> String {
        Self::format_history(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rossini_application::WeightedParticipant;
    use rossini_domain::{HistoryRecord, Tier, TierWeight};

    fn outcome() -> SelectionOutcome {
        let w2 = 1.0 / 4.5;
        let w1 = 0.75 * w2;
        let participants = vec![
            ("alice", 1, w1),
            ("bob", 1, w1),
            ("carol", 2, w2),
            ("dave", 2, w2),
            ("erin", 2, w2),
        ]
        .into_iter()
        .map(|(id, tier, weight)| WeightedParticipant {
            id: id.to_string(),
            tier: Tier::Rank(tier),
            weight,
        })
        .collect();

        SelectionOutcome {
            winner: "carol".to_string(),
            tier: Tier::Rank(2),
            previous_winner: Some("frank".to_string()),
            excluded: 1,
            ratio: 0.75,
            tiers: vec![
                TierWeight {
                    tier: Tier::Rank(1),
                    count: 2,
                    weight: w1,
                },
                TierWeight {
                    tier: Tier::Rank(2),
                    count: 3,
                    weight: w2,
                },
            ],
            participants,
            weight_sum: 2.0 * w1 + 3.0 * w2,
            normalized: true,
            persisted: true,
        }
    }

    #[test]
    fn test_full_report_lists_everyone() {
        let report = ConsoleFormatter::format(&outcome());
        for id in ["alice", "bob", "carol", "dave", "erin", "frank"] {
            assert!(report.contains(id), "missing {id}");
        }
        assert!(report.contains("Next leader:"));
        assert!(report.contains("OK"));
        assert!(!report.contains("Dry run"));
    }

    #[test]
    fn test_full_report_warns_when_not_normalized() {
        let mut outcome = outcome();
        outcome.weight_sum = 0.9;
        outcome.normalized = false;

        let report = ConsoleFormatter::format(&outcome);
        assert!(report.contains("WARNING"));
        assert!(report.contains("0.900000"));
    }

    #[test]
    fn test_full_report_marks_dry_run() {
        let mut outcome = outcome();
        outcome.persisted = false;

        let report = ConsoleFormatter::format(&outcome);
        assert!(report.contains("Dry run"));
    }

    #[test]
    fn test_format_winner_is_bare_id() {
        assert_eq!(ConsoleFormatter::format_winner(&outcome()), "carol");
        assert_eq!(
            ConsoleFormatter::render(&outcome(), OutputFormat::Winner),
            "carol"
        );
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&outcome());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["winner"], "carol");
        assert_eq!(value["previous_winner"], "frank");
        assert_eq!(value["participants"].as_array().unwrap().len(), 5);
        assert_eq!(value["normalized"], true);
    }

    #[test]
    fn test_format_history() {
        let history: History = [
            HistoryRecord::new("alice", 1),
            HistoryRecord::new("bob", 2),
        ]
        .into_iter()
        .collect();

        let text = ConsoleFormatter::format_history(&history);
        assert!(text.contains("1. alice (tier 1)"));
        assert!(text.contains("2. bob (tier 2)"));
    }

    #[test]
    fn test_format_history_tallies_repeat_leaders() {
        let history: History = [
            HistoryRecord::new("alice", 1),
            HistoryRecord::new("bob", 2),
            HistoryRecord::new("alice", 2),
        ]
        .into_iter()
        .collect();

        let text = ConsoleFormatter::format_history(&history);
        let tally: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.contains("Times led"))
            .skip(2)
            .map(str::trim)
            .collect();
        assert_eq!(tally.len(), 2);
        assert!(tally[0].starts_with("alice") && tally[0].ends_with('2'));
        assert!(tally[1].starts_with("bob") && tally[1].ends_with('1'));
    }

    #[test]
    fn test_render_history_honors_format() {
        let history: History = [
            HistoryRecord::new("alice", 1),
            HistoryRecord::new("bob", 2),
        ]
        .into_iter()
        .collect();

        let json = ConsoleFormatter::render_history(&history, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["winner"], "bob");
        assert_eq!(value[1]["tier"], 2);

        assert_eq!(
            ConsoleFormatter::render_history(&history, OutputFormat::Winner),
            "bob"
        );
        assert_eq!(
            ConsoleFormatter::render_history(&History::default(), OutputFormat::Winner),
            ""
        );
        assert!(
            ConsoleFormatter::render_history(&history, OutputFormat::Full).contains("Past leaders:")
        );
    }

    #[test]
    fn test_format_empty_history() {
        let text = ConsoleFormatter::format_history(&History::default());
        assert!(text.contains("No leaders recorded yet"));
    }
}
