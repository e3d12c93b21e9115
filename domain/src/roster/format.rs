//! Whitespace-separated text formats for rosters and the winner ledger
//!
//! Both formats hold one `<identifier> <tier>` pair per line. A roster starts
//! with a header line that is skipped; the ledger has no header.

use super::participant::{Participant, Roster};
use super::tier::Tier;
use crate::core::error::{FormatIssue, RosterFormatError};
use crate::history::{History, HistoryRecord};

/// Parse roster text (header line first).
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Example
///
/// ```
/// use rossini_domain::roster::format::parse_roster;
///
/// let roster = parse_roster("name tier\nada 1\ngrace 2\n").unwrap();
/// assert_eq!(roster.len(), 2);
/// ```
pub fn parse_roster(text: &str) -> Result<Roster, RosterFormatError> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter_map(|(i, line)| parse_line(i + 1, line).transpose())
        .map(|pair| pair.map(|(id, tier)| Participant::new(id, tier)))
        .collect()
}

/// Parse ledger text (no header).
pub fn parse_history(text: &str) -> Result<History, RosterFormatError> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(i + 1, line).transpose())
        .map(|pair| pair.map(|(id, tier)| HistoryRecord::new(id, tier)))
        .collect()
}

/// Split one line into its identifier and tier; `Ok(None)` for lines to skip.
fn parse_line(line_no: usize, line: &str) -> Result<Option<(&str, Tier)>, RosterFormatError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let columns: Vec<&str> = trimmed.split_whitespace().collect();
    match columns.as_slice() {
        [id, tier] => match tier.parse::<Tier>() {
            Ok(tier) => Ok(Some((*id, tier))),
            Err(_) => Err(RosterFormatError::new(
                line_no,
                trimmed,
                FormatIssue::MissingTier,
            )),
        },
        [_] => Err(RosterFormatError::new(
            line_no,
            trimmed,
            FormatIssue::MissingTier,
        )),
        _ => Err(RosterFormatError::new(
            line_no,
            trimmed,
            FormatIssue::ExtraColumns(columns.len()),
        )),
    }
}
