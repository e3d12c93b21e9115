//! History records

use crate::roster::Tier;
use serde::{Deserialize, Serialize};

/// One past draw: who won and the tier they were in at the time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub winner: String,
    pub tier: Tier,
}

impl HistoryRecord {
    pub fn new(winner: impl Into<String>, tier: impl Into<Tier>) -> Self {
        Self {
            winner: winner.into(),
            tier: tier.into(),
        }
    }

    /// Render as a ledger line, without the trailing newline
    pub fn to_line(&self) -> String {
        format!("{} {}", self.winner, self.tier)
    }
}

/// Append-only sequence of past draws, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    /// Identifier of the most recent winner
    pub fn previous_winner(&self) -> Option<&str> {
        self.last().map(|r| r.winner.as_str())
    }

    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// How many times `id` has won
    pub fn wins_of(&self, id: &str) -> usize {
        self.records.iter().filter(|r| r.winner == id).count()
    }
}

impl FromIterator<HistoryRecord> for History {
    fn from_iter<I: IntoIterator<Item = HistoryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
