//! Participant and Roster entities

use super::partition::{Partition, TierPartitioner};
use super::tier::Tier;
use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A person who may be selected, together with their tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub tier: Tier,
}

impl Participant {
    pub fn new(id: impl Into<String>, tier: impl Into<Tier>) -> Self {
        Self {
            id: id.into(),
            tier: tier.into(),
        }
    }
}

/// Ordered collection of participants as read from the roster source
///
/// Input order is preserved. Identifiers are expected to be unique, but
/// duplicates are kept: [`Roster::tier_of`] answers with the first match and
/// [`Roster::remove_all`] drops every match.
///
/// # Example
///
/// ```
/// use rossini_domain::{Participant, Roster};
///
/// let mut roster = Roster::new(vec![
///     Participant::new("ada", 1),
///     Participant::new("grace", 2),
/// ]);
/// assert_eq!(roster.remove_all("ada"), 1);
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    /// Build a roster from `(identifier, tier)` pairs
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<Tier>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, tier)| Participant::new(id, tier))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Identifiers in input order
    pub fn ids(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.id.clone()).collect()
    }

    /// Tiers in input order, index-aligned with [`Roster::ids`]
    pub fn tiers(&self) -> Vec<Tier> {
        self.participants.iter().map(|p| p.tier.clone()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.participants.iter().any(|p| p.id == id)
    }

    /// Tier of the first entry carrying `id`, in input order
    pub fn tier_of(&self, id: &str) -> Option<&Tier> {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map(|p| &p.tier)
    }

    /// Remove every entry carrying `id`, returning how many were removed
    pub fn remove_all(&mut self, id: &str) -> usize {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != id);
        before - self.participants.len()
    }

    /// Identifiers that occur more than once, in order of first occurrence
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (i, p) in self.participants.iter().enumerate() {
            let seen_before = self.participants[..i].iter().any(|q| q.id == p.id);
            if seen_before && !duplicates.contains(&p.id.as_str()) {
                duplicates.push(&p.id);
            }
        }
        duplicates
    }

    /// Group the roster by tier
    pub fn partition(&self) -> Result<Partition, ValidationError> {
        TierPartitioner::partition(&self.tiers(), &self.ids())
    }
}

impl FromIterator<Participant> for Roster {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::from_pairs([("A", 1), ("B", 1), ("C", 2), ("D", 2), ("E", 2)])
    }

    #[test]
    fn test_tier_of_uses_first_match() {
        let roster = Roster::from_pairs([("A", 2), ("B", 1), ("A", 1)]);
        assert_eq!(roster.tier_of("A"), Some(&Tier::Rank(2)));
        assert_eq!(roster.tier_of("Z"), None);
    }

    #[test]
    fn test_remove_all_removes_every_match() {
        let mut roster = Roster::from_pairs([("A", 1), ("B", 1), ("A", 2)]);
        assert_eq!(roster.remove_all("A"), 2);
        assert_eq!(roster.ids(), vec!["B"]);
        assert!(!roster.contains("A"));
    }

    #[test]
    fn test_remove_all_absent_is_noop() {
        let mut roster = sample_roster();
        assert_eq!(roster.remove_all("Z"), 0);
        assert_eq!(roster.len(), 5);
    }

    #[test]
    fn test_duplicate_ids() {
        let roster = Roster::from_pairs([("A", 1), ("B", 1), ("A", 2), ("B", 3), ("A", 3)]);
        assert_eq!(roster.duplicate_ids(), vec!["A", "B"]);
        assert!(sample_roster().duplicate_ids().is_empty());
    }

    #[test]
    fn test_ids_and_tiers_aligned() {
        let roster = sample_roster();
        assert_eq!(roster.ids(), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(
            roster.tiers(),
            vec![
                Tier::Rank(1),
                Tier::Rank(1),
                Tier::Rank(2),
                Tier::Rank(2),
                Tier::Rank(2)
            ]
        );
    }
}
