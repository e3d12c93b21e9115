//! Tier partitioning
//!
//! Groups participants contiguously by tier (ascending) and counts how many
//! participants each tier holds. The resulting ordering is the one the
//! per-person weights are aligned with.

use super::tier::Tier;
use crate::core::error::ValidationError;
use serde::Serialize;

/// Number of participants in one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub tier: Tier,
    pub count: usize,
}

impl TierCount {
    pub fn new(tier: impl Into<Tier>, count: usize) -> Self {
        Self {
            tier: tier.into(),
            count,
        }
    }
}

/// Tier sizes ordered best tier first
///
/// Produced by [`TierPartitioner`], which never emits a zero count. Sizes
/// built by hand through [`TierSizes::from_counts`] are checked later by the
/// weight calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TierSizes {
    counts: Vec<TierCount>,
}

impl TierSizes {
    pub fn from_counts(counts: Vec<TierCount>) -> Self {
        Self { counts }
    }

    /// Number of distinct tiers
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of participants across all tiers
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierCount> {
        self.counts.iter()
    }

    pub fn count_of(&self, tier: &Tier) -> Option<usize> {
        self.counts.iter().find(|c| &c.tier == tier).map(|c| c.count)
    }
}

/// A roster regrouped by tier
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Per-tier counts, ascending by tier
    pub sizes: TierSizes,
    /// Tiers of the regrouped participants
    pub tiers: Vec<Tier>,
    /// Identifiers of the regrouped participants, index-aligned with `tiers`
    pub ids: Vec<String>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Groups parallel tier/identifier sequences by tier.
pub struct TierPartitioner;

impl TierPartitioner {
    /// Partition `ids` by `tiers`.
    ///
    /// The two slices must be index-aligned. The reordering is a stable sort
    /// on the tier, so participants sharing a tier keep their input order,
    /// although callers should not rely on that.
    ///
    /// # Errors
    ///
    /// [`ValidationError::LengthMismatch`] if the slices differ in length,
    /// [`ValidationError::EmptyRoster`] if they are empty.
    pub fn partition(tiers: &[Tier], ids: &[String]) -> Result<Partition, ValidationError> {
        if tiers.len() != ids.len() {
            return Err(ValidationError::LengthMismatch {
                tiers: tiers.len(),
                ids: ids.len(),
            });
        }
        if ids.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }

        let mut pairs: Vec<(&Tier, &String)> = tiers.iter().zip(ids.iter()).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let mut counts: Vec<TierCount> = Vec::new();
        for (tier, _) in &pairs {
            match counts.last_mut() {
                Some(last) if &last.tier == *tier => last.count += 1,
                _ => counts.push(TierCount::new((*tier).clone(), 1)),
            }
        }

        let (tiers, ids) = pairs
            .into_iter()
            .map(|(tier, id)| (tier.clone(), id.clone()))
            .unzip();

        Ok(Partition {
            sizes: TierSizes::from_counts(counts),
            tiers,
            ids,
        })
    }
}
