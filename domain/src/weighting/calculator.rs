//! Tiered, semi-uniform weight calculation
//!
//! Given tier sizes `n[0..T]` (best tier first) and a decay ratio `f`, the
//! weight of one participant in tier `i` is `f^(N-i) / Σ_j f^(N-j)·n[j]`
//! with `N = T - 1`. The first tier gets `f^N`, the last tier `f^0`, so each
//! tier's individual weight is `f` times that of the tier after it. Weights
//! are identical inside a tier and sum to one.

use super::ratio::DecayRatio;
use crate::core::error::ValidationError;
use crate::roster::{Tier, TierSizes};
use serde::Serialize;

/// Allowed deviation of a weight sum from one
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-5;

/// Per-person selection probabilities, aligned with the partition order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector {
    weights: Vec<f64>,
}

impl WeightVector {
    /// Repeat each tier's weight once per member, concatenated in tier order
    pub fn expand(tier_weights: &[TierWeight]) -> Self {
        let weights = tier_weights
            .iter()
            .flat_map(|tw| std::iter::repeat_n(tw.weight, tw.count))
            .collect();
        Self { weights }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.weights.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.weights.iter().copied()
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Whether the weights sum to one within [`WEIGHT_SUM_TOLERANCE`]
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

/// Weight shared by every participant of one tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierWeight {
    pub tier: Tier,
    pub count: usize,
    /// Individual weight of one participant in this tier
    pub weight: f64,
}

impl TierWeight {
    /// Combined probability mass of the whole tier
    pub fn mass(&self) -> f64 {
        self.weight * self.count as f64
    }
}

/// Converts tier sizes into normalized selection weights.
///
/// # Example
///
/// ```
/// use rossini_domain::{DecayRatio, TierCount, TierSizes, WeightCalculator};
///
/// let sizes = TierSizes::from_counts(vec![TierCount::new(1, 2), TierCount::new(2, 3)]);
/// let weights = WeightCalculator::new(DecayRatio::default())
///     .person_weights(&sizes)
///     .unwrap();
///
/// assert_eq!(weights.len(), 5);
/// assert!(weights.is_normalized());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightCalculator {
    ratio: DecayRatio,
}

impl WeightCalculator {
    pub fn new(ratio: DecayRatio) -> Self {
        Self { ratio }
    }

    /// Build a calculator from a raw ratio, validating `0 < f <= 1`
    pub fn with_raw_ratio(f: f64) -> Result<Self, ValidationError> {
        DecayRatio::new(f).map(Self::new)
    }

    pub fn ratio(&self) -> DecayRatio {
        self.ratio
    }

    /// Individual weight for each tier, in tier order.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyRoster`] when there are no tiers,
    /// [`ValidationError::EmptyTier`] when a tier has a zero count, and
    /// [`ValidationError::InvalidWeights`] when a weight underflows to zero
    /// (a tiny ratio over many tiers).
    pub fn tier_weights(&self, sizes: &TierSizes) -> Result<Vec<TierWeight>, ValidationError> {
        if sizes.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        if let Some(empty) = sizes.iter().find(|c| c.count == 0) {
            return Err(ValidationError::EmptyTier {
                tier: empty.tier.clone(),
            });
        }

        let f = self.ratio.value();
        let max_index = sizes.len() - 1;
        let decay = |i: usize| f.powi(exponent(max_index - i));

        let mass: f64 = sizes
            .iter()
            .enumerate()
            .map(|(i, c)| decay(i) * c.count as f64)
            .sum();
        let normalizer = 1.0 / mass;

        let tiers: Vec<TierWeight> = sizes
            .iter()
            .enumerate()
            .map(|(i, c)| TierWeight {
                tier: c.tier.clone(),
                count: c.count,
                weight: decay(i) * normalizer,
            })
            .collect();

        // Every participant must stay selectable
        if let Some(degenerate) = tiers
            .iter()
            .find(|tw| !(tw.weight > 0.0 && tw.weight.is_finite()))
        {
            return Err(ValidationError::InvalidWeights(format!(
                "tier {} weight {} is not positive (ratio {} over {} tiers)",
                degenerate.tier,
                degenerate.weight,
                f,
                sizes.len()
            )));
        }

        Ok(tiers)
    }

    /// Per-person weights: each tier's weight repeated once per member,
    /// concatenated in tier order.
    pub fn person_weights(&self, sizes: &TierSizes) -> Result<WeightVector, ValidationError> {
        Ok(WeightVector::expand(&self.tier_weights(sizes)?))
    }
}

fn exponent(steps: usize) -> i32 {
    i32::try_from(steps).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::TierCount;

    fn sizes(counts: &[usize]) -> TierSizes {
        TierSizes::from_counts(
            counts
                .iter()
                .enumerate()
                .map(|(i, &n)| TierCount::new(i as i64 + 1, n))
                .collect(),
        )
    }

    fn calculator(f: f64) -> WeightCalculator {
        WeightCalculator::with_raw_ratio(f).unwrap()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_weights_sum_to_one() {
        let shapes: [&[usize]; 6] = [&[1], &[4], &[2, 3], &[1, 1, 1], &[5, 1, 7, 2], &[10; 8]];
        for f in [0.1, 0.5, 0.75, 0.99, 1.0] {
            for shape in shapes {
                let weights = calculator(f).person_weights(&sizes(shape)).unwrap();
                assert!(
                    weights.is_normalized(),
                    "f={} sizes={:?} sum={}",
                    f,
                    shape,
                    weights.sum()
                );
                assert_eq!(weights.len(), shape.iter().sum::<usize>());
                assert!(weights.iter().all(|w| w > 0.0));
            }
        }
    }

    #[test]
    fn test_monotonic_across_tiers() {
        let tiers = calculator(0.75).tier_weights(&sizes(&[3, 1, 4, 2])).unwrap();
        for pair in tiers.windows(2) {
            assert!(pair[0].weight < pair[1].weight);
        }
    }

    #[test]
    fn test_adjacent_tiers_differ_by_ratio() {
        let tiers = calculator(0.75).tier_weights(&sizes(&[2, 3, 1])).unwrap();
        assert!(approx_eq(tiers[0].weight, 0.75 * tiers[1].weight));
        assert!(approx_eq(tiers[1].weight, 0.75 * tiers[2].weight));
    }

    #[test]
    fn test_uniform_within_tier() {
        let weights = calculator(0.6).person_weights(&sizes(&[2, 3])).unwrap();
        let w = weights.as_slice();
        assert_eq!(w[0], w[1]);
        assert_eq!(w[2], w[3]);
        assert_eq!(w[3], w[4]);
    }

    #[test]
    fn test_reference_scenario() {
        // Two in tier 1, three in tier 2: w1 = 0.75·w2 and 2·w1 + 3·w2 = 1
        let tiers = calculator(0.75).tier_weights(&sizes(&[2, 3])).unwrap();
        let w2 = 1.0 / (2.0 * 0.75 + 3.0);
        assert!(approx_eq(tiers[0].weight, 0.75 * w2));
        assert!(approx_eq(tiers[1].weight, w2));
        assert!(approx_eq(tiers[0].mass() + tiers[1].mass(), 1.0));
    }

    #[test]
    fn test_single_tier_is_uniform() {
        for f in [0.2, 0.75, 1.0] {
            let weights = calculator(f).person_weights(&sizes(&[4])).unwrap();
            assert!(weights.iter().all(|w| approx_eq(w, 0.25)));
        }
    }

    #[test]
    fn test_ratio_one_is_uniform() {
        let weights = calculator(1.0).person_weights(&sizes(&[1, 2, 3, 4])).unwrap();
        assert!(weights.iter().all(|w| approx_eq(w, 0.1)));
    }

    #[test]
    fn test_zero_count_tier_rejected() {
        let err = calculator(0.75).tier_weights(&sizes(&[2, 0, 1])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyTier {
                tier: Tier::Rank(2)
            }
        );
    }

    #[test]
    fn test_no_tiers_rejected() {
        let err = calculator(0.75)
            .person_weights(&TierSizes::default())
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyRoster);
    }

    #[test]
    fn test_underflowing_weight_rejected() {
        let err = calculator(1e-9).tier_weights(&sizes(&[1; 40])).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidWeights(_)));
    }

    #[test]
    fn test_small_ratio_over_few_tiers_stays_positive() {
        let weights = calculator(1e-9).person_weights(&sizes(&[1; 5])).unwrap();
        assert!(weights.iter().all(|w| w > 0.0));
        assert!(weights.is_normalized());
    }

    #[test]
    fn test_invalid_raw_ratio() {
        assert!(matches!(
            WeightCalculator::with_raw_ratio(0.0),
            Err(ValidationError::InvalidRatio(_))
        ));
        assert!(WeightCalculator::with_raw_ratio(-1.0).is_err());
    }

    #[test]
    fn test_removing_a_member_keeps_tier_ratio() {
        let before = calculator(0.75).tier_weights(&sizes(&[2, 3])).unwrap();
        let after = calculator(0.75).tier_weights(&sizes(&[1, 3])).unwrap();
        let ratio_before = before[1].weight / before[0].weight;
        let ratio_after = after[1].weight / after[0].weight;
        assert!(approx_eq(ratio_before, ratio_after));
    }
}
