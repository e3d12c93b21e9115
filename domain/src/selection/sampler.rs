//! Draws one participant according to a [`WeightVector`].
//!
//! Uses `rand`'s [`WeightedIndex`], which samples a uniform value and inverts
//! the cumulative weight distribution with a binary search. Each index is
//! selected with probability exactly proportional to its weight.

use crate::core::error::ValidationError;
use crate::roster::Partition;
use crate::weighting::WeightVector;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

/// Sample one index from `weights`.
pub fn draw_index<R: Rng + ?Sized>(
    weights: &WeightVector,
    rng: &mut R,
) -> Result<usize, ValidationError> {
    let distribution = WeightedIndex::new(weights.as_slice())
        .map_err(|e| ValidationError::InvalidWeights(e.to_string()))?;
    Ok(distribution.sample(rng))
}

/// Sample one participant of `partition`, returning its position and identifier.
///
/// `weights` must be aligned with the partition order.
pub fn draw_from_partition<'a, R: Rng + ?Sized>(
    partition: &'a Partition,
    weights: &WeightVector,
    rng: &mut R,
) -> Result<(usize, &'a str), ValidationError> {
    if partition.len() != weights.len() {
        return Err(ValidationError::LengthMismatch {
            tiers: weights.len(),
            ids: partition.len(),
        });
    }
    let index = draw_index(weights, rng)?;
    Ok((index, partition.ids[index].as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use crate::weighting::{DecayRatio, WeightCalculator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn five_person_setup() -> (Partition, WeightVector) {
        let roster = Roster::from_pairs([("A", 1), ("B", 1), ("C", 2), ("D", 2), ("E", 2)]);
        let partition = roster.partition().unwrap();
        let weights = WeightCalculator::new(DecayRatio::default())
            .person_weights(&partition.sizes)
            .unwrap();
        (partition, weights)
    }

    #[test]
    fn test_draw_is_reproducible_with_seed() {
        let (partition, weights) = five_person_setup();
        let first: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20)
                .map(|_| draw_from_partition(&partition, &weights, &mut rng).unwrap().1)
                .collect()
        };
        let second: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..20)
                .map(|_| draw_from_partition(&partition, &weights, &mut rng).unwrap().1)
                .collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_empirical_frequencies_match_weights() {
        let (partition, weights) = five_person_setup();
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 200_000;
        let mut counts = vec![0usize; partition.len()];

        for _ in 0..trials {
            counts[draw_index(&weights, &mut rng).unwrap()] += 1;
        }

        for (i, &count) in counts.iter().enumerate() {
            let expected = weights.get(i).unwrap();
            let observed = count as f64 / trials as f64;
            // Five standard errors at p ≈ 0.2 over 200k trials is ≈ 0.0045
            assert!(
                (observed - expected).abs() < 0.005,
                "index {}: observed {} expected {}",
                i,
                observed,
                expected
            );
        }

        // Each tier 1 member carries 0.75 of a tier 2 member's weight
        assert!(counts[2] > counts[0] && counts[4] > counts[1]);
    }

    #[test]
    fn test_single_participant_always_drawn() {
        let roster = Roster::from_pairs([("solo", 3)]);
        let partition = roster.partition().unwrap();
        let weights = WeightCalculator::default()
            .person_weights(&partition.sizes)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(
                draw_from_partition(&partition, &weights, &mut rng).unwrap(),
                (0, "solo")
            );
        }
    }

    #[test]
    fn test_misaligned_weights_rejected() {
        let (partition, _) = five_person_setup();
        let roster = Roster::from_pairs([("A", 1)]);
        let short = WeightCalculator::default()
            .person_weights(&roster.partition().unwrap().sizes)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            draw_from_partition(&partition, &short, &mut rng),
            Err(ValidationError::LengthMismatch { .. })
        ));
    }
}
