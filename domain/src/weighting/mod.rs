//! Selection weighting
//!
//! Converts tier sizes into a per-person probability distribution graded
//! geometrically across tiers while keeping every participant selectable.

pub mod calculator;
pub mod ratio;

pub use calculator::{TierWeight, WEIGHT_SUM_TOLERANCE, WeightCalculator, WeightVector};
pub use ratio::{DEFAULT_DECAY_RATIO, DecayRatio};
