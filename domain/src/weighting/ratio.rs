//! Decay ratio value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Default ratio between the individual weights of adjacent tiers
pub const DEFAULT_DECAY_RATIO: f64 = 0.75;

/// Ratio of one tier's individual weight to that of the tier after it
///
/// Must satisfy `0 < f <= 1`. Smaller values separate the tiers more
/// strongly; `1.0` makes every participant equally likely.
///
/// # Example
///
/// ```
/// use rossini_domain::DecayRatio;
///
/// assert!(DecayRatio::new(0.5).is_ok());
/// assert!(DecayRatio::new(0.0).is_err());
/// assert_eq!(DecayRatio::default().value(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DecayRatio(f64);

impl DecayRatio {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidRatio(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this ratio collapses every tier to the same weight
    pub fn is_uniform(&self) -> bool {
        self.0 == 1.0
    }
}

impl Default for DecayRatio {
    fn default() -> Self {
        Self(DEFAULT_DECAY_RATIO)
    }
}

impl TryFrom<f64> for DecayRatio {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DecayRatio> for f64 {
    fn from(ratio: DecayRatio) -> Self {
        ratio.0
    }
}

impl std::fmt::Display for DecayRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
