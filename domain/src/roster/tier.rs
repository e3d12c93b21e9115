//! Tier value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A selection priority category (Value Object)
///
/// Rosters may label tiers with integers (`1`, `2`, ...) or with short codes
/// (`A`, `senior`, ...). Both are supported and totally ordered:
///
/// - integer tokens are ranks and compare numerically
/// - any other token is a code and compares lexicographically
/// - every rank orders before every code
///
/// Tiers are weighted in this order, the first tier carrying the smallest
/// individual weight.
///
/// # Example
///
/// ```
/// use rossini_domain::Tier;
///
/// let one: Tier = "1".parse().unwrap();
/// let ten: Tier = "10".parse().unwrap();
/// let code: Tier = "A".parse().unwrap();
///
/// assert!(one < ten); // numeric, not lexicographic
/// assert!(ten < code);
/// assert_eq!(one, "01".parse::<Tier>().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tier {
    /// Integer tier label
    Rank(i64),
    /// Non-numeric tier label
    Code(String),
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Rank(n) => write!(f, "{}", n),
            Tier::Code(code) => write!(f, "{}", code),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ValidationError::BlankTier);
        }
        Ok(match token.parse::<i64>() {
            Ok(n) => Tier::Rank(n),
            Err(_) => Tier::Code(token.to_string()),
        })
    }
}

impl From<i64> for Tier {
    fn from(n: i64) -> Self {
        Tier::Rank(n)
    }
}

impl From<i32> for Tier {
    fn from(n: i32) -> Self {
        Tier::Rank(i64::from(n))
    }
}
