//! Roster domain
//!
//! Participants, their tiers, and the grouping of a roster by tier.
//!
//! ```text
//!   roster (input order)          partition (tier order)
//!   ┌──────┬──────┐               ┌──────┬──────┐   sizes
//!   │ C    │ 2    │               │ A    │ 1    │   ┌──────┬───┐
//!   │ A    │ 1    │   ────────▶   │ B    │ 1    │   │ 1    │ 2 │
//!   │ D    │ 2    │               │ C    │ 2    │   │ 2    │ 3 │
//!   │ B    │ 1    │               │ D    │ 2    │   └──────┴───┘
//!   │ E    │ 2    │               │ E    │ 2    │
//!   └──────┴──────┘               └──────┴──────┘
//! ```

pub mod format;
pub mod participant;
pub mod partition;
pub mod tier;

pub use format::{parse_history, parse_roster};
pub use participant::{Participant, Roster};
pub use partition::{Partition, TierCount, TierPartitioner, TierSizes};
pub use tier::Tier;
