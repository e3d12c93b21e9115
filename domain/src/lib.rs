//! Domain layer for rossini
//!
//! This crate contains the core selection logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tiered, semi-uniform selection
//!
//! Participants are grouped into ordered tiers. Every participant can be
//! selected, and the individual weight of a tier is a fixed [`DecayRatio`]
//! times that of the tier after it, so the last tier is the most likely:
//!
//! - **TierPartitioner**: groups a roster by tier and counts tier sizes
//! - **WeightCalculator**: turns tier sizes into per-person weights summing to one
//! - **Sampler**: performs the weighted categorical draw
//!
//! ## History
//!
//! The [`History`] of past winners lets the most recent winner sit out the
//! next draw.

pub mod config;
pub mod core;
pub mod history;
pub mod roster;
pub mod selection;
pub mod weighting;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::{FormatIssue, RosterFormatError, ValidationError};
pub use history::{History, HistoryRecord};
pub use roster::{
    Participant, Partition, Roster, Tier, TierCount, TierPartitioner, TierSizes, parse_history,
    parse_roster,
};
pub use selection::{draw_from_partition, draw_index};
pub use weighting::{
    DEFAULT_DECAY_RATIO, DecayRatio, TierWeight, WEIGHT_SUM_TOLERANCE, WeightCalculator,
    WeightVector,
};
