//! Select Leader use case
//!
//! Orchestrates one draw: load the roster, optionally sit out the previous
//! winner, partition by tier, compute weights, draw, and record the winner.
//!
//! ```text
//! Load ──▶ Partition ──▶ Weights ──▶ Draw ──▶ Persist
//! ```
//!
//! Every stage must succeed before the next runs. The ledger is touched only
//! by the final stage, so a failure anywhere leaves it unchanged.

use crate::config::SelectionParams;
use crate::ports::draw_logger::{DrawEvent, DrawLogger, NoDrawLogger};
use crate::ports::history_ledger::{HistoryLedger, LedgerError};
use crate::ports::roster_source::{RosterSource, RosterSourceError};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rossini_domain::{
    HistoryRecord, Tier, TierWeight, ValidationError, WeightCalculator, WeightVector,
    draw_from_partition,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Pipeline stage of a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStage {
    Load,
    Partition,
    Weights,
    Draw,
    Persist,
}

impl DrawStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStage::Load => "load",
            DrawStage::Partition => "partition",
            DrawStage::Weights => "weight computation",
            DrawStage::Draw => "draw",
            DrawStage::Persist => "persist",
        }
    }
}

impl std::fmt::Display for DrawStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Broad category of a failed draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad ratio, empty roster, misaligned input, empty tier
    Validation,
    /// Roster or ledger text could not be parsed
    RosterFormat,
    /// Roster or ledger could not be read or written
    Resource,
}

/// Errors that can occur while selecting a leader
///
/// The message always starts with the failing stage.
#[derive(Error, Debug)]
pub enum SelectLeaderError {
    #[error("load failed: {0}")]
    Roster(#[source] RosterSourceError),

    #[error("load failed: {0}")]
    History(#[source] LedgerError),

    #[error("partition failed: {0}")]
    Partition(#[source] ValidationError),

    #[error("weight computation failed: {0}")]
    Weights(#[source] ValidationError),

    #[error("draw failed: {0}")]
    Draw(#[source] ValidationError),

    #[error("persist failed: {0}")]
    Persist(#[source] LedgerError),
}

impl SelectLeaderError {
    /// Stage at which the draw stopped
    pub fn stage(&self) -> DrawStage {
        match self {
            SelectLeaderError::Roster(_) | SelectLeaderError::History(_) => DrawStage::Load,
            SelectLeaderError::Partition(_) => DrawStage::Partition,
            SelectLeaderError::Weights(_) => DrawStage::Weights,
            SelectLeaderError::Draw(_) => DrawStage::Draw,
            SelectLeaderError::Persist(_) => DrawStage::Persist,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SelectLeaderError::Roster(e) if e.is_format() => ErrorKind::RosterFormat,
            SelectLeaderError::History(e) | SelectLeaderError::Persist(e) if e.is_format() => {
                ErrorKind::RosterFormat
            }
            SelectLeaderError::Roster(_)
            | SelectLeaderError::History(_)
            | SelectLeaderError::Persist(_) => ErrorKind::Resource,
            SelectLeaderError::Partition(_)
            | SelectLeaderError::Weights(_)
            | SelectLeaderError::Draw(_) => ErrorKind::Validation,
        }
    }
}

/// One participant of the final distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedParticipant {
    pub id: String,
    pub tier: Tier,
    pub weight: f64,
}

/// Result of a successful draw
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOutcome {
    pub winner: String,
    /// Tier of the winner, looked up by first occurrence in the roster
    pub tier: Tier,
    /// Last winner recorded in the ledger before this draw
    pub previous_winner: Option<String>,
    /// Roster entries removed because they belonged to the previous winner
    pub excluded: usize,
    pub ratio: f64,
    /// Per-tier weights, best tier first
    pub tiers: Vec<TierWeight>,
    /// Participants in tier order with their individual weights
    pub participants: Vec<WeightedParticipant>,
    pub weight_sum: f64,
    /// Whether `weight_sum` is within tolerance of one
    pub normalized: bool,
    /// Whether the winner was appended to the ledger
    pub persisted: bool,
}

/// Use case for selecting the next discussion leader
pub struct SelectLeaderUseCase<S: RosterSource, L: HistoryLedger> {
    roster: Arc<S>,
    ledger: Arc<L>,
    logger: Arc<dyn DrawLogger>,
}

impl<S: RosterSource, L: HistoryLedger> SelectLeaderUseCase<S, L> {
    pub fn new(roster: Arc<S>, ledger: Arc<L>) -> Self {
        Self {
            roster,
            ledger,
            logger: Arc::new(NoDrawLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn DrawLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with an entropy-seeded RNG
    pub fn execute(&self, params: SelectionParams) -> Result<SelectionOutcome, SelectLeaderError> {
        self.execute_with_rng(params, &mut StdRng::from_entropy())
    }

    /// Execute the use case with the given RNG
    pub fn execute_with_rng<R: Rng + ?Sized>(
        &self,
        params: SelectionParams,
        rng: &mut R,
    ) -> Result<SelectionOutcome, SelectLeaderError> {
        // Stage 1: Load
        info!("Loading roster from {}", self.roster.location());
        let mut roster = self.roster.load().map_err(SelectLeaderError::Roster)?;
        for id in roster.duplicate_ids() {
            warn!("Roster lists {} more than once", id);
        }

        let previous_winner = self
            .ledger
            .previous_winner()
            .map_err(SelectLeaderError::History)?;
        debug!("Previous winner: {:?}", previous_winner);

        let excluded = match (&previous_winner, params.exclude_previous) {
            (Some(previous), true) => {
                let removed = roster.remove_all(previous);
                if removed == 0 {
                    debug!("Previous winner {} is not on the roster", previous);
                } else {
                    info!("Excluding previous winner {} ({} entries)", previous, removed);
                }
                removed
            }
            _ => 0,
        };

        // Stage 2: Partition
        let partition = roster.partition().map_err(|e| {
            if e.is_empty_roster() && excluded > 0 {
                warn!("No participants remain after excluding the previous winner");
            }
            SelectLeaderError::Partition(e)
        })?;
        debug!("Tier sizes: {:?}", partition.sizes);

        // Stage 3: Weights
        let calculator = WeightCalculator::new(params.ratio);
        let tiers = calculator
            .tier_weights(&partition.sizes)
            .map_err(SelectLeaderError::Weights)?;
        let weights = WeightVector::expand(&tiers);
        let weight_sum = weights.sum();
        let normalized = weights.is_normalized();
        if normalized {
            debug!("Weights sum to {}", weight_sum);
        } else {
            warn!("Weights sum to {}, outside tolerance of 1", weight_sum);
        }

        // Stage 4: Draw
        let (index, winner) =
            draw_from_partition(&partition, &weights, rng).map_err(SelectLeaderError::Draw)?;
        let tier = roster
            .tier_of(winner)
            .cloned()
            .unwrap_or_else(|| partition.tiers[index].clone());
        info!("Drew {} (tier {})", winner, tier);

        let participants: Vec<WeightedParticipant> = partition
            .ids
            .iter()
            .zip(&partition.tiers)
            .zip(weights.iter())
            .map(|((id, tier), weight)| WeightedParticipant {
                id: id.clone(),
                tier: tier.clone(),
                weight,
            })
            .collect();

        let mut outcome = SelectionOutcome {
            winner: winner.to_string(),
            tier,
            previous_winner,
            excluded,
            ratio: params.ratio.value(),
            tiers,
            participants,
            weight_sum,
            normalized,
            persisted: false,
        };

        // Stage 5: Persist
        if params.dry_run {
            info!("Dry run: ledger {} left unchanged", self.ledger.location());
            return Ok(outcome);
        }

        let record = HistoryRecord::new(outcome.winner.clone(), outcome.tier.clone());
        self.ledger
            .append(&record)
            .map_err(SelectLeaderError::Persist)?;
        outcome.persisted = true;
        info!("Recorded {} in {}", record.to_line(), self.ledger.location());

        self.logger.log(DrawEvent::new(
            "draw_completed",
            serde_json::json!({
                "winner": outcome.winner,
                "tier": outcome.tier,
                "previous_winner": outcome.previous_winner,
                "excluded": outcome.excluded,
                "ratio": outcome.ratio,
                "tiers": outcome.tiers,
                "weight_sum": outcome.weight_sum,
            }),
        ));

        Ok(outcome)
    }
}
