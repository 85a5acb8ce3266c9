//! # Range Analyzer
//!
//! Enforces the range contract and derives statistics from a validated range.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O and no shared state. Every call works only on its
//!   input, so one `RangeAnalyzer` can be cloned into any number of request
//!   handlers without locking.
//! - **Validate First:** `action_totals` and `vpip` trust their input. Callers
//!   run `validate` (or use `stats`, which does it for them) beforehand.
//!
//! ## Public API
//!
//! - `RangeAnalyzer`: validation, action totals, VPIP, normalisation.
//! - `ActionTotals` / `RangeStats`: the statistics it produces.
//! - `ContractViolation`: the rule a rejected payload broke.

use crate::error::ContractViolation;
use configuration::AnalysisConfig;
use core_types::{ActionType, HandAction, HandLabel, RangeContract};
use std::collections::HashSet;

pub mod error;
pub mod normalize;
pub mod stats;

pub use stats::{ActionTotals, RangeStats};

/// Absolute slack allowed when checking that a hand's weights sum to 100.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.0001;

/// The total every hand's weights must add up to.
pub const FULL_WEIGHT: f64 = 100.0;

/// Validates range contracts and computes their statistics.
#[derive(Debug, Clone, Default)]
pub struct RangeAnalyzer {
    config: AnalysisConfig,
}

impl RangeAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Checks every contract rule and returns the first violation found.
    ///
    /// Field-level rules (non-blank name and labels, weights within `[0, 100]`)
    /// are checked across all hands before any per-hand rule, so a weight of 150
    /// is reported as out of range rather than as a bad sum. Hands are visited
    /// in label order.
    pub fn validate(&self, range: &RangeContract) -> Result<(), ContractViolation> {
        if range.name.trim().is_empty() {
            return Err(ContractViolation::MissingRequiredField {
                field: "name".to_string(),
            });
        }

        for (hand, actions) in &range.hands {
            self.check_fields(hand, actions)?;
        }
        for (hand, actions) in &range.hands {
            check_hand(hand, actions)?;
        }
        Ok(())
    }

    fn check_fields(&self, hand: &str, actions: &[HandAction]) -> Result<(), ContractViolation> {
        if hand.trim().is_empty() {
            return Err(ContractViolation::MissingRequiredField {
                field: "hand label".to_string(),
            });
        }
        if self.config.strict_hand_labels && !HandLabel::is_canonical(hand) {
            return Err(ContractViolation::InvalidHandLabel {
                hand: hand.to_string(),
            });
        }
        for entry in actions {
            if let Some(weight) = entry.weight {
                // NaN fails `contains` as well.
                if !(0.0..=FULL_WEIGHT).contains(&weight) {
                    return Err(ContractViolation::WeightOutOfRange {
                        hand: hand.to_string(),
                        action: entry.action,
                        weight,
                    });
                }
            }
        }
        Ok(())
    }

    /// Averages each action's weight over every hand in the range.
    ///
    /// A hand played 100% FOLD adds 100 to FOLD's accumulator and nothing
    /// elsewhere; the accumulators are then divided by the hand count. An empty
    /// range yields all zeros.
    pub fn action_totals(&self, range: &RangeContract) -> ActionTotals {
        let mut totals = ActionTotals::zeroed();
        if range.is_empty() {
            return totals;
        }

        for entry in range.hands.values().flatten() {
            totals.add(entry.action, entry.weight());
        }
        totals.scale_down(range.hand_count() as f64);
        totals
    }

    /// Sum of every non-FOLD average: any action other than folding counts as
    /// voluntarily putting money in the pot.
    pub fn vpip(&self, totals: &ActionTotals) -> f64 {
        totals
            .iter()
            .filter(|(action, _)| action.is_voluntary())
            .map(|(_, weight)| weight)
            .sum()
    }

    /// Validates the range, then computes its per-action averages and VPIP.
    pub fn stats(&self, range: &RangeContract) -> Result<RangeStats, ContractViolation> {
        self.validate(range)?;
        let by_action = self.action_totals(range);
        let vpip = self.vpip(&by_action);
        tracing::debug!(range = %range.name, hands = range.hand_count(), vpip, "Computed range stats.");
        Ok(RangeStats { vpip, by_action })
    }

    /// VPIP of a single hand: the total weight of its non-FOLD actions.
    pub fn hand_vpip(&self, actions: &[HandAction]) -> f64 {
        actions
            .iter()
            .filter(|a| a.action.is_voluntary())
            .map(HandAction::weight)
            .sum()
    }
}

/// Per-hand rules: at least one action, weights summing to 100, no repeats.
fn check_hand(hand: &str, actions: &[HandAction]) -> Result<(), ContractViolation> {
    if actions.is_empty() {
        return Err(ContractViolation::EmptyHandActions {
            hand: hand.to_string(),
        });
    }

    let sum: f64 = actions.iter().map(HandAction::weight).sum();
    if (sum - FULL_WEIGHT).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ContractViolation::WeightSumMismatch {
            hand: hand.to_string(),
            sum,
        });
    }

    let mut seen: HashSet<ActionType> = HashSet::with_capacity(actions.len());
    for entry in actions {
        if !seen.insert(entry.action) {
            return Err(ContractViolation::DuplicateAction {
                hand: hand.to_string(),
                action: entry.action,
            });
        }
    }
    Ok(())
}
