use core_types::ActionType;
use thiserror::Error;

/// A rule of the range contract that a payload broke.
///
/// Each variant carries enough context (hand label, action, offending number)
/// to be shown to a client as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractViolation {
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Hand '{hand}' has {action} weight {weight}, expected a value between 0 and 100")]
    WeightOutOfRange {
        hand: String,
        action: ActionType,
        weight: f64,
    },

    #[error("Hand '{hand}' must have at least one action")]
    EmptyHandActions { hand: String },

    #[error("Hand '{hand}' weights must sum to 100 (got {sum})")]
    WeightSumMismatch { hand: String, sum: f64 },

    #[error("Hand '{hand}' has duplicate action: {action}")]
    DuplicateAction { hand: String, action: ActionType },

    #[error("Invalid hand label: '{hand}'")]
    InvalidHandLabel { hand: String },
}

impl ContractViolation {
    /// A stable, machine-readable name for the violated rule.
    pub fn kind(&self) -> &'static str {
        match self {
            ContractViolation::MissingRequiredField { .. } => "MissingRequiredField",
            ContractViolation::WeightOutOfRange { .. } => "WeightOutOfRange",
            ContractViolation::EmptyHandActions { .. } => "EmptyHandActions",
            ContractViolation::WeightSumMismatch { .. } => "WeightSumMismatch",
            ContractViolation::DuplicateAction { .. } => "DuplicateAction",
            ContractViolation::InvalidHandLabel { .. } => "InvalidHandLabel",
        }
    }

    /// The hand the violation was found in, if it is tied to one.
    pub fn hand(&self) -> Option<&str> {
        match self {
            ContractViolation::MissingRequiredField { .. } => None,
            ContractViolation::WeightOutOfRange { hand, .. }
            | ContractViolation::EmptyHandActions { hand }
            | ContractViolation::WeightSumMismatch { hand, .. }
            | ContractViolation::DuplicateAction { hand, .. }
            | ContractViolation::InvalidHandLabel { hand } => Some(hand),
        }
    }
}
