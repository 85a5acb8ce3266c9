use crate::enums::ActionType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One weighted entry in a hand's action distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandAction {
    pub action: ActionType,
    /// Percentage of the time `action` is taken, in `[0, 100]`.
    /// A missing weight is carried as `None` and counts as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl HandAction {
    pub fn new(action: ActionType, weight: f64) -> Self {
        Self {
            action,
            weight: Some(weight),
        }
    }

    /// The weight used in every calculation: unset weights are zero.
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }
}

/// A named range: hand label to the distribution of actions taken with it.
///
/// The map is ordered by label so that every traversal (validation, encoding,
/// display) sees the hands in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeContract {
    pub name: String,
    pub hands: BTreeMap<String, Vec<HandAction>>,
}

impl RangeContract {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hands: BTreeMap::new(),
        }
    }

    /// Builder-style helper that inserts (or replaces) a hand.
    pub fn with_hand(mut self, label: impl Into<String>, actions: Vec<HandAction>) -> Self {
        self.hands.insert(label.into(), actions);
        self
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}
