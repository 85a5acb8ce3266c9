use core_types::ActionType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Range-wide average weight of each action.
///
/// Always holds an entry for every `ActionType`, so consumers never have to
/// treat a missing key as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionTotals(BTreeMap<ActionType, f64>);

impl ActionTotals {
    /// Every action mapped to zero.
    pub fn zeroed() -> Self {
        Self(ActionType::ALL.into_iter().map(|a| (a, 0.0)).collect())
    }

    pub fn get(&self, action: ActionType) -> f64 {
        self.0.get(&action).copied().unwrap_or(0.0)
    }

    pub(crate) fn add(&mut self, action: ActionType, weight: f64) {
        *self.0.entry(action).or_insert(0.0) += weight;
    }

    pub(crate) fn scale_down(&mut self, divisor: f64) {
        for total in self.0.values_mut() {
            *total /= divisor;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionType, f64)> + '_ {
        self.0.iter().map(|(a, w)| (*a, *w))
    }
}

impl Default for ActionTotals {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// The result of the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeStats {
    pub vpip: f64,
    pub by_action: ActionTotals,
}
