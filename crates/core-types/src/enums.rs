use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every action a range may assign weight to.
///
/// The set is closed. `FOLD` is the only variant with special meaning: it is the
/// one action that does not count towards VPIP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionType {
    Fold,
    Open,
    Call,
    Call3B,
    Raise,
    Overbet,
    // The desktop range builder exports bet sizes with the digit first.
    #[serde(alias = "3BET")]
    Bet3,
    #[serde(alias = "4BET")]
    Bet4,
    #[serde(alias = "5BET")]
    Bet5,
    AllIn,
}

impl ActionType {
    /// All variants, in declaration order.
    pub const ALL: [ActionType; 10] = [
        ActionType::Fold,
        ActionType::Open,
        ActionType::Call,
        ActionType::Call3B,
        ActionType::Raise,
        ActionType::Overbet,
        ActionType::Bet3,
        ActionType::Bet4,
        ActionType::Bet5,
        ActionType::AllIn,
    ];

    /// The wire name of the action (e.g. `"CALL3B"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Fold => "FOLD",
            ActionType::Open => "OPEN",
            ActionType::Call => "CALL",
            ActionType::Call3B => "CALL3B",
            ActionType::Raise => "RAISE",
            ActionType::Overbet => "OVERBET",
            ActionType::Bet3 => "BET3",
            ActionType::Bet4 => "BET4",
            ActionType::Bet5 => "BET5",
            ActionType::AllIn => "ALLIN",
        }
    }

    /// Returns true for every action that voluntarily puts money in the pot.
    pub fn is_voluntary(&self) -> bool {
        !matches!(self, ActionType::Fold)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.as_str() {
            "3BET" => return Ok(ActionType::Bet3),
            "4BET" => return Ok(ActionType::Bet4),
            "5BET" => return Ok(ActionType::Bet5),
            _ => {}
        }
        ActionType::ALL
            .into_iter()
            .find(|a| a.as_str() == upper)
            .ok_or_else(|| CoreError::UnknownAction(s.to_string()))
    }
}
