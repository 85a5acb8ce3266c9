use crate::{FULL_WEIGHT, RangeAnalyzer};
use core_types::{ActionType, HandAction, RangeContract};
use std::collections::HashSet;

impl RangeAnalyzer {
    /// Repairs a hand's action list so that it satisfies the contract.
    ///
    /// Repeated actions keep their first occurrence, weights are clamped into
    /// `[0, 100]` (unset or non-finite weights become 0), and the result is
    /// rescaled to sum to 100 with any rounding drift added to the largest entry.
    /// A hand with nothing left to scale becomes 100% FOLD.
    pub fn normalize_hand(&self, actions: &[HandAction]) -> Vec<HandAction> {
        let mut seen = HashSet::new();
        let mut cleaned: Vec<HandAction> = actions
            .iter()
            .filter(|a| seen.insert(a.action))
            .map(|a| {
                let weight = a.weight();
                let weight = if weight.is_finite() {
                    weight.clamp(0.0, FULL_WEIGHT)
                } else {
                    0.0
                };
                HandAction::new(a.action, weight)
            })
            .collect();

        let sum: f64 = cleaned.iter().map(HandAction::weight).sum();
        if cleaned.is_empty() || sum <= 0.0 {
            return vec![HandAction::new(ActionType::Fold, FULL_WEIGHT)];
        }

        for entry in &mut cleaned {
            entry.weight = Some(entry.weight() / sum * FULL_WEIGHT);
        }
        let drift = FULL_WEIGHT - cleaned.iter().map(HandAction::weight).sum::<f64>();
        // The largest entry holds at least 100/n, so the drift cannot push it below zero.
        if let Some(largest) = cleaned
            .iter_mut()
            .max_by(|a, b| a.weight().total_cmp(&b.weight()))
        {
            largest.weight = Some((largest.weight() + drift).clamp(0.0, FULL_WEIGHT));
        }
        cleaned
    }

    /// Normalises every hand of a range. Hands with blank labels are dropped.
    pub fn normalize(&self, range: &RangeContract) -> RangeContract {
        let hands = range
            .hands
            .iter()
            .filter(|(label, _)| !label.trim().is_empty())
            .map(|(label, actions)| (label.clone(), self.normalize_hand(actions)))
            .collect();
        RangeContract {
            name: range.name.clone(),
            hands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ActionType::*;

    fn act(action: ActionType, weight: f64) -> HandAction {
        HandAction::new(action, weight)
    }

    #[test]
    fn scales_weights_to_one_hundred() {
        let analyzer = RangeAnalyzer::default();
        let out = analyzer.normalize_hand(&[act(Open, 30.0), act(Fold, 10.0)]);
        assert_eq!(out.len(), 2);
        assert!((out[0].weight() - 75.0).abs() < 1e-9);
        assert!((out[1].weight() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn drops_duplicates_and_clamps() {
        let analyzer = RangeAnalyzer::default();
        let out = analyzer.normalize_hand(&[
            act(Call, 250.0),
            act(Call, 10.0),
            act(Raise, -20.0),
            act(Bet3, f64::NAN),
        ]);
        let actions: Vec<_> = out.iter().map(|a| a.action).collect();
        assert_eq!(actions, vec![Call, Raise, Bet3]);
        assert_eq!(out[0].weight(), 100.0);
        assert_eq!(out[1].weight(), 0.0);
    }

    #[test]
    fn nothing_to_scale_becomes_fold() {
        let analyzer = RangeAnalyzer::default();
        let fold = vec![act(Fold, 100.0)];
        assert_eq!(analyzer.normalize_hand(&[]), fold);
        assert_eq!(analyzer.normalize_hand(&[act(Open, 0.0)]), fold);
    }

    #[test]
    fn drift_never_turns_a_zero_weight_negative() {
        let analyzer = RangeAnalyzer::default();
        let out = analyzer.normalize_hand(&[
            act(Open, 1.0),
            act(Call, 7.0),
            act(Fold, 1.0),
            act(Raise, 0.0),
        ]);
        assert_eq!(out[3].action, Raise);
        assert_eq!(out[3].weight(), 0.0);
        assert!(out.iter().all(|a| (0.0..=FULL_WEIGHT).contains(&a.weight())));

        let range = RangeContract::new("drift").with_hand("AA", out);
        assert_eq!(analyzer.validate(&range), Ok(()));
    }

    #[test]
    fn normalised_range_passes_validation() {
        let analyzer = RangeAnalyzer::default();
        let messy = RangeContract::new("messy")
            .with_hand("AKs", vec![act(Open, 1.0), act(Call, 1.0), act(Fold, 1.0)])
            .with_hand("QQ", vec![act(Raise, 40.0), act(Raise, 40.0)])
            .with_hand("72o", vec![])
            .with_hand("  ", vec![act(Open, 100.0)]);
        assert!(analyzer.validate(&messy).is_err());

        let fixed = analyzer.normalize(&messy);
        assert_eq!(fixed.name, "messy");
        assert_eq!(fixed.hand_count(), 3);
        assert_eq!(analyzer.validate(&fixed), Ok(()));
    }
}
