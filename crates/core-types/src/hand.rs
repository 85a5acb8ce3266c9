use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Card ranks from highest to lowest. Grid rows and columns follow this order.
pub const RANKS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

/// A canonical starting-hand category: `"AA"`, `"AKs"`, `"72o"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLabel {
    Pair(char),
    Suited(char, char),
    Offsuit(char, char),
}

fn rank_index(c: char) -> Option<usize> {
    RANKS.iter().position(|&r| r == c)
}

impl HandLabel {
    /// Returns true if `label` parses as a canonical hand.
    pub fn is_canonical(label: &str) -> bool {
        label.parse::<HandLabel>().is_ok()
    }
}

impl FromStr for HandLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidHandLabel(s.to_string());
        let chars: Vec<char> = s.chars().collect();

        let (hi, lo) = match chars.as_slice() {
            [a, b] | [a, b, _] => (*a, *b),
            _ => return Err(invalid()),
        };
        let hi_idx = rank_index(hi).ok_or_else(invalid)?;
        let lo_idx = rank_index(lo).ok_or_else(invalid)?;

        match (chars.get(2), hi_idx.cmp(&lo_idx)) {
            (None, std::cmp::Ordering::Equal) => Ok(HandLabel::Pair(hi)),
            (Some('s'), std::cmp::Ordering::Less) => Ok(HandLabel::Suited(hi, lo)),
            (Some('o'), std::cmp::Ordering::Less) => Ok(HandLabel::Offsuit(hi, lo)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandLabel::Pair(r) => write!(f, "{r}{r}"),
            HandLabel::Suited(hi, lo) => write!(f, "{hi}{lo}s"),
            HandLabel::Offsuit(hi, lo) => write!(f, "{hi}{lo}o"),
        }
    }
}

/// One cell of the 13x13 starting-hand grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub hand: HandLabel,
}

/// Lays out all 169 hand categories row by row.
///
/// Above the diagonal are suited hands, below it offsuit hands, and the diagonal
/// holds the pairs.
pub fn all_hands_13x13() -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(RANKS.len() * RANKS.len());
    for (row, &r1) in RANKS.iter().enumerate() {
        for (col, &r2) in RANKS.iter().enumerate() {
            let hand = match row.cmp(&col) {
                std::cmp::Ordering::Less => HandLabel::Suited(r1, r2),
                std::cmp::Ordering::Greater => HandLabel::Offsuit(r2, r1),
                std::cmp::Ordering::Equal => HandLabel::Pair(r1),
            };
            cells.push(GridCell { row, col, hand });
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parses_canonical_labels() {
        assert_eq!("AA".parse::<HandLabel>().unwrap(), HandLabel::Pair('A'));
        assert_eq!("AKs".parse::<HandLabel>().unwrap(), HandLabel::Suited('A', 'K'));
        assert_eq!("72o".parse::<HandLabel>().unwrap(), HandLabel::Offsuit('7', '2'));
    }

    #[test]
    fn rejects_non_canonical_labels() {
        for label in ["", "A", "KA", "KAs", "AAs", "AK", "AKx", "1Ks", "AKso", "ak"] {
            assert!(!HandLabel::is_canonical(label), "{label} should be rejected");
        }
    }

    #[test]
    fn grid_has_169_distinct_hands() {
        let cells = all_hands_13x13();
        assert_eq!(cells.len(), 169);
        let unique: HashSet<_> = cells.iter().map(|c| c.hand).collect();
        assert_eq!(unique.len(), 169);
    }

    #[test]
    fn grid_places_suited_above_the_diagonal() {
        let cells = all_hands_13x13();
        let at = |row: usize, col: usize| cells[row * 13 + col].hand.to_string();
        assert_eq!(at(0, 0), "AA");
        assert_eq!(at(0, 1), "AKs");
        assert_eq!(at(1, 0), "AKo");
        assert_eq!(at(12, 11), "32o");
    }

    #[test]
    fn display_round_trips() {
        for cell in all_hands_13x13() {
            let text = cell.hand.to_string();
            assert_eq!(text.parse::<HandLabel>().unwrap(), cell.hand);
        }
    }
}
