//! Constraint application on score tables
//!
//! Two facts can be learnt from feedback: a letter is absent from the answer,
//! or a letter is known to sit at a position. Both only ever remove scores.

use super::score::ScoreTable;
use crate::core::{AnalysisError, WORD_LEN, parse_letter};
use std::fmt;
use std::str::FromStr;

/// A letter pinned to a 1-based position, written as `e5` or `e:5`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLetter {
    pub letter: u8,
    /// 1-based position
    pub position: usize,
}

impl FixedLetter {
    /// # Errors
    /// Returns an error if `letter` is not a letter or `position` is outside `1..=5`.
    pub fn new(letter: char, position: usize) -> Result<Self, AnalysisError> {
        let letter = parse_letter(letter)?;
        if !(1..=WORD_LEN).contains(&position) {
            return Err(AnalysisError::InvalidPosition(position));
        }
        Ok(Self { letter, position })
    }
}

impl FromStr for FixedLetter {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnalysisError::InvalidConstraint(s.to_string());
        let mut chars = s.trim().chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let rest = chars.as_str();
        let digits = rest.strip_prefix(':').unwrap_or(rest);
        let position: usize = digits.parse().map_err(|_| invalid())?;
        Self::new(letter, position)
    }
}

impl fmt::Display for FixedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(self.letter), self.position)
    }
}

/// A fact learnt from puzzle feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Letters confirmed absent from the answer
    Absent(Vec<u8>),
    /// A letter confirmed at a position
    Fixed(FixedLetter),
}

impl Constraint {
    /// Absent letters from a string such as `"soadclint"`
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidLetter`] for any non-letter character.
    pub fn absent(letters: &str) -> Result<Self, AnalysisError> {
        letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(parse_letter)
            .collect::<Result<Vec<u8>, _>>()
            .map(Self::Absent)
    }
}

/// Remove each letter from the overall table and from every positional table
///
/// Returns how many table entries were removed. Letters already gone are
/// skipped, so repeating an elimination removes nothing.
pub fn eliminate_letters(
    letters: &[u8],
    positions: &mut [ScoreTable; WORD_LEN],
    overall: &mut ScoreTable,
) -> usize {
    let mut removed = 0;
    for &letter in letters {
        if overall.eliminate(letter) {
            removed += 1;
        }
        for table in positions.iter_mut() {
            if table.eliminate(letter) {
                removed += 1;
            }
        }
    }
    removed
}

/// Remove every letter but `fixed.letter` from its position's table
///
/// The overall table and the other positions are untouched. Returns how many
/// entries were removed.
pub fn fix_letter(fixed: FixedLetter, positions: &mut [ScoreTable; WORD_LEN]) -> usize {
    positions[fixed.position - 1].retain_only(fixed.letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::LetterState;

    fn full_tables() -> ([ScoreTable; WORD_LEN], ScoreTable) {
        let mut overall = ScoreTable::unseen();
        for &letter in crate::core::ALPHABET {
            overall.set_score(letter, 1.0);
        }
        let mut positions: [ScoreTable; WORD_LEN] = std::array::from_fn(|_| ScoreTable::unseen());
        for table in &mut positions {
            table.set_score(b'a', 1.0);
            table.set_score(b'e', 2.0);
        }
        (positions, overall)
    }

    #[test]
    fn eliminate_removes_everywhere() {
        let (mut positions, mut overall) = full_tables();
        let removed = eliminate_letters(b"e", &mut positions, &mut overall);

        assert_eq!(removed, 1 + WORD_LEN);
        assert_eq!(overall.state(b'e'), LetterState::Eliminated);
        for table in &positions {
            assert_eq!(table.state(b'e'), LetterState::Eliminated);
            assert!(table.is_eligible(b'a'));
        }
    }

    #[test]
    fn eliminate_is_idempotent() {
        let (mut positions, mut overall) = full_tables();
        eliminate_letters(b"e", &mut positions, &mut overall);
        let snapshot = (positions.clone(), overall.clone());

        assert_eq!(eliminate_letters(b"e", &mut positions, &mut overall), 0);
        assert_eq!((positions, overall), snapshot);
    }

    #[test]
    fn fix_letter_only_touches_one_position() {
        let (mut positions, overall) = full_tables();
        let overall_before = overall.clone();
        let fixed = FixedLetter::new('a', 2).unwrap();

        assert_eq!(fix_letter(fixed, &mut positions), 1);
        assert!(positions[1].is_eligible(b'a'));
        assert!(!positions[1].is_eligible(b'e'));
        assert!(positions[0].is_eligible(b'e'));
        assert_eq!(overall, overall_before);
    }

    #[test]
    fn fixed_letter_parsing() {
        assert_eq!(
            "e5".parse::<FixedLetter>().unwrap(),
            FixedLetter {
                letter: b'e',
                position: 5
            }
        );
        assert_eq!(
            "I:2".parse::<FixedLetter>().unwrap(),
            FixedLetter {
                letter: b'i',
                position: 2
            }
        );
        assert!(matches!(
            "e0".parse::<FixedLetter>(),
            Err(AnalysisError::InvalidPosition(0))
        ));
        assert!(matches!(
            "e".parse::<FixedLetter>(),
            Err(AnalysisError::InvalidConstraint(_))
        ));
        assert!(matches!(
            "35".parse::<FixedLetter>(),
            Err(AnalysisError::InvalidLetter('3'))
        ));
        assert!(matches!(
            "".parse::<FixedLetter>(),
            Err(AnalysisError::InvalidConstraint(_))
        ));
    }

    #[test]
    fn fixed_letter_display() {
        assert_eq!(FixedLetter::new('y', 5).unwrap().to_string(), "y5");
    }

    #[test]
    fn absent_letters_parsing() {
        assert_eq!(
            Constraint::absent("so AD").unwrap(),
            Constraint::Absent(b"soad".to_vec())
        );
        assert!(Constraint::absent("s0").is_err());
    }
}
