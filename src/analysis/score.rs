//! Per-letter score tables
//!
//! Every table holds one state per alphabet letter instead of relying on map
//! key presence, so "never seen here" and "ruled out" stay distinguishable.

use crate::core::{ALPHABET, letter_index};

/// Scoring state of a single letter in a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LetterState {
    /// Letter is scored and may still occur
    Eligible(f64),
    /// Letter was scored but a constraint has ruled it out
    Eliminated,
    /// Letter never appeared in the counts the table was built from
    Unseen,
}

/// One score per letter for a position, or for the overall table
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable([LetterState; 26]);

impl ScoreTable {
    /// A table where no letter has been seen
    #[must_use]
    pub const fn unseen() -> Self {
        Self([LetterState::Unseen; 26])
    }

    /// State of a letter; anything outside `a..=z` is [`LetterState::Unseen`]
    #[must_use]
    pub fn state(&self, letter: u8) -> LetterState {
        letter_index(letter).map_or(LetterState::Unseen, |idx| self.0[idx])
    }

    /// Score of a letter, if it is still eligible
    #[must_use]
    pub fn score(&self, letter: u8) -> Option<f64> {
        match self.state(letter) {
            LetterState::Eligible(score) => Some(score),
            LetterState::Eliminated | LetterState::Unseen => None,
        }
    }

    #[must_use]
    pub fn is_eligible(&self, letter: u8) -> bool {
        self.score(letter).is_some()
    }

    pub(crate) fn set_score(&mut self, letter: u8, score: f64) {
        if let Some(idx) = letter_index(letter) {
            self.0[idx] = LetterState::Eligible(score);
        }
    }

    /// Rule a letter out
    ///
    /// Only eligible letters change state; unseen letters stay unseen and an
    /// eliminated letter is never restored. Returns whether a score was removed.
    pub fn eliminate(&mut self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(idx) if matches!(self.0[idx], LetterState::Eligible(_)) => {
                self.0[idx] = LetterState::Eliminated;
                true
            }
            _ => false,
        }
    }

    /// Eliminate every letter except `keep`
    ///
    /// Returns how many scores were removed.
    pub fn retain_only(&mut self, keep: u8) -> usize {
        let mut removed = 0;
        for &letter in ALPHABET {
            if letter != keep && self.eliminate(letter) {
                removed += 1;
            }
        }
        removed
    }

    /// Eligible letters and their scores in alphabet order
    pub fn eligible(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        ALPHABET
            .iter()
            .zip(self.0.iter())
            .filter_map(|(&letter, state)| match state {
                LetterState::Eligible(score) => Some((letter, *score)),
                LetterState::Eliminated | LetterState::Unseen => None,
            })
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::unseen()
    }
}
