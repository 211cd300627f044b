//! Match strength of a single word against the answer list
//!
//! Counts how often each letter of a word would land green or yellow across
//! every answer, and expresses both as a share of all letter slots.

use crate::core::{WORD_LEN, Word};

/// Raw green and yellow hit counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCounts {
    pub green: usize,
    pub yellow: usize,
}

impl MatchCounts {
    /// Convert to percentages of `answer_count * 5` letter slots
    #[must_use]
    pub fn rates(self, answer_count: usize) -> MatchRates {
        if answer_count == 0 {
            return MatchRates::default();
        }
        let slots = (answer_count * WORD_LEN) as f64;
        MatchRates {
            green: self.green as f64 / slots * 100.0,
            yellow: self.yellow as f64 / slots * 100.0,
        }
    }
}

/// Green and yellow yields as percentages
///
/// The yellow yield counts every occurrence of a letter in an answer, so for
/// words with repeated letters it can exceed 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchRates {
    pub green: f64,
    pub yellow: f64,
}

impl MatchRates {
    /// Green yield as a probability, clamped to `[0, 1]`
    #[must_use]
    pub fn green_probability(self) -> f64 {
        (self.green / 100.0).clamp(0.0, 1.0)
    }

    /// Yellow yield as a probability, clamped to `[0, 1]`
    #[must_use]
    pub fn yellow_probability(self) -> f64 {
        (self.yellow / 100.0).clamp(0.0, 1.0)
    }
}

/// Count green and yellow hits of `word` over `answers`
///
/// For each position and answer: an equal letter is one green hit. Otherwise
/// every occurrence of the word's letter anywhere in the answer is one yellow
/// hit.
#[must_use]
pub fn match_counts(word: &Word, answers: &[Word]) -> MatchCounts {
    let mut counts = MatchCounts::default();

    for (p, &letter) in word.chars().iter().enumerate() {
        for answer in answers {
            if answer.char_at(p) == letter {
                counts.green += 1;
            } else {
                counts.yellow += answer.count_of(letter);
            }
        }
    }

    counts
}

/// Green and yellow yields of `word` over `answers`
///
/// # Examples
/// ```
/// use wordle_analyze::analysis::match_rates;
/// use wordle_analyze::core::Word;
/// use wordle_analyze::wordlists::loader::words_from_slice;
///
/// let answers = words_from_slice(&["apple", "angle"]).unwrap();
/// let rates = match_rates(&Word::new("apple").unwrap(), &answers);
///
/// // apple matches itself fully and shares a, l, e in place with angle
/// assert!((rates.green - 80.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn match_rates(word: &Word, answers: &[Word]) -> MatchRates {
    match_counts(word, answers).rates(answers.len())
}
