//! Guess scoring and ranking
//!
//! A word's score is a cost: the sum of its letters' positional and overall
//! table scores, plus penalties for repeated letters and for letters a
//! position can no longer hold. Lower is better.

use super::score::ScoreTable;
use crate::core::{WORD_LEN, Word};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Added once per pair of equal letters in a word
pub const DUPLICATE_PENALTY: f64 = 5.0;

/// Added when a position's table has no score for the word's letter
pub const ELIMINATED_PENALTY: f64 = 100.0;

/// A guess and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScore<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Score one word against the current tables
///
/// For each position `p` holding letter `L`:
/// - every later position also holding `L` adds [`DUPLICATE_PENALTY`]
/// - `L`'s score in position `p`'s table is added if it is still eligible
/// - `L`'s score in the overall table is added if it is still eligible
/// - otherwise, if position `p` has no score for `L`, [`ELIMINATED_PENALTY`] is added
///
/// # Examples
/// ```
/// use wordle_analyze::analysis::{FrequencyTable, ScoreTable, score_word, zipf_scores};
/// use wordle_analyze::core::Word;
/// use wordle_analyze::wordlists::loader::words_from_slice;
///
/// let answers = words_from_slice(&["apple", "angle", "atlas"]).unwrap();
/// let table = FrequencyTable::from_answers(&answers);
/// let positions: [ScoreTable; 5] =
///     std::array::from_fn(|p| zipf_scores(table.position(p)).table);
/// let overall = zipf_scores(table.overall()).table;
///
/// let good = score_word(&Word::new("angle").unwrap(), &positions, &overall);
/// let bad = score_word(&Word::new("zzzzz").unwrap(), &positions, &overall);
/// assert!(good < bad);
/// ```
#[must_use]
pub fn score_word(word: &Word, positions: &[ScoreTable; WORD_LEN], overall: &ScoreTable) -> f64 {
    let chars = word.chars();
    let mut score = 0.0;

    for (p, &letter) in chars.iter().enumerate() {
        let duplicates = chars[p + 1..].iter().filter(|&&c| c == letter).count();
        score += DUPLICATE_PENALTY * duplicates as f64;

        match positions[p].score(letter) {
            Some(positional) => score += positional,
            None => score += ELIMINATED_PENALTY,
        }

        if let Some(general) = overall.score(letter) {
            score += general;
        }
    }

    score
}

/// Ascending order by score
///
/// Uses `total_cmp`, so the order is total even for NaN.
#[must_use]
pub fn by_score(a: &WordScore<'_>, b: &WordScore<'_>) -> Ordering {
    a.score.total_cmp(&b.score)
}

/// Score every guess and sort, lowest score first
///
/// The sort is stable: equal scores keep the guess list order.
#[must_use]
pub fn rank_words<'a>(
    guesses: &'a [Word],
    positions: &[ScoreTable; WORD_LEN],
    overall: &ScoreTable,
) -> Vec<WordScore<'a>> {
    let mut ranked: Vec<WordScore<'a>> = guesses
        .par_iter()
        .map(|word| WordScore {
            word,
            score: score_word(word, positions, overall),
        })
        .collect();

    ranked.sort_by(by_score);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{FrequencyTable, zipf_scores};
    use crate::wordlists::loader::words_from_slice;

    fn tables(answers: &[&str]) -> ([ScoreTable; WORD_LEN], ScoreTable) {
        let answers = words_from_slice(answers).unwrap();
        let table = FrequencyTable::from_answers(&answers);
        let positions = std::array::from_fn(|p| zipf_scores(table.position(p)).table);
        (positions, zipf_scores(table.overall()).table)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn score_sums_positional_and_overall() {
        let (positions, overall) = tables(&["apple", "angle", "atlas"]);
        let w = word("angle");

        let expected: f64 = w
            .chars()
            .iter()
            .enumerate()
            .map(|(p, &c)| positions[p].score(c).unwrap() + overall.score(c).unwrap())
            .sum();

        assert!((score_word(&w, &positions, &overall) - expected).abs() < 1e-9);
    }

    #[test]
    fn unseen_positional_letter_is_penalized() {
        let (positions, overall) = tables(&["apple", "angle", "atlas"]);
        // 'b' never starts an answer; every other letter matches angle
        let base = score_word(&word("angle"), &positions, &overall);
        let swapped = score_word(&word("bngle"), &positions, &overall);

        let expected = base - positions[0].score(b'a').unwrap() - overall.score(b'a').unwrap()
            + ELIMINATED_PENALTY
            + overall.score(b'b').unwrap();
        assert!((swapped - expected).abs() < 1e-9);
    }

    #[test]
    fn duplicate_pairs_are_penalized() {
        let unseen = ScoreTable::unseen();
        let positions: [ScoreTable; WORD_LEN] = std::array::from_fn(|_| ScoreTable::unseen());

        // Only penalties apply with empty tables
        let all_penalty = ELIMINATED_PENALTY * WORD_LEN as f64;
        assert!((score_word(&word("abcde"), &positions, &unseen) - all_penalty).abs() < 1e-9);
        assert!(
            (score_word(&word("apple"), &positions, &unseen) - all_penalty - DUPLICATE_PENALTY)
                .abs()
                < 1e-9
        );
        // Five equal letters form ten pairs
        assert!(
            (score_word(&word("aaaaa"), &positions, &unseen)
                - all_penalty
                - 10.0 * DUPLICATE_PENALTY)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn ranking_is_ascending_and_complete() {
        let (positions, overall) = tables(&["apple", "angle", "atlas"]);
        let guesses = words_from_slice(&["zzzzz", "angle", "apple", "atlas", "qujxv"]).unwrap();
        let ranked = rank_words(&guesses, &positions, &overall);

        assert_eq!(ranked.len(), guesses.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
        assert!(ranked[0].word.text().starts_with('a'));
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let unseen = ScoreTable::unseen();
        let positions: [ScoreTable; WORD_LEN] = std::array::from_fn(|_| ScoreTable::unseen());
        let guesses = words_from_slice(&["vwxyz", "bcdfg", "hjklm"]).unwrap();
        let ranked = rank_words(&guesses, &positions, &unseen);

        let order: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, ["vwxyz", "bcdfg", "hjklm"]);
    }

    #[test]
    fn by_score_orders_ascending() {
        let a = word("apple");
        let b = word("angle");
        let low = WordScore { word: &a, score: 1.0 };
        let high = WordScore { word: &b, score: 2.0 };
        assert_eq!(by_score(&low, &high), Ordering::Less);
        assert_eq!(by_score(&high, &low), Ordering::Greater);
        assert_eq!(by_score(&low, &low), Ordering::Equal);
    }
}
