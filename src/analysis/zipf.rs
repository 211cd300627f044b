//! Rank-order decay scoring
//!
//! Letters are ranked by count, highest first. The letter at rank `r` with
//! relative frequency `f` gets weight `1 / (r + f)`, and its table score is the
//! running sum of weights up to and including its rank. Scores therefore grow
//! as counts fall: the rarest letter carries the largest score.

use super::frequency::LetterCounts;
use super::score::ScoreTable;
use crate::core::{AnalysisError, WORD_LEN};
use std::fmt;

/// One ranked letter of a count table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZipfRankEntry {
    /// 1-based rank, 1 = most frequent
    pub rank: usize,
    pub letter: u8,
    /// `1 / (rank + relative_frequency)`
    pub zipf_weight: f64,
    /// Count divided by the table's total count
    pub relative_frequency: f64,
    /// Sum of weights for ranks `1..=rank`, stored in the score table
    pub cumulative_score: f64,
}

/// Score table and ranking produced from one count table
#[derive(Debug, Clone, PartialEq)]
pub struct ZipfScores {
    pub table: ScoreTable,
    pub ranks: Vec<ZipfRankEntry>,
}

/// Identifies one of the six tables a session keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// 0-based letter position
    Position(usize),
    Overall,
}

impl TableId {
    /// Table for a 1-based position, or the overall table for `None`
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidPosition`] outside `1..=5`.
    pub fn from_position(position: Option<usize>) -> Result<Self, AnalysisError> {
        match position {
            None => Ok(Self::Overall),
            Some(p @ 1..=WORD_LEN) => Ok(Self::Position(p - 1)),
            Some(p) => Err(AnalysisError::InvalidPosition(p)),
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(p) => write!(f, "position {}", p + 1),
            Self::Overall => write!(f, "overall"),
        }
    }
}

/// Rank every tracked letter of `counts` and score it
///
/// The highest remaining count wins each rank; on equal counts the letter
/// earlier in the alphabet wins. Letters with a zero count are ranked last.
///
/// # Examples
/// ```
/// use wordle_analyze::analysis::{FrequencyTable, zipf_scores};
/// use wordle_analyze::wordlists::loader::words_from_slice;
///
/// let answers = words_from_slice(&["apple", "angle", "atlas"]).unwrap();
/// let table = FrequencyTable::from_answers(&answers);
/// let scores = zipf_scores(table.position(0));
///
/// let first = scores.ranks[0];
/// assert_eq!(first.letter, b'a');
/// assert_eq!(first.relative_frequency, 1.0);
/// assert_eq!(first.zipf_weight, 0.5);
/// ```
#[must_use]
pub fn zipf_scores(counts: &LetterCounts) -> ZipfScores {
    let total = f64::from(counts.total());
    let mut table = ScoreTable::unseen();
    let mut ranks: Vec<ZipfRankEntry> = Vec::with_capacity(counts.len());
    let mut ranked = [false; 26];
    let mut cumulative_score = 0.0;

    for rank in 1..=counts.len() {
        let mut best: Option<(u8, u32)> = None;
        for (letter, count) in counts.iter() {
            if ranked[usize::from(letter - b'a')] {
                continue;
            }
            // Strict comparison keeps the alphabetically first letter on ties
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((letter, count));
            }
        }
        let Some((letter, count)) = best else {
            break;
        };

        let relative_frequency = if total > 0.0 {
            f64::from(count) / total
        } else {
            0.0
        };
        let zipf_weight = 1.0 / (rank as f64 + relative_frequency);
        cumulative_score += zipf_weight;

        ranked[usize::from(letter - b'a')] = true;
        table.set_score(letter, cumulative_score);
        ranks.push(ZipfRankEntry {
            rank,
            letter,
            zipf_weight,
            relative_frequency,
            cumulative_score,
        });
    }

    ZipfScores { table, ranks }
}
