//! Letter frequency analysis and guess ranking
//!
//! Data flows leaves first: answers are counted into a [`FrequencyTable`],
//! each count table is turned into a [`ScoreTable`] by [`zipf_scores`], and
//! the ranker sums table scores for every guess. Constraints edit the score
//! tables and trigger a re-rank. Match rates and the outcome breakdown work
//! directly off the answer list.

pub mod breakdown;
pub mod constraints;
pub mod frequency;
pub mod ranker;
pub mod score;
mod session;
pub mod strength;
pub mod zipf;

pub use breakdown::{Breakdown, OUTCOMES, Outcome};
pub use constraints::{Constraint, FixedLetter};
pub use frequency::{FrequencyTable, LetterCounts};
pub use ranker::{WordScore, rank_words, score_word};
pub use score::{LetterState, ScoreTable};
pub use session::Session;
pub use strength::{MatchCounts, MatchRates, match_counts, match_rates};
pub use zipf::{TableId, ZipfRankEntry, ZipfScores, zipf_scores};
