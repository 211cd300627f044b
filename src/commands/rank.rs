//! Ranking report
//!
//! Takes the best guesses from a session and, optionally, their green and
//! yellow yields.

use crate::analysis::{MatchRates, Session};
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};

/// Options for building a ranking report
#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    pub limit: usize,
    pub with_yields: bool,
    pub show_progress: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: 50,
            with_yields: true,
            show_progress: true,
        }
    }
}

/// One row of the ranking report
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// 1-based
    pub rank: usize,
    pub word: String,
    pub score: f64,
    pub rates: Option<MatchRates>,
}

/// Result of ranking guesses
#[derive(Debug, Clone)]
pub struct RankResult {
    pub entries: Vec<RankedEntry>,
    pub total_guesses: usize,
}

/// Collect the top guesses of a session
pub fn rank_guesses(session: &mut Session<'_>, options: RankOptions) -> RankResult {
    let top = session.top(options.limit);
    let words: Vec<&Word> = top.iter().map(|s| s.word).collect();
    let scores: Vec<f64> = top.iter().map(|s| s.score).collect();
    let total_guesses = session.ranking().len();

    let rates = if options.with_yields {
        let pb = progress_bar(words.len(), options.show_progress);
        let rates = session.match_rates_many(&words, || pb.inc(1));
        pb.finish_and_clear();
        rates.into_iter().map(Some).collect()
    } else {
        vec![None; words.len()]
    };

    let entries = words
        .iter()
        .zip(scores)
        .zip(rates)
        .enumerate()
        .map(|(i, ((word, score), rates))| RankedEntry {
            rank: i + 1,
            word: word.text().to_string(),
            score,
            rates,
        })
        .collect();

    RankResult {
        entries,
        total_guesses,
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) yields")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}
