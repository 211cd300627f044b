//! Command implementations

pub mod analyze;
pub mod rank;
pub mod simple;
pub mod tables;

pub use analyze::{AnalysisResult, analyze_word};
pub use rank::{RankOptions, RankResult, RankedEntry, rank_guesses};
pub use simple::run_simple;
pub use tables::{LetterReport, ZipfReport, letter_report, zipf_report};
