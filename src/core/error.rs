//! Errors raised while loading word lists or analysing them

use super::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong before or during an analysis session
///
/// A letter missing from a score table is not an error; the ranker treats it
/// as a penalty.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A word list could not be read
    #[error("failed to read word list {}", .path.display())]
    CorpusLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A word list contained something that is not a valid word
    #[error("invalid word {word:?} on line {line} of {}", .path.display())]
    CorpusWord {
        path: PathBuf,
        line: usize,
        word: String,
        #[source]
        source: WordError,
    },

    /// The answer list has no words, so no frequencies can be computed
    #[error("answer list is empty")]
    EmptyCorpus,

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    /// Positions are counted from 1 to 5
    #[error("position must be between 1 and 5, got {0}")]
    InvalidPosition(usize),

    #[error("invalid constraint {0:?}, expected a letter followed by a position such as e5")]
    InvalidConstraint(String),
}
