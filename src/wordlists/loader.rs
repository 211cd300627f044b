//! Word list loading utilities
//!
//! Word list files are whitespace separated, normally one word per line.
//! Loading fails fast on the first entry that is not a valid word.

use crate::core::{AnalysisError, Word, WordError};
use log::debug;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns [`AnalysisError::CorpusLoad`] if the file cannot be read and
/// [`AnalysisError::CorpusWord`] for the first invalid entry.
///
/// # Examples
/// ```no_run
/// use wordle_analyze::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle-answers-alphabetical.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, AnalysisError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| AnalysisError::CorpusLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content).map_err(|(line, word, source)| AnalysisError::CorpusWord {
        path: path.to_path_buf(),
        line,
        word,
        source,
    })?;

    debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse whitespace separated words, reporting the 1-based line of a failure
fn parse_words(content: &str) -> Result<Vec<Word>, (usize, String, WordError)> {
    let mut words = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        for token in line.split_whitespace() {
            let word = Word::new(token).map_err(|e| (idx + 1, token.to_string(), e))?;
            words.push(word);
        }
    }
    Ok(words)
}

/// Convert a string slice to a Word vector
///
/// # Errors
/// Returns the first [`WordError`] encountered.
///
/// # Examples
/// ```
/// use wordle_analyze::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "angle"]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(words_from_slice(&["apple", "abc"]).is_err());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, WordError> {
    slice.iter().map(|&s| Word::new(s)).collect()
}
