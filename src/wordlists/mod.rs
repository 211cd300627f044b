//! Word lists for analysis
//!
//! The corpus is two ordered lists: the answers a puzzle can have, and every
//! word a player may guess. Guesses always include the answers.

pub mod loader;

use crate::core::{AnalysisError, Word, WordError};
use log::info;
use std::path::Path;

/// Answer and guess word lists for one analysis
#[derive(Debug, Clone)]
pub struct Corpus {
    answers: Vec<Word>,
    guesses: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from already validated words
    ///
    /// The guess list is `allowed` followed by `answers`, in order.
    ///
    /// # Errors
    /// Returns [`AnalysisError::EmptyCorpus`] if `answers` is empty.
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Result<Self, AnalysisError> {
        if answers.is_empty() {
            return Err(AnalysisError::EmptyCorpus);
        }

        let mut guesses = allowed;
        guesses.extend(answers.iter().cloned());

        Ok(Self { answers, guesses })
    }

    /// Load both lists from files
    ///
    /// # Errors
    /// Fails if either file is unreadable, contains an invalid word, or the
    /// answer list is empty.
    pub fn load(
        answers_path: impl AsRef<Path>,
        allowed_path: impl AsRef<Path>,
    ) -> Result<Self, AnalysisError> {
        let answers = loader::load_from_file(answers_path.as_ref())?;
        let allowed = loader::load_from_file(allowed_path.as_ref())?;
        info!(
            "loaded {} answers and {} allowed guesses",
            answers.len(),
            allowed.len()
        );
        Self::new(answers, allowed)
    }

    /// Build a corpus from string slices
    ///
    /// # Errors
    /// Returns an error if any entry is not a valid word or `answers` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_analyze::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_strs(&["apple", "angle"], &["zesty"]).unwrap();
    /// assert_eq!(corpus.answers().len(), 2);
    /// assert_eq!(corpus.guesses().len(), 3);
    /// ```
    pub fn from_strs(answers: &[&str], allowed: &[&str]) -> Result<Self, AnalysisError> {
        let answers = loader::words_from_slice(answers)?;
        let allowed = loader::words_from_slice(allowed)?;
        Self::new(answers, allowed)
    }

    /// Possible solutions
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Every legal guess, answers included
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Look up a guessable word by text
    ///
    /// # Errors
    /// Returns [`WordError`] if `text` is not a valid word. A valid word that is
    /// simply not in the list yields `Ok(None)`.
    pub fn find_guess(&self, text: &str) -> Result<Option<&Word>, WordError> {
        let word = Word::new(text)?;
        Ok(self.guesses.iter().find(|w| **w == word))
    }
}
