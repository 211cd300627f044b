//! Session configuration
//!
//! Where the word lists live and which constraints to apply before any
//! report is produced.

use crate::analysis::{Constraint, FixedLetter, Session};
use crate::core::AnalysisError;
use crate::wordlists::Corpus;
use log::info;
use std::path::PathBuf;

/// Default answer list file name
pub const DEFAULT_ANSWERS_FILE: &str = "wordle-answers-alphabetical.txt";

/// Default allowed guess list file name
pub const DEFAULT_ALLOWED_FILE: &str = "wordle-allowed-guesses.txt";

/// Inputs needed to build a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub answers_path: PathBuf,
    pub allowed_path: PathBuf,
    /// Letters known to be absent, e.g. `"soadclint"`
    pub absent: Option<String>,
    /// Letters known to sit at a position
    pub fixed: Vec<FixedLetter>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            answers_path: PathBuf::from(DEFAULT_ANSWERS_FILE),
            allowed_path: PathBuf::from(DEFAULT_ALLOWED_FILE),
            absent: None,
            fixed: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Constraints in application order: absent letters first, then fixed letters
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidLetter`] if `absent` contains a non-letter.
    pub fn constraints(&self) -> Result<Vec<Constraint>, AnalysisError> {
        let mut constraints = Vec::with_capacity(self.fixed.len() + 1);
        if let Some(absent) = self.absent.as_deref().filter(|s| !s.trim().is_empty()) {
            constraints.push(Constraint::absent(absent)?);
        }
        constraints.extend(self.fixed.iter().copied().map(Constraint::Fixed));
        Ok(constraints)
    }

    /// Read both word lists
    ///
    /// # Errors
    /// Fails if either list cannot be read or is invalid.
    pub fn load_corpus(&self) -> Result<Corpus, AnalysisError> {
        Corpus::load(&self.answers_path, &self.allowed_path)
    }

    /// Build a session over `corpus` with the configured constraints applied
    ///
    /// # Errors
    /// Returns an error if a configured constraint is invalid.
    pub fn build_session<'a>(&self, corpus: &'a Corpus) -> Result<Session<'a>, AnalysisError> {
        let constraints = self.constraints()?;
        let mut session = Session::new(corpus);
        for constraint in &constraints {
            session.apply(constraint);
        }
        if !constraints.is_empty() {
            info!("applied {} constraints", constraints.len());
        }
        Ok(session)
    }
}
