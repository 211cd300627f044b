//! Core domain types for word analysis
//!
//! Words, the alphabet they are drawn from, and the error types shared by the
//! rest of the crate. Nothing in here knows about scoring.

mod alphabet;
mod error;
mod word;

pub use alphabet::{ALPHABET, WORD_LEN, letter_index, parse_letter};
pub use error::AnalysisError;
pub use word::{Word, WordError};
