//! Wordle Analyzer
//!
//! Ranks Wordle guesses by scoring each word's letters against the answer
//! list with positional and overall letter frequencies, and estimates how a
//! word is likely to light up.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_analyze::analysis::Session;
//! use wordle_analyze::wordlists::Corpus;
//!
//! let corpus = Corpus::from_strs(&["apple", "angle", "atlas"], &["zesty"]).unwrap();
//! let mut session = Session::new(&corpus);
//!
//! // Feedback: no e anywhere
//! session.eliminate_letters("e").unwrap();
//! for scored in session.top(2) {
//!     println!("{} {:.2}", scored.word, scored.score);
//! }
//! ```

// Core domain types
pub mod core;

// Frequency analysis, scoring and ranking
pub mod analysis;

// Word lists
pub mod wordlists;

// Session configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
