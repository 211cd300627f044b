//! The lowercase alphabet words are built from

use super::AnalysisError;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Letters in scan order. Ties during ranking are broken by this order.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Index of a lowercase letter within [`ALPHABET`]
///
/// Returns `None` for anything outside `a..=z`.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Parse a user-supplied letter, accepting either case
///
/// # Errors
/// Returns [`AnalysisError::InvalidLetter`] if `c` is not an ASCII letter.
pub fn parse_letter(c: char) -> Result<u8, AnalysisError> {
    if c.is_ascii_alphabetic() {
        Ok(c.to_ascii_lowercase() as u8)
    } else {
        Err(AnalysisError::InvalidLetter(c))
    }
}
