//! Word analysis command
//!
//! Reports how strongly a word matches the answer list and the probability
//! of each feedback outcome.

use crate::analysis::{Breakdown, MatchRates, Session};
use crate::core::{AnalysisError, Word};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Current ranking score, if the word is guessable
    pub score: Option<f64>,
    pub rates: MatchRates,
    pub breakdown: Breakdown,
    pub total_answers: usize,
}

/// Analyze a word against the session's answer list
///
/// The word does not have to be in the guess list; it simply has no score
/// then.
///
/// # Errors
///
/// Returns an error if the word is not 5 ASCII letters.
pub fn analyze_word(session: &mut Session<'_>, word: &str) -> Result<AnalysisResult, AnalysisError> {
    let word = Word::new(word)?;
    let rates = session.match_rates(&word);

    Ok(AnalysisResult {
        word: word.text().to_string(),
        score: session.score_of(&word),
        rates,
        breakdown: session.breakdown(&word),
        total_answers: session.corpus().answers().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Corpus;

    fn corpus() -> Corpus {
        Corpus::from_strs(&["apple", "angle", "atlas"], &["zesty"]).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let result = analyze_word(&mut session, "APPLE").unwrap();

        assert_eq!(result.word, "apple");
        assert!(result.score.is_some());
        assert_eq!(result.total_answers, 3);
        assert!(result.rates.green >= 100.0 / 3.0);
        assert_eq!(result.breakdown.entries.len(), 21);
        assert_eq!(result.breakdown.rates, result.rates);
    }

    #[test]
    fn analyze_unlisted_word_has_no_score() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let result = analyze_word(&mut session, "skiff").unwrap();
        assert!(result.score.is_none());
        assert!(result.rates.green.abs() < 1e-12);
    }

    #[test]
    fn analyze_invalid_word() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        assert!(matches!(
            analyze_word(&mut session, "skiffs"),
            Err(AnalysisError::InvalidWord(_))
        ));
    }
}
