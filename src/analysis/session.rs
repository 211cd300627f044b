//! Analysis session
//!
//! Owns every table derived from a corpus and keeps the ranking current as
//! constraints are applied.

use super::breakdown::Breakdown;
use super::constraints::{self, Constraint, FixedLetter};
use super::frequency::FrequencyTable;
use super::ranker::{WordScore, rank_words};
use super::score::ScoreTable;
use super::strength::{MatchRates, match_rates};
use super::zipf::{TableId, ZipfRankEntry, zipf_scores};
use crate::core::{AnalysisError, WORD_LEN, Word};
use crate::wordlists::Corpus;
use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Score tables, ranking and cached match rates for one corpus
///
/// Constraints only ever remove scores. Start a new session to reset.
pub struct Session<'a> {
    corpus: &'a Corpus,
    frequencies: FrequencyTable,
    positions: [ScoreTable; WORD_LEN],
    overall: ScoreTable,
    position_ranks: [Vec<ZipfRankEntry>; WORD_LEN],
    overall_ranks: Vec<ZipfRankEntry>,
    ranking: Vec<WordScore<'a>>,
    match_cache: FxHashMap<String, MatchRates>,
}

impl<'a> Session<'a> {
    /// Count the answers, score every table and rank every guess
    ///
    /// # Examples
    /// ```
    /// use wordle_analyze::analysis::Session;
    /// use wordle_analyze::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_strs(&["apple", "angle", "atlas"], &["zzzzz"]).unwrap();
    /// let mut session = Session::new(&corpus);
    ///
    /// session.fix_letter_at_position('a', 1).unwrap();
    /// assert_eq!(session.top(1)[0].word.text(), "angle");
    /// ```
    #[must_use]
    pub fn new(corpus: &'a Corpus) -> Self {
        let frequencies = FrequencyTable::from_answers(corpus.answers());

        let position_scores: [_; WORD_LEN] =
            std::array::from_fn(|p| zipf_scores(frequencies.position(p)));
        let overall_scores = zipf_scores(frequencies.overall());

        let mut positions: [ScoreTable; WORD_LEN] = std::array::from_fn(|_| ScoreTable::unseen());
        let mut position_ranks: [Vec<ZipfRankEntry>; WORD_LEN] = std::array::from_fn(|_| Vec::new());
        for (p, scores) in position_scores.into_iter().enumerate() {
            positions[p] = scores.table;
            position_ranks[p] = scores.ranks;
        }

        let mut session = Self {
            corpus,
            frequencies,
            positions,
            overall: overall_scores.table,
            position_ranks,
            overall_ranks: overall_scores.ranks,
            ranking: Vec::new(),
            match_cache: FxHashMap::default(),
        };
        session.rerank();
        info!(
            "session built over {} answers, {} guesses ranked",
            corpus.answers().len(),
            session.ranking.len()
        );
        session
    }

    fn rerank(&mut self) {
        self.ranking = rank_words(self.corpus.guesses(), &self.positions, &self.overall);
        debug!("re-ranked {} guesses", self.ranking.len());
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Score table for a 0-based position
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn position_scores(&self, position: usize) -> &ScoreTable {
        &self.positions[position]
    }

    #[must_use]
    pub const fn overall_scores(&self) -> &ScoreTable {
        &self.overall
    }

    /// Ranked letters of a table as built from the answer counts
    ///
    /// # Panics
    /// Panics if a position index is >= 5
    #[must_use]
    pub fn zipf_ranks(&self, table: TableId) -> &[ZipfRankEntry] {
        match table {
            TableId::Position(p) => &self.position_ranks[p],
            TableId::Overall => &self.overall_ranks,
        }
    }

    /// Every guess, lowest (best) score first
    #[must_use]
    pub fn ranking(&self) -> &[WordScore<'a>] {
        &self.ranking
    }

    /// The `n` best guesses
    #[must_use]
    pub fn top(&self, n: usize) -> &[WordScore<'a>] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// Current score of a guess, if it is in the guess list
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<f64> {
        self.ranking
            .iter()
            .find(|s| s.word == word)
            .map(|s| s.score)
    }

    /// Rule out letters confirmed absent, then re-rank
    ///
    /// Returns how many table entries were removed.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidLetter`] for any non-letter character;
    /// nothing is changed in that case.
    pub fn eliminate_letters(&mut self, letters: &str) -> Result<usize, AnalysisError> {
        let constraint = Constraint::absent(letters)?;
        Ok(self.apply(&constraint))
    }

    /// Pin `letter` to a 1-based `position`, then re-rank
    ///
    /// Returns how many entries were removed from that position's table.
    ///
    /// # Errors
    /// Returns an error if `letter` is not a letter or `position` is outside `1..=5`.
    pub fn fix_letter_at_position(
        &mut self,
        letter: char,
        position: usize,
    ) -> Result<usize, AnalysisError> {
        let fixed = FixedLetter::new(letter, position)?;
        Ok(self.apply(&Constraint::Fixed(fixed)))
    }

    /// Apply a constraint and re-rank
    pub fn apply(&mut self, constraint: &Constraint) -> usize {
        let removed = match constraint {
            Constraint::Absent(letters) => {
                let removed =
                    constraints::eliminate_letters(letters, &mut self.positions, &mut self.overall);
                debug!(
                    "eliminated {:?}: {removed} entries removed",
                    String::from_utf8_lossy(letters)
                );
                removed
            }
            Constraint::Fixed(fixed) => {
                let removed = constraints::fix_letter(*fixed, &mut self.positions);
                debug!("fixed {fixed}: {removed} entries removed");
                removed
            }
        };
        self.rerank();
        removed
    }

    /// Green and yellow yields of a word, cached per word
    pub fn match_rates(&mut self, word: &Word) -> MatchRates {
        if let Some(&rates) = self.match_cache.get(word.text()) {
            return rates;
        }
        let rates = match_rates(word, self.corpus.answers());
        self.match_cache.insert(word.text().to_string(), rates);
        rates
    }

    /// Yields for several words, computing uncached ones in parallel
    ///
    /// `on_computed` is called once per newly computed word.
    pub fn match_rates_many<F>(&mut self, words: &[&Word], on_computed: F) -> Vec<MatchRates>
    where
        F: Fn() + Sync,
    {
        let answers = self.corpus.answers();
        let missing: Vec<&Word> = words
            .iter()
            .copied()
            .filter(|w| !self.match_cache.contains_key(w.text()))
            .collect();

        let computed: Vec<(String, MatchRates)> = missing
            .par_iter()
            .map(|w| {
                let rates = match_rates(w, answers);
                on_computed();
                (w.text().to_string(), rates)
            })
            .collect();
        self.match_cache.extend(computed);

        words.iter().map(|w| self.match_cache[w.text()]).collect()
    }

    /// Outcome probabilities for a word
    pub fn breakdown(&mut self, word: &Word) -> Breakdown {
        Breakdown::from_rates(self.match_rates(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ranker::ELIMINATED_PENALTY;
    use crate::analysis::{LetterState, Outcome};

    fn corpus() -> Corpus {
        Corpus::from_strs(
            &["apple", "angle", "atlas"],
            &["zesty", "bland", "eerie", "tapas"],
        )
        .unwrap()
    }

    #[test]
    fn ranks_every_guess() {
        let corpus = corpus();
        let session = Session::new(&corpus);
        assert_eq!(session.ranking().len(), corpus.guesses().len());
        assert_eq!(session.top(100).len(), corpus.guesses().len());
        assert_eq!(session.top(2).len(), 2);
    }

    #[test]
    fn first_position_rank_matches_worked_example() {
        let corpus = corpus();
        let session = Session::new(&corpus);
        let ranks = session.zipf_ranks(TableId::Position(0));

        assert_eq!(ranks.len(), 1);
        assert_eq!(ranks[0].letter, b'a');
        assert!((ranks[0].relative_frequency - 1.0).abs() < 1e-12);
        assert!((ranks[0].zipf_weight - 0.5).abs() < 1e-12);
        assert_eq!(session.zipf_ranks(TableId::Overall).len(), 26);
    }

    #[test]
    fn eliminating_e_removes_its_scores() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let removed = session.eliminate_letters("e").unwrap();
        assert!(removed > 0);

        assert_eq!(session.overall_scores().state(b'e'), LetterState::Eliminated);
        for p in 0..WORD_LEN {
            assert!(!session.position_scores(p).is_eligible(b'e'));
        }

        // The stored ranking was rebuilt from the edited tables
        for scored in session.ranking() {
            let expected =
                crate::analysis::score_word(scored.word, &session.positions, &session.overall);
            assert!((scored.score - expected).abs() < 1e-9);
        }

        // eerie has e at three positions, each now costing the full penalty
        let eerie = corpus.find_guess("eerie").unwrap().unwrap();
        assert!(session.score_of(eerie).unwrap() >= 3.0 * ELIMINATED_PENALTY);
    }

    #[test]
    fn elimination_twice_is_a_no_op() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        session.eliminate_letters("e").unwrap();
        let before: Vec<(String, f64)> = session
            .ranking()
            .iter()
            .map(|s| (s.word.text().to_string(), s.score))
            .collect();

        assert_eq!(session.eliminate_letters("e").unwrap(), 0);
        let after: Vec<(String, f64)> = session
            .ranking()
            .iter()
            .map(|s| (s.word.text().to_string(), s.score))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn fixing_a_letter_penalizes_other_starts() {
        let corpus = Corpus::from_strs(&["apple", "angle", "atlas", "zesty"], &["bland"]).unwrap();
        let mut session = Session::new(&corpus);
        let bland = corpus.find_guess("bland").unwrap().unwrap();
        let zesty = corpus.find_guess("zesty").unwrap().unwrap();
        let zesty_before = session.score_of(zesty).unwrap();

        session.fix_letter_at_position('a', 1).unwrap();

        let first = session.position_scores(0);
        assert!(first.is_eligible(b'a'));
        assert_eq!(first.eligible().count(), 1);

        // zesty loses its positional z score and gains the penalty
        let z_score = session
            .zipf_ranks(TableId::Position(0))
            .iter()
            .find(|e| e.letter == b'z')
            .unwrap()
            .cumulative_score;
        let zesty_after = session.score_of(zesty).unwrap();
        assert!((zesty_after - (zesty_before - z_score + ELIMINATED_PENALTY)).abs() < 1e-9);

        // bland never had a positional b score, so it was already penalized
        assert!(session.score_of(bland).unwrap() >= ELIMINATED_PENALTY);
        assert!(session.top(1)[0].word.text().starts_with('a'));
    }

    #[test]
    fn invalid_constraints_are_rejected() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        assert!(matches!(
            session.fix_letter_at_position('a', 0),
            Err(AnalysisError::InvalidPosition(0))
        ));
        assert!(matches!(
            session.fix_letter_at_position('1', 2),
            Err(AnalysisError::InvalidLetter('1'))
        ));
        assert!(session.eliminate_letters("ab-").is_err());
        assert!(session.overall_scores().is_eligible(b'a'));
    }

    #[test]
    fn match_rates_are_cached() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let apple = Word::new("apple").unwrap();

        let first = session.match_rates(&apple);
        assert_eq!(session.match_cache.len(), 1);
        assert_eq!(session.match_rates(&apple), first);
        assert_eq!(session.match_cache.len(), 1);
    }

    #[test]
    fn match_rates_many_matches_single() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let words: Vec<&Word> = corpus.guesses().iter().collect();
        let calls = std::sync::atomic::AtomicUsize::new(0);

        let many = session.match_rates_many(&words, || {
            calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        });
        assert_eq!(calls.into_inner(), words.len());
        for (word, rates) in words.iter().zip(&many) {
            assert_eq!(*rates, match_rates(word, corpus.answers()));
        }
    }

    #[test]
    fn breakdown_uses_word_rates() {
        let corpus = corpus();
        let mut session = Session::new(&corpus);
        let apple = Word::new("apple").unwrap();
        let breakdown = session.breakdown(&apple);
        assert_eq!(breakdown.rates, session.match_rates(&apple));
        assert!(breakdown.percent(Outcome { greens: 0, yellows: 0 }).is_some());
    }
}
