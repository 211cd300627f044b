//! Letter occurrence counts over the answer list

use crate::core::{ALPHABET, WORD_LEN, Word, letter_index};

/// Occurrence count per letter
///
/// A letter is either tracked (`Some(count)`, possibly zero) or not a key at
/// all. Positional tables only track letters that were seen; the overall table
/// tracks the whole alphabet from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts([Option<u32>; 26]);

impl LetterCounts {
    /// A table with no tracked letters
    #[must_use]
    pub const fn unseeded() -> Self {
        Self([None; 26])
    }

    /// A table tracking every letter at zero
    #[must_use]
    pub const fn seeded() -> Self {
        Self([Some(0); 26])
    }

    fn increment(&mut self, letter: u8) {
        if let Some(idx) = letter_index(letter) {
            let slot = &mut self.0[idx];
            *slot = Some(slot.unwrap_or(0) + 1);
        }
    }

    /// Count for a letter, or `None` if the letter is not tracked
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<u32> {
        letter_index(letter).and_then(|idx| self.0[idx])
    }

    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.get(letter).is_some()
    }

    /// Number of tracked letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().flatten().sum()
    }

    /// Tracked letters and their counts in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        ALPHABET
            .iter()
            .zip(self.0.iter())
            .filter_map(|(&letter, count)| count.map(|c| (letter, c)))
    }
}

/// Positional and overall letter counts for an answer list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    positions: [LetterCounts; WORD_LEN],
    overall: LetterCounts,
}

impl FrequencyTable {
    /// Count every letter of every answer, per position and overall
    ///
    /// # Examples
    /// ```
    /// use wordle_analyze::analysis::FrequencyTable;
    /// use wordle_analyze::wordlists::loader::words_from_slice;
    ///
    /// let answers = words_from_slice(&["apple", "angle", "atlas"]).unwrap();
    /// let table = FrequencyTable::from_answers(&answers);
    ///
    /// assert_eq!(table.position(0).get(b'a'), Some(3));
    /// assert_eq!(table.position(0).get(b'z'), None);
    /// assert_eq!(table.overall().get(b'z'), Some(0));
    /// ```
    #[must_use]
    pub fn from_answers(answers: &[Word]) -> Self {
        let mut positions: [LetterCounts; WORD_LEN] =
            std::array::from_fn(|_| LetterCounts::unseeded());
        let mut overall = LetterCounts::seeded();

        for word in answers {
            for (position, &letter) in word.chars().iter().enumerate() {
                positions[position].increment(letter);
                overall.increment(letter);
            }
        }

        Self { positions, overall }
    }

    /// Counts at a 0-based position
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn position(&self, position: usize) -> &LetterCounts {
        &self.positions[position]
    }

    #[must_use]
    pub const fn positions(&self) -> &[LetterCounts; WORD_LEN] {
        &self.positions
    }

    /// Counts across every position
    #[must_use]
    pub const fn overall(&self) -> &LetterCounts {
        &self.overall
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn table(words: &[&str]) -> FrequencyTable {
        FrequencyTable::from_answers(&words_from_slice(words).unwrap())
    }

    #[test]
    fn overall_tracks_all_letters() {
        let table = table(&["apple", "angle", "atlas"]);
        assert_eq!(table.overall().len(), 26);
        for &letter in ALPHABET {
            assert!(table.overall().contains(letter));
        }
        assert_eq!(table.overall().get(b'q'), Some(0));
    }

    #[test]
    fn positional_tracks_only_seen_letters() {
        let table = table(&["apple", "angle", "atlas"]);
        assert_eq!(table.position(0).len(), 1);
        assert_eq!(table.position(1).len(), 3);
        assert!(!table.position(1).contains(b'a'));
    }

    #[test]
    fn positional_sums_equal_answer_count() {
        let words = ["apple", "angle", "atlas", "zesty", "geese"];
        let table = table(&words);
        for position in table.positions() {
            assert_eq!(position.total() as usize, words.len());
        }
        assert_eq!(table.overall().total() as usize, words.len() * WORD_LEN);
    }

    #[test]
    fn overall_counts_repeats() {
        let table = table(&["apple", "angle", "atlas"]);
        assert_eq!(table.overall().get(b'a'), Some(4));
        assert_eq!(table.overall().get(b'p'), Some(2));
        assert_eq!(table.overall().get(b'l'), Some(3));
        assert_eq!(table.overall().get(b'e'), Some(2));
    }

    #[test]
    fn iter_is_alphabetical() {
        let table = table(&["zesty", "apple", "melon"]);
        let letters: Vec<u8> = table.position(0).iter().map(|(l, _)| l).collect();
        assert_eq!(letters, b"amz");
    }

    #[test]
    fn empty_counts() {
        assert!(LetterCounts::unseeded().is_empty());
        assert_eq!(LetterCounts::seeded().total(), 0);
        assert_eq!(LetterCounts::seeded().len(), 26);
    }
}
