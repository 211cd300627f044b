//! Outcome probability breakdown
//!
//! Treats each of the five letter slots as two independent Bernoulli trials,
//! one for green and one for yellow, using a word's match rates as the
//! success probabilities. The probability of `k` greens and `j` yellows is
//! `Bin(5, k, g) * Bin(5, j, y)`. Greens and yellows are not made mutually
//! exclusive, so the 21 outcomes do not sum to exactly one.

use super::strength::MatchRates;
use crate::core::WORD_LEN;
use std::fmt;

const GREEN: char = '🟩';
const YELLOW: char = '🟨';
const GREY: char = '⬜';

/// A count of green and yellow squares in a feedback row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub greens: u8,
    pub yellows: u8,
}

const fn outcome(greens: u8, yellows: u8) -> Outcome {
    Outcome { greens, yellows }
}

/// Every outcome the breakdown reports, in report order
pub const OUTCOMES: [Outcome; 21] = [
    outcome(0, 0),
    outcome(1, 0),
    outcome(2, 0),
    outcome(3, 0),
    outcome(4, 0),
    outcome(5, 0),
    outcome(0, 1),
    outcome(0, 2),
    outcome(0, 3),
    outcome(0, 4),
    outcome(0, 5),
    outcome(1, 1),
    outcome(1, 2),
    outcome(1, 3),
    outcome(1, 4),
    outcome(2, 1),
    outcome(2, 2),
    outcome(2, 3),
    outcome(3, 1),
    outcome(3, 2),
    outcome(4, 1),
];

impl Outcome {
    /// Probability of this outcome, in `[0, 1]`
    #[must_use]
    pub fn probability(self, rates: MatchRates) -> f64 {
        binomial_term(self.greens, rates.green_probability())
            * binomial_term(self.yellows, rates.yellow_probability())
    }

    /// Decimal places used when rendering this outcome's percentage
    #[must_use]
    pub const fn precision(self) -> usize {
        match (self.greens, self.yellows) {
            (5, 0) => 4,
            (4, 1) => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let greens = usize::from(self.greens);
        let yellows = usize::from(self.yellows);
        let greys = WORD_LEN.saturating_sub(greens + yellows);
        let row: String = std::iter::repeat_n(GREEN, greens)
            .chain(std::iter::repeat_n(YELLOW, yellows))
            .chain(std::iter::repeat_n(GREY, greys))
            .collect();
        f.write_str(&row)
    }
}

/// `C(5, k) * p^k * (1 - p)^(5 - k)`
fn binomial_term(k: u8, p: f64) -> f64 {
    let n = WORD_LEN as i32;
    let k = i32::from(k);
    choose(n, k) * p.powi(k) * (1.0 - p).powi(n - k)
}

fn choose(n: i32, k: i32) -> f64 {
    if k < 0 || k > n {
        return 0.0;
    }
    (0..k).fold(1.0, |acc, i| acc * f64::from(n - i) / f64::from(i + 1))
}

/// Probability of every reported outcome for one word
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub rates: MatchRates,
    /// Outcomes in [`OUTCOMES`] order with percentages in `[0, 100]`
    pub entries: Vec<(Outcome, f64)>,
}

impl Breakdown {
    /// # Examples
    /// ```
    /// use wordle_analyze::analysis::{Breakdown, MatchRates};
    ///
    /// let breakdown = Breakdown::from_rates(MatchRates { green: 20.0, yellow: 10.0 });
    /// assert_eq!(breakdown.entries.len(), 21);
    ///
    /// let lines = breakdown.lines();
    /// assert!(lines[0].starts_with("⬜⬜⬜⬜⬜ : "));
    /// ```
    #[must_use]
    pub fn from_rates(rates: MatchRates) -> Self {
        let entries = OUTCOMES
            .iter()
            .map(|&outcome| (outcome, outcome.probability(rates) * 100.0))
            .collect();
        Self { rates, entries }
    }

    /// Percentage for an outcome, if it is one of [`OUTCOMES`]
    #[must_use]
    pub fn percent(&self, outcome: Outcome) -> Option<f64> {
        self.entries
            .iter()
            .find(|(o, _)| *o == outcome)
            .map(|&(_, pct)| pct)
    }

    /// One formatted line per outcome, e.g. `🟩🟨⬜⬜⬜ : 12.34%`
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|&(outcome, pct)| format!("{outcome} : {pct:.prec$}%", prec = outcome.precision()))
            .collect()
    }
}
