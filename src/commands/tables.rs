//! Letter table reports
//!
//! Zipf rankings for a single table, and the raw counts and overall scores
//! the rankings were built from.

use crate::analysis::{Session, TableId, ZipfRankEntry};
use crate::core::WORD_LEN;

/// Ranked letters of one table
#[derive(Debug, Clone)]
pub struct ZipfReport {
    pub table: TableId,
    pub entries: Vec<ZipfRankEntry>,
}

/// Zipf ranking of a table
#[must_use]
pub fn zipf_report(session: &Session<'_>, table: TableId) -> ZipfReport {
    ZipfReport {
        table,
        entries: session.zipf_ranks(table).to_vec(),
    }
}

/// Letter counts per position and overall, with current overall scores
#[derive(Debug, Clone)]
pub struct LetterReport {
    pub positions: [Vec<(u8, u32)>; WORD_LEN],
    pub overall: Vec<(u8, u32)>,
    pub overall_scores: Vec<(u8, f64)>,
}

/// Counts and scores of every table in a session
#[must_use]
pub fn letter_report(session: &Session<'_>) -> LetterReport {
    let frequencies = session.frequencies();
    LetterReport {
        positions: std::array::from_fn(|p| frequencies.position(p).iter().collect()),
        overall: frequencies.overall().iter().collect(),
        overall_scores: session.overall_scores().eligible().collect(),
    }
}
