//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a yield percentage as a bar
#[must_use]
pub fn yield_bar(percent: f64, width: usize) -> String {
    create_progress_bar(percent, 100.0, width)
}

/// Render a letter byte for display
#[must_use]
pub fn letter(byte: u8) -> char {
    char::from(byte)
}

/// Render `(letter, count)` pairs as `a:3 b:1 ...`
#[must_use]
pub fn format_counts(counts: &[(u8, u32)]) -> String {
    counts
        .iter()
        .map(|&(l, c)| format!("{}:{c}", letter(l)))
        .collect::<Vec<_>>()
        .join(" ")
}
