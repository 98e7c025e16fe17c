//! Formatting utilities for terminal output

use crate::core::Clue;

/// Format clues as a row of colored squares
#[must_use]
pub fn clues_to_emoji(clues: &[Clue]) -> String {
    clues.iter().map(|clue| clue.emoji()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay out up to `limit` candidates, eight per line
///
/// A trailing line notes how many were left out.
#[must_use]
pub fn format_candidates(candidates: &[String], limit: usize) -> String {
    const PER_LINE: usize = 8;

    let shown = candidates.len().min(limit);
    let mut lines: Vec<String> = candidates[..shown]
        .chunks(PER_LINE)
        .map(|chunk| format!("  {}", chunk.join("  ")))
        .collect();

    if shown < candidates.len() {
        lines.push(format!("  … and {} more", candidates.len() - shown));
    }

    lines.join("\n")
}
