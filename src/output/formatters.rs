//! Formatting utilities for terminal output

use crate::core::ScoreInfo;

/// Format a likeness the way the terminal prints it
#[must_use]
pub fn likeness_label(likeness: usize, len: usize) -> String {
    format!("Likeness={likeness}/{len}")
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

/// One bar per likeness value, scaled to the largest bucket
#[must_use]
pub fn bucket_histogram(score: &ScoreInfo, width: usize) -> Vec<String> {
    let largest = score.worst_case() as f64;

    score
        .bucket_sizes()
        .iter()
        .enumerate()
        .map(|(likeness, &size)| {
            format!(
                "{likeness:>2} │{} {size}",
                create_progress_bar(size as f64, largest, width)
            )
        })
        .collect()
}
