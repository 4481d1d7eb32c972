//! Formatting utilities for terminal output

use crate::engine::CombinationStatus;
use crate::progress::Bucket;

/// Create a progress bar string for a percentage
#[must_use]
pub fn create_progress_bar(percent: f64, width: usize) -> String {
    // Cast is safe: clamped to [0, width]
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a percentage with no decimals, as the game does
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.0}%")
}

/// Found/expected cell, with the missing count when there is one
#[must_use]
pub fn format_bucket(bucket: &Bucket) -> String {
    if bucket.missing > 0 {
        format!("{}/{} (-{})", bucket.found, bucket.expected, bucket.missing)
    } else {
        format!("{}/{}", bucket.found, bucket.expected)
    }
}

/// One-character marker for a combination status
#[must_use]
pub const fn status_symbol(status: CombinationStatus) -> char {
    match status {
        CombinationStatus::Correct => '✓',
        CombinationStatus::Tried => '✗',
        CombinationStatus::Untried => '·',
    }
}

/// Singular or plural form of "word"
#[must_use]
pub const fn words(count: u32) -> &'static str {
    if count == 1 { "word" } else { "words" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_clamped() {
        assert_eq!(create_progress_bar(100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 10), "█████░░░░░");
    }

    #[test]
    fn bucket_cells() {
        assert_eq!(format_bucket(&Bucket::new(2, 5)), "2/5 (-3)");
        assert_eq!(format_bucket(&Bucket::new(6, 5)), "6/5");
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(format_percent(66.666), "67%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn status_symbols_differ() {
        assert_ne!(
            status_symbol(CombinationStatus::Correct),
            status_symbol(CombinationStatus::Tried)
        );
        assert_eq!(words(1), "word");
        assert_eq!(words(3), "words");
    }
}
