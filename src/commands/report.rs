//! Progress report command

use crate::core::{Alphabet, ClueSpec, FoundWords};
use crate::progress::{
    FoundBreakdown, ProgressReport, Recommendation, analyze, found_breakdown, recommend,
};

/// Everything the report screen shows
#[derive(Debug, Clone)]
pub struct ReportResult {
    pub letters: String,
    pub found_count: usize,
    pub progress: ProgressReport,
    pub recommendations: Vec<Recommendation>,
    pub breakdown: FoundBreakdown,
    /// True when no clue of any kind has been entered
    pub no_clues: bool,
}

/// Analyze the found words against the clues and rank the next letters to search
#[must_use]
pub fn build_report(
    alphabet: &Alphabet,
    clues: &ClueSpec,
    found: &FoundWords,
    top: usize,
) -> ReportResult {
    let progress = analyze(found.as_slice(), clues, alphabet);
    let recommendations = recommend(&progress, top);
    ReportResult {
        letters: alphabet.to_string(),
        found_count: found.len(),
        recommendations,
        breakdown: found_breakdown(found.as_slice()),
        no_clues: *clues == ClueSpec::default(),
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_without_clues() {
        let alphabet = Alphabet::new('t', "erasg").unwrap();
        let found = FoundWords::from(vec!["tres".to_string()]);
        let result = build_report(&alphabet, &ClueSpec::new(), &found, 4);

        assert!(result.no_clues);
        assert_eq!(result.found_count, 1);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.breakdown.by_prefix["tr"], 1);
        assert_eq!(result.letters, "[T] E R A S G");
    }

    #[test]
    fn report_respects_top() {
        let alphabet = Alphabet::new('t', "erasg").unwrap();
        let mut clues = ClueSpec::new();
        for letter in ['t', 'e', 'r', 'a', 's', 'g'] {
            clues.set_letter_length(letter, 5, 1);
        }
        let result = build_report(&alphabet, &clues, &FoundWords::new(), 2);
        assert!(!result.no_clues);
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].letter, 'a');
    }
}
