//! "Where to search next" ranking
//!
//! Letters with missing words are ranked by their shortest missing length,
//! then by how much is missing.

use super::Bucket;
use super::accountant::ProgressReport;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Number of letters featured by default
pub const DEFAULT_RECOMMENDATIONS: usize = 4;

/// A prefix or subgroup that still has missing words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub key: String,
    pub missing: u32,
}

/// One featured letter and the clues that narrow its search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub letter: char,
    /// Lengths with missing words for this letter
    pub missing_by_length: BTreeMap<usize, u32>,
    pub shortest_length: usize,
    /// Missing words at `shortest_length`
    pub shortest_missing: u32,
    pub total_missing: u32,
    /// Prefixes starting with the letter, shortest key first
    pub prefixes: Vec<Lead>,
    /// Subgroups containing the letter, shortest key first
    pub subgroups: Vec<Lead>,
}

/// Shortest missing length first, then most missing, then alphabetical
fn priority(a: &Recommendation, b: &Recommendation) -> Ordering {
    a.shortest_length
        .cmp(&b.shortest_length)
        .then_with(|| b.total_missing.cmp(&a.total_missing))
        .then_with(|| a.letter.cmp(&b.letter))
}

fn leads<'a>(
    buckets: impl Iterator<Item = (&'a String, &'a Bucket)>,
    keep: impl Fn(&str) -> bool,
) -> Vec<Lead> {
    let mut leads: Vec<Lead> = buckets
        .filter(|(key, bucket)| bucket.missing > 0 && keep(key))
        .map(|(key, bucket)| Lead {
            key: key.clone(),
            missing: bucket.missing,
        })
        .collect();
    leads.sort_by(|a, b| a.key.len().cmp(&b.key.len()).then_with(|| a.key.cmp(&b.key)));
    leads
}

/// Rank the letters that still have missing words and keep the top `limit`
///
/// # Examples
/// ```
/// use paraulogic_assistant::core::{Alphabet, ClueSpec};
/// use paraulogic_assistant::progress::{analyze, recommend};
///
/// let alphabet = Alphabet::new('t', "erasg").unwrap();
/// let mut clues = ClueSpec::new();
/// clues.set_letter_length('t', 4, 1);
/// clues.set_letter_length('g', 4, 2);
/// clues.set_letter_length('s', 3, 1);
///
/// let report = analyze(&[], &clues, &alphabet);
/// let letters: Vec<char> = recommend(&report, 4).iter().map(|r| r.letter).collect();
/// assert_eq!(letters, vec!['s', 'g', 't']);
/// ```
#[must_use]
pub fn recommend(report: &ProgressReport, limit: usize) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = report
        .per_letter
        .iter()
        .filter_map(|(&letter, progress)| {
            let missing_by_length: BTreeMap<usize, u32> = progress.missing_lengths().collect();
            let (&shortest_length, &shortest_missing) = missing_by_length.iter().next()?;
            let total_missing = missing_by_length.values().sum();

            Some(Recommendation {
                letter,
                shortest_length,
                shortest_missing,
                total_missing,
                prefixes: leads(report.per_prefix.iter(), |key| key.starts_with(letter)),
                subgroups: leads(report.per_subgroup.iter(), |key| key.contains(letter)),
                missing_by_length,
            })
        })
        .collect();

    ranked.sort_by(priority);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, ClueSpec};
    use crate::progress::analyze;

    fn alphabet() -> Alphabet {
        Alphabet::new('t', "erasg").unwrap()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn shortest_length_then_most_missing() {
        let mut clues = ClueSpec::new();
        clues.set_letter_length('a', 5, 2);
        clues.set_letter_length('b', 3, 1);
        clues.set_letter_length('c', 5, 3);
        let alphabet = Alphabet::new('a', "bcde").unwrap();

        let report = analyze(&[], &clues, &alphabet);
        let ranked = recommend(&report, 4);
        let letters: Vec<char> = ranked.iter().map(|r| r.letter).collect();
        assert_eq!(letters, vec!['b', 'c', 'a']);
        assert_eq!(ranked[1].total_missing, 3);
    }

    #[test]
    fn equal_priority_is_alphabetical() {
        let mut clues = ClueSpec::new();
        clues.set_letter_length('s', 4, 2);
        clues.set_letter_length('e', 4, 2);
        let report = analyze(&[], &clues, &alphabet());
        let letters: Vec<char> = recommend(&report, 4).iter().map(|r| r.letter).collect();
        assert_eq!(letters, vec!['e', 's']);
    }

    #[test]
    fn complete_letters_are_skipped() {
        let mut clues = ClueSpec::new();
        clues.set_letter_length('t', 4, 1);
        clues.set_letter_length('g', 4, 1);
        let report = analyze(&words(&["tres"]), &clues, &alphabet());
        let ranked = recommend(&report, 4);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].letter, 'g');
    }

    #[test]
    fn shortest_missing_ignores_completed_lengths() {
        let mut clues = ClueSpec::new();
        clues.set_letter_length('t', 3, 1);
        clues.set_letter_length('t', 5, 2);
        clues.set_letter_length('t', 6, 1);
        let report = analyze(&words(&["tea"]), &clues, &alphabet());

        let rec = &recommend(&report, 4)[0];
        assert_eq!(rec.shortest_length, 5);
        assert_eq!(rec.shortest_missing, 2);
        assert_eq!(rec.total_missing, 3);
        assert_eq!(rec.missing_by_length, BTreeMap::from([(5, 2), (6, 1)]));
    }

    #[test]
    fn limit_truncates() {
        let mut clues = ClueSpec::new();
        for letter in ['t', 'e', 'r', 'a', 's', 'g'] {
            clues.set_letter_length(letter, 4, 1);
        }
        let report = analyze(&[], &clues, &alphabet());
        assert_eq!(recommend(&report, DEFAULT_RECOMMENDATIONS).len(), 4);
        assert!(recommend(&report, 0).is_empty());
    }

    #[test]
    fn leads_filtered_and_sorted_by_length() {
        let mut clues = ClueSpec::new();
        clues.set_letter_length('t', 4, 3);
        clues.per_prefix.insert("tr".to_string(), 2);
        clues.per_prefix.insert("te".to_string(), 1);
        clues.per_prefix.insert("ga".to_string(), 4);
        clues.per_subgroup.insert("aerst".to_string(), 1);
        clues.per_subgroup.insert("erst".to_string(), 2);
        clues.per_subgroup.insert("ags".to_string(), 3);

        let report = analyze(&words(&["tela"]), &clues, &alphabet());
        let rec = &recommend(&report, 4)[0];
        assert_eq!(rec.letter, 't');

        // "te" is complete, "ga" starts with another letter
        let prefixes: Vec<&str> = rec.prefixes.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(prefixes, vec!["tr"]);
        assert_eq!(rec.prefixes[0].missing, 2);

        // "ags" lacks the letter; shorter keys come first
        let subgroups: Vec<&str> = rec.subgroups.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(subgroups, vec!["erst", "aerst"]);
    }

    #[test]
    fn nothing_missing_means_no_recommendations() {
        let report = analyze(&words(&["tres"]), &ClueSpec::new(), &alphabet());
        assert!(recommend(&report, 4).is_empty());
    }
}
