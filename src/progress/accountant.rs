//! Reconciling found words against clues
//!
//! Each clue slice is tallied on its own: per starting letter and length,
//! per exact letter-set subgroup, and per 2-letter prefix.

use super::Bucket;
use crate::core::{Alphabet, ClueSpec, LetterSet};
use log::debug;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Progress for words starting with one letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterProgress {
    /// One bucket per length listed in the letter's clue
    pub lengths: BTreeMap<usize, Bucket>,
    /// Found counts every word starting with the letter; expected sums the lengths
    pub total: Bucket,
}

impl LetterProgress {
    /// Lengths that still have missing words, with the missing count
    pub fn missing_lengths(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.lengths
            .iter()
            .filter(|(_, b)| b.missing > 0)
            .map(|(&len, b)| (len, b.missing))
    }
}

/// Full progress report for one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressReport {
    /// Every alphabet letter, alphabetical
    pub per_letter: BTreeMap<char, LetterProgress>,
    /// Column totals across letters for every clued length
    pub per_length: BTreeMap<usize, Bucket>,
    /// Subgroups with a positive expected count
    pub per_subgroup: BTreeMap<String, Bucket>,
    /// Prefixes with a positive expected count
    pub per_prefix: BTreeMap<String, Bucket>,
    pub overall_found: u32,
    pub overall_expected: u32,
}

impl ProgressReport {
    /// Found words against the independently entered grand total
    #[must_use]
    pub const fn overall(&self) -> Bucket {
        Bucket::new(self.overall_found, self.overall_expected)
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Compute found, expected and missing counts for every clue bucket
///
/// Subgroup membership is exact letter-set equality: "rest" belongs to
/// subgroup "erst" but "tre" with one letter less or "terras" with one more
/// does not. Prefix membership is a plain starts-with test.
///
/// # Examples
/// ```
/// use paraulogic_assistant::core::{Alphabet, ClueSpec};
/// use paraulogic_assistant::progress::analyze;
///
/// let alphabet = Alphabet::new('t', "erasg").unwrap();
/// let mut clues = ClueSpec::new();
/// clues.per_prefix.insert("tr".to_string(), 5);
///
/// let found = ["trage", "tres", "tregs"].map(String::from);
/// let report = analyze(&found, &clues, &alphabet);
/// let tr = report.per_prefix["tr"];
/// assert_eq!((tr.found, tr.expected, tr.missing), (3, 5, 2));
/// ```
#[must_use]
pub fn analyze(found: &[String], clues: &ClueSpec, alphabet: &Alphabet) -> ProgressReport {
    let mut tally: FxHashMap<(char, usize), u32> = FxHashMap::default();
    let mut by_letter: FxHashMap<char, u32> = FxHashMap::default();
    for word in found {
        if let Some(first) = word.chars().next() {
            *tally.entry((first, word.chars().count())).or_default() += 1;
            *by_letter.entry(first).or_default() += 1;
        }
    }

    let mut per_letter = BTreeMap::new();
    let mut per_length: BTreeMap<usize, Bucket> = BTreeMap::new();
    for letter in alphabet.sorted_letters() {
        let letter = letter as char;
        let mut progress = LetterProgress::default();

        if let Some(clue) = clues.per_letter.get(&letter) {
            for (&length, &expected) in &clue.length_counts {
                let found = tally.get(&(letter, length)).copied().unwrap_or(0);
                let bucket = Bucket::new(found, expected);
                progress.lengths.insert(length, bucket);
                *per_length.entry(length).or_default() += bucket;
            }
        }

        progress.total = Bucket::new(
            by_letter.get(&letter).copied().unwrap_or(0),
            progress.lengths.values().map(|b| b.expected).sum(),
        );
        per_letter.insert(letter, progress);
    }

    let word_sets: Vec<Option<LetterSet>> =
        found.iter().map(|w| LetterSet::from_word(w)).collect();

    let per_subgroup = clues
        .per_subgroup
        .iter()
        .filter(|&(_, &expected)| expected > 0)
        .map(|(key, &expected)| {
            let target = LetterSet::from_word(key);
            let found = word_sets
                .iter()
                .filter(|set| set.is_some() && **set == target)
                .count();
            (key.clone(), Bucket::new(count(found), expected))
        })
        .collect();

    let per_prefix = clues
        .per_prefix
        .iter()
        .filter(|&(_, &expected)| expected > 0)
        .map(|(prefix, &expected)| {
            let found = found.iter().filter(|w| w.starts_with(prefix.as_str())).count();
            (prefix.clone(), Bucket::new(count(found), expected))
        })
        .collect();

    let report = ProgressReport {
        per_letter,
        per_length,
        per_subgroup,
        per_prefix,
        overall_found: count(found.len()),
        overall_expected: clues.total_words,
    };
    debug!(
        "analyze found={} expected={} subgroups={} prefixes={}",
        report.overall_found,
        report.overall_expected,
        report.per_subgroup.len(),
        report.per_prefix.len()
    );
    report
}

/// Counts of found words per exact letter-set and per 2-letter prefix
///
/// This is the breakdown the game shows as hints, computed from the
/// player's own words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundBreakdown {
    pub by_subgroup: BTreeMap<String, u32>,
    pub by_prefix: BTreeMap<String, u32>,
}

#[must_use]
pub fn found_breakdown(found: &[String]) -> FoundBreakdown {
    let mut breakdown = FoundBreakdown::default();
    for word in found {
        if let Some(set) = LetterSet::from_word(word) {
            *breakdown.by_subgroup.entry(set.to_string()).or_default() += 1;
        }
        if let Some(prefix) = word.get(..2) {
            *breakdown.by_prefix.entry(prefix.to_string()).or_default() += 1;
        }
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new('t', "erasg").unwrap()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn clues() -> ClueSpec {
        let mut clues = ClueSpec::new();
        clues.total_words = 20;
        clues.set_letter_length('t', 4, 3);
        clues.set_letter_length('t', 5, 2);
        clues.set_letter_length('g', 4, 1);
        clues.per_subgroup.insert("erst".to_string(), 3);
        clues.per_subgroup.insert("egrt".to_string(), 0);
        clues.per_prefix.insert("tr".to_string(), 5);
        clues.per_prefix.insert("ga".to_string(), 0);
        clues
    }

    #[test]
    fn empty_found_words_are_all_missing() {
        let report = analyze(&[], &clues(), &alphabet());

        assert_eq!(report.overall(), Bucket::new(0, 20));
        for progress in report.per_letter.values() {
            assert_eq!(progress.total.found, 0);
            for bucket in progress.lengths.values() {
                assert_eq!(bucket.found, 0);
                assert_eq!(bucket.missing, bucket.expected);
            }
        }
        assert!(report.per_subgroup.values().all(|b| b.missing == b.expected));
        assert!(report.per_prefix.values().all(|b| b.missing == b.expected));
    }

    #[test]
    fn per_letter_and_length() {
        let found = words(&["tres", "tera", "terra", "gata", "gatera", "seta"]);
        let report = analyze(&found, &clues(), &alphabet());

        let t = &report.per_letter[&'t'];
        assert_eq!(t.lengths[&4], Bucket::new(2, 3));
        assert_eq!(t.lengths[&5], Bucket::new(1, 2));
        assert_eq!(t.total, Bucket::new(3, 5));

        // "gatera" has no clued length but still counts toward the letter total
        let g = &report.per_letter[&'g'];
        assert_eq!(g.lengths[&4], Bucket::new(1, 1));
        assert_eq!(g.total, Bucket::new(2, 1));
        assert_eq!(g.total.missing, 0);

        // Unclued letters still appear with empty lengths
        let s = &report.per_letter[&'s'];
        assert!(s.lengths.is_empty());
        assert_eq!(s.total, Bucket::new(1, 0));

        assert_eq!(report.per_letter.len(), 6);
        assert_eq!(report.per_length[&4], Bucket::new(3, 4));
        assert_eq!(report.per_length[&5], Bucket::new(1, 2));
    }

    #[test]
    fn subgroups_use_exact_letter_sets() {
        let found = words(&["ters", "rest", "terst", "tres", "tre", "terras"]);
        let report = analyze(&found, &clues(), &alphabet());

        // "tre" is a strict subset and "terras" a strict superset
        assert_eq!(report.per_subgroup["erst"], Bucket::new(4, 3));
        assert!(!report.per_subgroup.contains_key("egrt"));
    }

    #[test]
    fn only_the_exact_set_counts() {
        let mut clues = ClueSpec::new();
        clues.per_subgroup.insert("ters".to_string(), 3);
        let found = words(&["ters", "tre", "tras"]);
        let report = analyze(&found, &clues, &alphabet());
        assert_eq!(report.per_subgroup["ters"].found, 1);
        assert_eq!(report.per_subgroup["ters"].missing, 2);
    }

    #[test]
    fn prefixes_use_starts_with() {
        let found = words(&["trage", "tres", "tregs", "terra"]);
        let report = analyze(&found, &clues(), &alphabet());
        assert_eq!(report.per_prefix["tr"], Bucket::new(3, 5));
        assert!(!report.per_prefix.contains_key("ga"));
    }

    #[test]
    fn grand_total_is_independent() {
        let found = words(&["tres"]);
        let mut clues = clues();
        clues.total_words = 0;
        let report = analyze(&found, &clues, &alphabet());
        assert_eq!(report.overall_found, 1);
        assert_eq!(report.overall_expected, 0);
        assert!((report.overall().percent() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_then_remove_restores_counts() {
        let alphabet = alphabet();
        let clues = clues();
        let mut found = words(&["tera", "gata"]);
        let before = analyze(&found, &clues, &alphabet);

        found.push("tres".to_string());
        let after = analyze(&found, &clues, &alphabet);
        assert_eq!(
            after.per_letter[&'t'].lengths[&4].found,
            before.per_letter[&'t'].lengths[&4].found + 1
        );
        assert_eq!(after.per_length[&4].found, before.per_length[&4].found + 1);
        assert_eq!(after.per_prefix["tr"].found, before.per_prefix["tr"].found + 1);
        assert_eq!(
            after.per_subgroup["erst"].found,
            before.per_subgroup["erst"].found + 1
        );
        assert_eq!(after.overall_found, before.overall_found + 1);

        found.pop();
        assert_eq!(analyze(&found, &clues, &alphabet), before);
    }

    #[test]
    fn breakdown_of_found_words() {
        let found = words(&["tres", "rest", "terra", "trage"]);
        let breakdown = found_breakdown(&found);
        assert_eq!(breakdown.by_subgroup["erst"], 2);
        assert_eq!(breakdown.by_subgroup["aert"], 1);
        assert_eq!(breakdown.by_prefix["tr"], 2);
        assert_eq!(breakdown.by_prefix["re"], 1);
    }
}
