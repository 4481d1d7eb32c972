//! Clue specification
//!
//! The expected word counts the game reveals as hints: per starting letter
//! and length, per exact letter subgroup, and per 2-letter prefix, plus the
//! grand total. The three slices are observed separately and are never
//! cross-checked against each other.

use super::letters::{Alphabet, LetterError, Prefix, Subgroup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Expected counts for words starting with one letter, keyed by length
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterClue {
    pub length_counts: BTreeMap<usize, u32>,
}

impl LetterClue {
    /// Total expected words for this letter, derived from the length counts
    #[must_use]
    pub fn total(&self) -> u32 {
        self.length_counts.values().sum()
    }
}

/// All clues entered for one game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClueSpec {
    pub total_words: u32,
    pub per_letter: BTreeMap<char, LetterClue>,
    pub per_subgroup: BTreeMap<String, u32>,
    pub per_prefix: BTreeMap<String, u32>,
}

impl ClueSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expected words starting with `letter` with `length` letters
    #[must_use]
    pub fn expected(&self, letter: char, length: usize) -> u32 {
        self.per_letter
            .get(&letter)
            .and_then(|clue| clue.length_counts.get(&length))
            .copied()
            .unwrap_or(0)
    }

    /// Set an expected count for a letter and length; 0 removes the entry
    pub fn set_letter_length(&mut self, letter: char, length: usize, count: u32) {
        if count == 0 {
            if let Some(clue) = self.per_letter.get_mut(&letter) {
                clue.length_counts.remove(&length);
                if clue.length_counts.is_empty() {
                    self.per_letter.remove(&letter);
                }
            }
        } else {
            self.per_letter
                .entry(letter)
                .or_default()
                .length_counts
                .insert(length, count);
        }
    }

    /// Set an expected count for a subgroup; 0 removes the entry
    pub fn set_subgroup(&mut self, subgroup: Subgroup, count: u32) {
        set_or_remove(&mut self.per_subgroup, subgroup.key(), count);
    }

    /// Set an expected count for a prefix; 0 removes the entry
    pub fn set_prefix(&mut self, prefix: Prefix, count: u32) {
        set_or_remove(&mut self.per_prefix, prefix.to_string(), count);
    }

    /// Subgroups with a positive expected count, skipping malformed keys
    #[must_use]
    pub fn subgroups(&self) -> Vec<Subgroup> {
        self.per_subgroup
            .iter()
            .filter(|&(_, &count)| count > 0)
            .filter_map(|(key, _)| Subgroup::from_key(key))
            .collect()
    }

    /// Sum of the per-letter expectations (not necessarily `total_words`)
    #[must_use]
    pub fn letter_sum(&self) -> u32 {
        self.per_letter.values().map(LetterClue::total).sum()
    }
}

fn set_or_remove(map: &mut BTreeMap<String, u32>, key: String, count: u32) {
    if count == 0 {
        map.remove(&key);
    } else {
        map.insert(key, count);
    }
}

/// Error for one token of a bulk clue entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    #[error("\"{0}\" is not in the form letters-count (e.g. egir-8)")]
    Malformed(String),
    #[error("\"{token}\": {source}")]
    InvalidLetters {
        token: String,
        #[source]
        source: LetterError,
    },
}

/// Which clue map a bulk entry targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkKind {
    Subgroups,
    Prefixes,
}

/// Outcome of parsing a bulk entry: accepted keys plus per-token errors
#[derive(Debug, Default)]
pub struct BulkEntries {
    pub entries: Vec<(String, u32)>,
    pub errors: Vec<ClueError>,
}

/// Parse whitespace-separated `letters-count` tokens as shown by the game
///
/// Subgroup letters are canonicalised, so `rest-2` and `ters-2` target the
/// same entry. A count of 0 is kept so callers can remove entries.
///
/// # Examples
/// ```
/// use paraulogic_assistant::core::{Alphabet, BulkKind, parse_bulk};
///
/// let alphabet = Alphabet::new('t', "erasg").unwrap();
/// let parsed = parse_bulk("rest-3 tr:2 xx-1", BulkKind::Subgroups, &alphabet);
/// assert_eq!(parsed.entries, vec![("erst".to_string(), 3), ("rt".to_string(), 2)]);
/// assert_eq!(parsed.errors.len(), 1);
/// ```
#[must_use]
pub fn parse_bulk(input: &str, kind: BulkKind, alphabet: &Alphabet) -> BulkEntries {
    let mut parsed = BulkEntries::default();
    for token in input.split_whitespace() {
        match parse_token(token, kind, alphabet) {
            Ok(entry) => parsed.entries.push(entry),
            Err(e) => parsed.errors.push(e),
        }
    }
    parsed
}

fn parse_token(token: &str, kind: BulkKind, alphabet: &Alphabet) -> Result<(String, u32), ClueError> {
    let malformed = || ClueError::Malformed(token.to_string());
    let (letters, count) = token.split_once(['-', ':']).ok_or_else(malformed)?;
    let count: u32 = count.parse().map_err(|_| malformed())?;

    let key = match kind {
        BulkKind::Subgroups => Subgroup::parse(letters, alphabet).map(Subgroup::key),
        BulkKind::Prefixes => Prefix::parse(letters, alphabet).map(|p| p.to_string()),
    }
    .map_err(|source| ClueError::InvalidLetters {
        token: token.to_string(),
        source,
    })?;

    Ok((key, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new('t', "erasg").unwrap()
    }

    #[test]
    fn letter_lengths_and_totals() {
        let mut clues = ClueSpec::new();
        clues.set_letter_length('t', 4, 3);
        clues.set_letter_length('t', 5, 2);
        clues.set_letter_length('g', 3, 1);

        assert_eq!(clues.expected('t', 4), 3);
        assert_eq!(clues.expected('t', 6), 0);
        assert_eq!(clues.expected('x', 4), 0);
        assert_eq!(clues.per_letter[&'t'].total(), 5);
        assert_eq!(clues.letter_sum(), 6);

        clues.set_letter_length('g', 3, 0);
        assert!(!clues.per_letter.contains_key(&'g'));
    }

    #[test]
    fn subgroups_skip_zero_and_malformed() {
        let mut clues = ClueSpec::new();
        clues.per_subgroup.insert("erst".to_string(), 2);
        clues.per_subgroup.insert("egrt".to_string(), 0);
        clues.per_subgroup.insert("t".to_string(), 4);

        let keys: Vec<String> = clues.subgroups().into_iter().map(Subgroup::key).collect();
        assert_eq!(keys, vec!["erst"]);
    }

    #[test]
    fn set_subgroup_canonicalises_key() {
        let alphabet = alphabet();
        let mut clues = ClueSpec::new();
        clues.set_subgroup(Subgroup::parse("ters", &alphabet).unwrap(), 3);
        assert_eq!(clues.per_subgroup.get("erst"), Some(&3));

        clues.set_subgroup(Subgroup::parse("rest", &alphabet).unwrap(), 0);
        assert!(clues.per_subgroup.is_empty());
    }

    #[test]
    fn bulk_prefixes() {
        let parsed = parse_bulk("tr-5 ta-0 te", BulkKind::Prefixes, &alphabet());
        assert_eq!(
            parsed.entries,
            vec![("tr".to_string(), 5), ("ta".to_string(), 0)]
        );
        assert!(matches!(parsed.errors[0], ClueError::Malformed(_)));
    }

    #[test]
    fn bulk_rejects_bad_letters() {
        let parsed = parse_bulk("tex-2 tt-1 tr-x", BulkKind::Subgroups, &alphabet());
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.errors.len(), 3);
        assert!(matches!(
            parsed.errors[0],
            ClueError::InvalidLetters {
                source: LetterError::NotInAlphabet('x'),
                ..
            }
        ));
    }

    #[test]
    fn json_shape() {
        let mut clues = ClueSpec::new();
        clues.total_words = 40;
        clues.set_letter_length('t', 4, 3);
        clues.per_prefix.insert("tr".to_string(), 5);

        let json = serde_json::to_value(&clues).unwrap();
        assert_eq!(json["totalWords"], 40);
        assert_eq!(json["perLetter"]["t"]["lengthCounts"]["4"], 3);
        assert_eq!(json["perPrefix"]["tr"], 5);

        let back: ClueSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, clues);
    }

    #[test]
    fn missing_fields_default() {
        let clues: ClueSpec = serde_json::from_str(r#"{"totalWords": 12}"#).unwrap();
        assert_eq!(clues.total_words, 12);
        assert!(clues.per_letter.is_empty());
    }
}
