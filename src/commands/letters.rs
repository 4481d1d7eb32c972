//! Subgroup and prefix listings
//!
//! Every possible subgroup or prefix of the game letters, next to how many
//! found words fall in it and the clue entered for it, if any.

use crate::core::{Alphabet, ClueSpec, FoundWords, all_prefixes, all_subgroups};
use crate::progress::found_breakdown;

/// One row of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub key: String,
    pub found: u32,
    pub expected: Option<u32>,
}

/// Every subgroup of the alphabet, sorted by key
#[must_use]
pub fn list_subgroups(alphabet: &Alphabet, clues: &ClueSpec, found: &FoundWords) -> Vec<ListingEntry> {
    let breakdown = found_breakdown(found.as_slice());
    all_subgroups(alphabet)
        .into_iter()
        .map(|subgroup| {
            let key = subgroup.key();
            ListingEntry {
                found: breakdown.by_subgroup.get(&key).copied().unwrap_or(0),
                expected: clues.per_subgroup.get(&key).copied(),
                key,
            }
        })
        .collect()
}

/// Every 2-letter prefix of the alphabet, sorted
#[must_use]
pub fn list_prefixes(alphabet: &Alphabet, clues: &ClueSpec, found: &FoundWords) -> Vec<ListingEntry> {
    let breakdown = found_breakdown(found.as_slice());
    all_prefixes(alphabet)
        .into_iter()
        .map(|prefix| {
            let key = prefix.to_string();
            ListingEntry {
                found: breakdown.by_prefix.get(&key).copied().unwrap_or(0),
                expected: clues.per_prefix.get(&key).copied(),
                key,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_join_found_and_clues() {
        let alphabet = Alphabet::new('t', "erasg").unwrap();
        let mut clues = ClueSpec::new();
        clues.per_subgroup.insert("erst".to_string(), 3);
        clues.per_prefix.insert("tr".to_string(), 2);
        let found = FoundWords::from(vec!["tres".to_string(), "rest".to_string()]);

        let subgroups = list_subgroups(&alphabet, &clues, &found);
        assert_eq!(subgroups.len(), 57);
        let erst = subgroups.iter().find(|e| e.key == "erst").unwrap();
        assert_eq!((erst.found, erst.expected), (2, Some(3)));

        let prefixes = list_prefixes(&alphabet, &clues, &found);
        assert_eq!(prefixes.len(), 30);
        let tr = prefixes.iter().find(|e| e.key == "tr").unwrap();
        assert_eq!((tr.found, tr.expected), (1, Some(2)));
        let re = prefixes.iter().find(|e| e.key == "re").unwrap();
        assert_eq!((re.found, re.expected), (1, None));
    }
}
