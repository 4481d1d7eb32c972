//! Candidate combination generation
//!
//! Extends a prefix one alphabet letter at a time up to a target length and
//! keeps the sequences a real word could plausibly have: they contain the
//! main letter, have no run of three identical letters, and only use letters
//! of at least one known subgroup.

use super::score::score;
use crate::core::{Alphabet, LetterSet, Subgroup, has_triple_run};
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One generated candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub text: String,
    /// Input subgroups whose letters cover every letter of `text`
    pub matching_subgroups: Vec<Subgroup>,
    pub score: u32,
}

/// Highest score first, then alphabetical
fn rank(a: &Combination, b: &Combination) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.text.cmp(&b.text))
}

/// Heap entry ordered so the worst-ranked kept candidate sits on top
struct Ranked(Combination);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        rank(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        rank(&self.0, &other.0)
    }
}

/// Enumerate and rank every candidate of `total_length` letters starting with `prefix`
///
/// The main letter is taken from `alphabet`. Returns an empty list when
/// `total_length` is shorter than the prefix or the prefix uses letters
/// outside the alphabet. The cost grows as `alphabet.len()` raised to the
/// number of free positions; callers bound `total_length`.
///
/// # Examples
/// ```
/// use paraulogic_assistant::core::{Alphabet, Subgroup};
/// use paraulogic_assistant::engine::generate;
///
/// let alphabet = Alphabet::new('t', "erasg").unwrap();
/// let subgroups = [Subgroup::parse("ters", &alphabet).unwrap()];
///
/// let results = generate("tr", 4, &alphabet, &subgroups);
/// assert!(results.iter().any(|c| c.text == "tres"));
/// assert!(results.iter().all(|c| c.text.starts_with("tr")));
/// assert!(generate("tr", 1, &alphabet, &subgroups).is_empty());
/// ```
#[must_use]
pub fn generate(
    prefix: &str,
    total_length: usize,
    alphabet: &Alphabet,
    subgroups: &[Subgroup],
) -> Vec<Combination> {
    let mut results = Vec::new();
    search(prefix, total_length, alphabet, subgroups, |combo| {
        results.push(combo);
    });
    results.sort_by(rank);
    results.dedup_by(|a, b| a.text == b.text);

    debug!(
        "generate prefix={prefix:?} length={total_length} subgroups={} -> {} candidates",
        subgroups.len(),
        results.len()
    );
    results
}

/// Stream every candidate through `visit` and keep the best `keep` it accepts
///
/// `visit` sees each candidate once, in search order, and returns whether
/// it may be kept. Memory stays bounded by `keep` whatever the number of
/// candidates. The kept list is ranked like [`generate`].
///
/// # Examples
/// ```
/// use paraulogic_assistant::core::{Alphabet, Subgroup};
/// use paraulogic_assistant::engine::{generate, generate_best};
///
/// let alphabet = Alphabet::new('t', "erasg").unwrap();
/// let subgroups = [Subgroup::parse("aerst", &alphabet).unwrap()];
///
/// let mut seen = 0;
/// let best = generate_best("tr", 5, &alphabet, &subgroups, 3, |_| {
///     seen += 1;
///     true
/// });
/// let all = generate("tr", 5, &alphabet, &subgroups);
/// assert_eq!(seen, all.len());
/// assert_eq!(best, all[..3]);
/// ```
#[must_use]
pub fn generate_best(
    prefix: &str,
    total_length: usize,
    alphabet: &Alphabet,
    subgroups: &[Subgroup],
    keep: usize,
    mut visit: impl FnMut(&Combination) -> bool,
) -> Vec<Combination> {
    let mut heap: BinaryHeap<Ranked> = BinaryHeap::new();
    search(prefix, total_length, alphabet, subgroups, |combo| {
        if !visit(&combo) || keep == 0 {
            return;
        }
        if heap.len() == keep {
            let better = heap
                .peek()
                .is_some_and(|worst| rank(&combo, &worst.0) == Ordering::Less);
            if !better {
                return;
            }
            heap.pop();
        }
        heap.push(Ranked(combo));
    });

    let mut best: Vec<Combination> = heap.into_sorted_vec().into_iter().map(|r| r.0).collect();
    best.dedup_by(|a, b| a.text == b.text);
    debug!(
        "generate_best prefix={prefix:?} length={total_length} keep={keep} -> {} kept",
        best.len()
    );
    best
}

fn search(
    prefix: &str,
    total_length: usize,
    alphabet: &Alphabet,
    subgroups: &[Subgroup],
    emit: impl FnMut(Combination),
) {
    let prefix = prefix.as_bytes();
    if total_length < prefix.len() || !prefix.iter().all(|&b| alphabet.contains(b)) {
        return;
    }

    let letters: Vec<u8> = alphabet.letters().collect();
    let mut search = Search {
        letters: &letters,
        main: alphabet.main(),
        subgroups,
        emit,
    };

    let mut buffer = Vec::with_capacity(total_length);
    buffer.extend_from_slice(prefix);
    let has_main = prefix.contains(&search.main);
    search.extend(&mut buffer, total_length - prefix.len(), has_main);
}

struct Search<'a, F> {
    letters: &'a [u8],
    main: u8,
    subgroups: &'a [Subgroup],
    emit: F,
}

impl<F: FnMut(Combination)> Search<'_, F> {
    fn extend(&mut self, buffer: &mut Vec<u8>, remaining: usize, has_main: bool) {
        if remaining == 0 {
            self.leaf(buffer, has_main);
            return;
        }

        for &letter in self.letters {
            // Prune before recursing: a third identical letter kills the branch
            if let [.., a, b] = buffer.as_slice()
                && *a == letter
                && *b == letter
            {
                continue;
            }
            buffer.push(letter);
            self.extend(buffer, remaining - 1, has_main || letter == self.main);
            buffer.pop();
        }
    }

    fn leaf(&mut self, candidate: &[u8], has_main: bool) {
        // The prefix itself is never pruned, so re-check the full sequence
        if !has_main || has_triple_run(candidate) {
            return;
        }
        let Some(letters) = LetterSet::from_bytes(candidate) else {
            return;
        };

        let matching_subgroups: Vec<Subgroup> = self
            .subgroups
            .iter()
            .copied()
            .filter(|s| letters.is_subset_of(s.letters()))
            .collect();
        if matching_subgroups.is_empty() {
            return;
        }

        let text = String::from_utf8_lossy(candidate).into_owned();
        let score = score(&text);
        (self.emit)(Combination {
            text,
            matching_subgroups,
            score,
        });
    }
}

/// Subgroups containing every letter of `prefix`
///
/// These are the only subgroups a word with this prefix can belong to.
#[must_use]
pub fn relevant_subgroups(prefix: &str, subgroups: &[Subgroup]) -> Vec<Subgroup> {
    let Some(letters) = LetterSet::from_word(prefix) else {
        return Vec::new();
    };
    subgroups
        .iter()
        .copied()
        .filter(|s| letters.is_subset_of(s.letters()))
        .collect()
}
