//! Player status overlaid on generated combinations
//!
//! A combination is `Correct` when it is a found word, `Tried` when the
//! player typed it and the game rejected it, and `Untried` otherwise.

use super::generator::Combination;
use crate::core::FoundWords;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinationStatus {
    Untried,
    Tried,
    Correct,
}

impl CombinationStatus {
    /// Status of `text` given the found words and the tried set
    #[must_use]
    pub fn of(text: &str, found: &FoundWords, tried: &BTreeSet<String>) -> Self {
        if found.contains(text) {
            Self::Correct
        } else if tried.contains(text) {
            Self::Tried
        } else {
            Self::Untried
        }
    }
}

impl fmt::Display for CombinationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Untried => "untried",
            Self::Tried => "tried",
            Self::Correct => "correct",
        })
    }
}

impl FromStr for CombinationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "untried" | "u" | "pending" => Ok(Self::Untried),
            "tried" | "t" => Ok(Self::Tried),
            "correct" | "c" | "found" => Ok(Self::Correct),
            other => Err(format!(
                "unknown status '{other}' (expected correct, tried or untried)"
            )),
        }
    }
}

/// What must happen to the found words after a status change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoundWordChange {
    Add(String),
    Remove(String),
    None,
}

/// Decide the found-word mutation for moving `text` from `current` to `next`
///
/// Marking a combination correct adds it; moving it away from correct
/// removes it. The caller owns the found-word set and applies the change.
#[must_use]
pub fn status_change(
    text: &str,
    current: CombinationStatus,
    next: CombinationStatus,
) -> FoundWordChange {
    use CombinationStatus::Correct;
    match (current, next) {
        (c, Correct) if c != Correct => FoundWordChange::Add(text.to_string()),
        (Correct, n) if n != Correct => FoundWordChange::Remove(text.to_string()),
        _ => FoundWordChange::None,
    }
}

/// A generated combination with its current status
#[derive(Debug, Clone)]
pub struct AnnotatedCombination {
    pub combination: Combination,
    pub status: CombinationStatus,
}

/// Join generated combinations with the player's found and tried sets
#[must_use]
pub fn annotate(
    combinations: Vec<Combination>,
    found: &FoundWords,
    tried: &BTreeSet<String>,
) -> Vec<AnnotatedCombination> {
    combinations
        .into_iter()
        .map(|combination| {
            let status = CombinationStatus::of(&combination.text, found, tried);
            AnnotatedCombination {
                combination,
                status,
            }
        })
        .collect()
}

/// Score range of a generated list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub min: u32,
    pub max: u32,
    /// Mean score rounded to the nearest integer
    pub mean: u32,
}

impl ScoreSummary {
    /// Summarise scores; all zero for an empty list
    #[must_use]
    pub fn of(combinations: &[Combination]) -> Self {
        let mut tally = ScoreTally::default();
        for combo in combinations {
            tally.add(combo.score);
        }
        tally.summary()
    }
}

/// Running totals behind a [`ScoreSummary`], fed one score at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreTally {
    count: u64,
    sum: u64,
    min: u32,
    max: u32,
}

impl ScoreTally {
    pub fn add(&mut self, score: u32) {
        if self.count == 0 {
            self.min = score;
            self.max = score;
        } else {
            self.min = self.min.min(score);
            self.max = self.max.max(score);
        }
        self.count += 1;
        self.sum += u64::from(score);
    }

    #[must_use]
    pub fn summary(&self) -> ScoreSummary {
        if self.count == 0 {
            return ScoreSummary::default();
        }
        ScoreSummary {
            min: self.min,
            max: self.max,
            mean: (self.sum as f64 / self.count as f64).round() as u32,
        }
    }
}

/// Counts of each status in an annotated list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub correct: usize,
    pub tried: usize,
    pub untried: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn of(annotated: &[AnnotatedCombination]) -> Self {
        annotated.iter().fold(Self::default(), |mut counts, a| {
            counts.add(a.status);
            counts
        })
    }

    pub const fn add(&mut self, status: CombinationStatus) {
        match status {
            CombinationStatus::Correct => self.correct += 1,
            CombinationStatus::Tried => self.tried += 1,
            CombinationStatus::Untried => self.untried += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(text: &str, score: u32) -> Combination {
        Combination {
            text: text.to_string(),
            matching_subgroups: Vec::new(),
            score,
        }
    }

    #[test]
    fn status_precedence() {
        let found = FoundWords::from(vec!["tres".to_string()]);
        let tried: BTreeSet<String> = ["tres".to_string(), "trer".to_string()].into();

        assert_eq!(
            CombinationStatus::of("tres", &found, &tried),
            CombinationStatus::Correct
        );
        assert_eq!(
            CombinationStatus::of("trer", &found, &tried),
            CombinationStatus::Tried
        );
        assert_eq!(
            CombinationStatus::of("trea", &found, &tried),
            CombinationStatus::Untried
        );
    }

    #[test]
    fn status_changes() {
        use CombinationStatus::{Correct, Tried, Untried};

        assert_eq!(
            status_change("tres", Untried, Correct),
            FoundWordChange::Add("tres".to_string())
        );
        assert_eq!(
            status_change("tres", Correct, Tried),
            FoundWordChange::Remove("tres".to_string())
        );
        assert_eq!(status_change("tres", Correct, Correct), FoundWordChange::None);
        assert_eq!(status_change("tres", Untried, Tried), FoundWordChange::None);
    }

    #[test]
    fn status_parsing() {
        assert_eq!("Correct".parse(), Ok(CombinationStatus::Correct));
        assert_eq!("t".parse(), Ok(CombinationStatus::Tried));
        assert_eq!("untried".parse(), Ok(CombinationStatus::Untried));
        assert!("maybe".parse::<CombinationStatus>().is_err());
    }

    #[test]
    fn annotate_and_count() {
        let found = FoundWords::from(vec!["tres".to_string()]);
        let tried: BTreeSet<String> = ["trer".to_string()].into();
        let annotated = annotate(
            vec![combo("tres", 115), combo("trer", 110), combo("trea", 90)],
            &found,
            &tried,
        );

        assert_eq!(
            StatusCounts::of(&annotated),
            StatusCounts {
                correct: 1,
                tried: 1,
                untried: 1
            }
        );
    }

    #[test]
    fn score_summary() {
        let summary = ScoreSummary::of(&[combo("a", 100), combo("b", 90), combo("c", 85)]);
        assert_eq!(
            summary,
            ScoreSummary {
                min: 85,
                max: 100,
                mean: 92
            }
        );
        assert_eq!(ScoreSummary::of(&[]), ScoreSummary::default());
    }

    #[test]
    fn tally_matches_summary() {
        let combos = [combo("a", 100), combo("b", 90), combo("c", 85)];
        let mut tally = ScoreTally::default();
        for c in &combos {
            tally.add(c.score);
        }
        assert_eq!(tally.summary(), ScoreSummary::of(&combos));
        assert_eq!(ScoreTally::default().summary(), ScoreSummary::default());
    }
}
