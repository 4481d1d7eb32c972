//! Prefix exploration command
//!
//! Generates the candidate combinations for one prefix and length, overlays
//! the player's statuses and summarises how many words the prefix still hides.

use crate::core::{Alphabet, ClueSpec, FoundWords, Subgroup};
use crate::engine::{
    AnnotatedCombination, CombinationStatus, ScoreSummary, ScoreTally, StatusCounts, annotate,
    generate_best, relevant_subgroups,
};
use crate::progress::Bucket;
use anyhow::{Result, bail};
use std::collections::BTreeSet;

/// Longest prefix accepted, matching the game's 2-letter prefix hints
pub const MAX_PREFIX_LETTERS: usize = 2;
/// Letters enumerated after the prefix; the search visits up to
/// `alphabet.len()` raised to this many sequences
pub const MAX_FREE_LETTERS: usize = 6;

/// Everything an exploration reads from the game
#[derive(Debug, Clone, Copy)]
pub struct ExploreContext<'a> {
    pub alphabet: &'a Alphabet,
    pub clues: &'a ClueSpec,
    pub found: &'a FoundWords,
    pub tried: &'a BTreeSet<String>,
}

/// What to explore
#[derive(Debug, Clone)]
pub struct ExploreConfig {
    pub prefix: String,
    pub length: usize,
    /// Explicit subgroups; the clue subgroups are used when empty
    pub subgroups: Vec<String>,
    /// Keep only the best `limit` combinations
    pub limit: Option<usize>,
    /// Keep only untried combinations; totals still count every status
    pub untried_only: bool,
}

impl ExploreConfig {
    #[must_use]
    pub fn new(prefix: impl Into<String>, length: usize) -> Self {
        Self {
            prefix: prefix.into(),
            length,
            subgroups: Vec::new(),
            limit: None,
            untried_only: false,
        }
    }
}

/// Result of exploring one prefix and length
#[derive(Debug, Clone)]
pub struct ExploreResult {
    pub prefix: String,
    pub length: usize,
    /// Subgroups the combinations were generated against
    pub subgroups: Vec<Subgroup>,
    /// Of those, the ones containing every prefix letter
    pub relevant: Vec<Subgroup>,
    /// Ranked combinations, possibly truncated to the limit
    pub combinations: Vec<AnnotatedCombination>,
    /// Number of combinations before truncation
    pub total: usize,
    pub summary: ScoreSummary,
    pub counts: StatusCounts,
    /// Found words with this prefix against the prefix clue, if one was entered
    pub prefix_progress: Option<Bucket>,
    pub prefix_found: usize,
}

fn resolve_subgroups(config: &ExploreConfig, ctx: &ExploreContext<'_>) -> Result<Vec<Subgroup>> {
    if !config.subgroups.is_empty() {
        return config
            .subgroups
            .iter()
            .map(|s| Subgroup::parse(s, ctx.alphabet).map_err(Into::into))
            .collect();
    }
    let from_clues = ctx.clues.subgroups();
    if from_clues.is_empty() {
        // Without subgroup clues the only constraint is the full letter set
        Ok(Subgroup::from_key(&ctx.alphabet.letter_set().to_string())
            .into_iter()
            .collect())
    } else {
        Ok(from_clues)
    }
}

/// Explore one prefix and length
///
/// # Errors
///
/// Returns an error if:
/// - The prefix uses letters outside the game
/// - The prefix is empty or longer than [`MAX_PREFIX_LETTERS`]
/// - The length is shorter than the prefix or leaves more than
///   [`MAX_FREE_LETTERS`] letters after it
/// - An explicit subgroup is invalid
pub fn explore(config: &ExploreConfig, ctx: &ExploreContext<'_>) -> Result<ExploreResult> {
    let prefix = config.prefix.trim().to_lowercase();
    if let Some(bad) = prefix.bytes().find(|&b| !ctx.alphabet.contains(b)) {
        bail!("prefix letter '{}' is not one of {}", bad as char, ctx.alphabet);
    }
    if prefix.is_empty() || prefix.len() > MAX_PREFIX_LETTERS {
        bail!("prefix must have 1 to {MAX_PREFIX_LETTERS} letters, got '{prefix}'");
    }
    let longest = prefix.len() + MAX_FREE_LETTERS;
    if config.length < prefix.len() || config.length > longest {
        bail!(
            "length must be between {} and {longest} for prefix '{prefix}', got {}",
            prefix.len(),
            config.length
        );
    }

    let subgroups = resolve_subgroups(config, ctx)?;
    let relevant = relevant_subgroups(&prefix, &subgroups);

    let mut total = 0;
    let mut tally = ScoreTally::default();
    let mut counts = StatusCounts::default();
    let kept = generate_best(
        &prefix,
        config.length,
        ctx.alphabet,
        &subgroups,
        config.limit.unwrap_or(usize::MAX),
        |combo| {
            let status = CombinationStatus::of(&combo.text, ctx.found, ctx.tried);
            total += 1;
            tally.add(combo.score);
            counts.add(status);
            !config.untried_only || status == CombinationStatus::Untried
        },
    );
    let combinations = annotate(kept, ctx.found, ctx.tried);
    let summary = tally.summary();

    let prefix_found = ctx.found.iter().filter(|w| w.starts_with(&prefix)).count();
    let prefix_progress = ctx.clues.per_prefix.get(&prefix).map(|&expected| {
        Bucket::new(u32::try_from(prefix_found).unwrap_or(u32::MAX), expected)
    });

    Ok(ExploreResult {
        prefix,
        length: config.length,
        subgroups,
        relevant,
        combinations,
        total,
        summary,
        counts,
        prefix_progress,
        prefix_found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        alphabet: Alphabet,
        clues: ClueSpec,
        found: FoundWords,
        tried: BTreeSet<String>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut clues = ClueSpec::new();
            clues.per_subgroup.insert("erst".to_string(), 3);
            clues.per_prefix.insert("tr".to_string(), 4);
            Self {
                alphabet: Alphabet::new('t', "erasg").unwrap(),
                clues,
                found: FoundWords::from(vec!["tres".to_string(), "terra".to_string()]),
                tried: ["tret".to_string()].into(),
            }
        }

        fn ctx(&self) -> ExploreContext<'_> {
            ExploreContext {
                alphabet: &self.alphabet,
                clues: &self.clues,
                found: &self.found,
                tried: &self.tried,
            }
        }
    }

    #[test]
    fn explore_overlays_status_and_prefix_progress() {
        let fixture = Fixture::new();
        let result = explore(&ExploreConfig::new("TR", 4), &fixture.ctx()).unwrap();

        assert_eq!(result.prefix, "tr");
        assert_eq!(result.subgroups.len(), 1);
        assert_eq!(result.total, result.combinations.len());
        assert_eq!(result.counts.correct, 1);
        assert_eq!(result.counts.tried, 1);
        assert_eq!(result.prefix_found, 1);
        assert_eq!(result.prefix_progress, Some(Bucket::new(1, 4)));

        let tres = result
            .combinations
            .iter()
            .find(|c| c.combination.text == "tres")
            .unwrap();
        assert_eq!(tres.status, CombinationStatus::Correct);
    }

    #[test]
    fn limit_keeps_totals() {
        let fixture = Fixture::new();
        let mut config = ExploreConfig::new("tr", 5);
        config.limit = Some(3);
        let result = explore(&config, &fixture.ctx()).unwrap();
        assert_eq!(result.combinations.len(), 3);
        assert!(result.total > 3);
        assert!(result.summary.max >= result.summary.min);
    }

    #[test]
    fn explicit_subgroups_override_clues() {
        let fixture = Fixture::new();
        let mut config = ExploreConfig::new("ta", 3);
        config.subgroups = vec!["tag".to_string()];
        let result = explore(&config, &fixture.ctx()).unwrap();
        assert_eq!(result.subgroups[0].key(), "agt");
        assert!(result.combinations.iter().any(|c| c.combination.text == "tag"));
        assert!(result.prefix_progress.is_none());
    }

    #[test]
    fn no_subgroup_clues_uses_full_letter_set() {
        let mut fixture = Fixture::new();
        fixture.clues.per_subgroup.clear();
        let result = explore(&ExploreConfig::new("ga", 3), &fixture.ctx()).unwrap();
        assert_eq!(result.subgroups.len(), 1);
        assert_eq!(result.subgroups[0].key(), "aegrst");
        assert!(result.combinations.iter().any(|c| c.combination.text == "gat"));
    }

    #[test]
    fn rejects_bad_input() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        assert!(explore(&ExploreConfig::new("tx", 4), &ctx).is_err());
        assert!(explore(&ExploreConfig::new("tr", 1), &ctx).is_err());
        assert!(explore(&ExploreConfig::new("tre", 4), &ctx).is_err());
        assert!(explore(&ExploreConfig::new("", 3), &ctx).is_err());

        let mut config = ExploreConfig::new("tr", 4);
        config.subgroups = vec!["t".to_string()];
        assert!(explore(&config, &ctx).is_err());
    }

    #[test]
    fn free_letters_are_bounded() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let longest = 2 + MAX_FREE_LETTERS;
        assert!(explore(&ExploreConfig::new("tr", longest + 1), &ctx).is_err());
        assert!(explore(&ExploreConfig::new("t", 1 + MAX_FREE_LETTERS + 1), &ctx).is_err());
        assert!(explore(&ExploreConfig::new("t", 10), &ctx).is_err());

        let mut config = ExploreConfig::new("tr", longest);
        config.limit = Some(5);
        let result = explore(&config, &ctx).unwrap();
        assert_eq!(result.combinations.len(), 5);
        assert!(result.total > 5);
    }

    #[test]
    fn limited_exploration_matches_full_ranking() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let full = explore(&ExploreConfig::new("te", 5), &ctx).unwrap();

        let mut config = ExploreConfig::new("te", 5);
        config.limit = Some(4);
        let limited = explore(&config, &ctx).unwrap();

        assert_eq!(limited.total, full.total);
        assert_eq!(limited.summary, full.summary);
        assert_eq!(limited.counts, full.counts);
        let texts = |r: &ExploreResult| -> Vec<String> {
            r.combinations
                .iter()
                .map(|c| c.combination.text.clone())
                .collect()
        };
        assert_eq!(texts(&limited), texts(&full)[..4]);
    }

    #[test]
    fn untried_only_skips_found_and_tried() {
        let fixture = Fixture::new();
        let mut config = ExploreConfig::new("tr", 4);
        config.untried_only = true;
        let result = explore(&config, &fixture.ctx()).unwrap();

        assert_eq!(result.counts.correct, 1);
        assert_eq!(result.counts.tried, 1);
        assert_eq!(result.combinations.len(), result.total - 2);
        assert!(
            result
                .combinations
                .iter()
                .all(|c| c.status == CombinationStatus::Untried)
        );
    }
}
