//! Found-word and combination-status commands

use crate::core::split_word_list;
use crate::engine::{CombinationStatus, FoundWordChange};
use crate::session::{AddOutcome, Game};
use crate::store::GameStore;
use anyhow::{Context, Result};

/// Add every word of every argument; each argument may be a comma list
///
/// # Errors
///
/// Returns an error if the game cannot be saved.
pub fn add_words<S: GameStore>(game: &mut Game<S>, inputs: &[String]) -> Result<AddOutcome> {
    game.add_words(&inputs.join(","))
        .context("failed to save the found words")
}

/// Words removed and words that were not in the list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub removed: Vec<String>,
    pub not_found: Vec<String>,
}

/// Remove every word of every argument
///
/// # Errors
///
/// Returns an error if the game cannot be saved.
pub fn remove_words<S: GameStore>(game: &mut Game<S>, inputs: &[String]) -> Result<RemoveOutcome> {
    let mut outcome = RemoveOutcome::default();
    for word in inputs.iter().flat_map(|input| split_word_list(input)) {
        if game.remove_word(&word).context("failed to save the found words")? {
            outcome.removed.push(word);
        } else {
            outcome.not_found.push(word);
        }
    }
    Ok(outcome)
}

/// Result of changing a combination's status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkResult {
    pub combination: String,
    pub previous: CombinationStatus,
    pub status: CombinationStatus,
    pub change: FoundWordChange,
}

/// Set the status of a combination
///
/// # Errors
///
/// Returns an error if marking it correct breaks the word rules or the
/// game cannot be saved.
pub fn mark<S: GameStore>(
    game: &mut Game<S>,
    combination: &str,
    status: CombinationStatus,
) -> Result<MarkResult> {
    let combination = combination.trim().to_lowercase();
    let previous = game.status_of(&combination);
    let change = game
        .set_status(&combination, status)
        .with_context(|| format!("cannot mark \"{combination}\" as {status}"))?;
    Ok(MarkResult {
        combination,
        previous,
        status,
        change,
    })
}
