//! Clue editing commands

use crate::core::{BulkKind, ClueError, LetterError, MIN_WORD_LENGTH, parse_bulk};
use crate::session::Game;
use crate::store::GameStore;
use anyhow::{Context, Result, bail};

/// Entries applied from a bulk edit and the tokens that were rejected
#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub applied: Vec<(String, u32)>,
    pub errors: Vec<ClueError>,
}

/// Set the grand total of words
///
/// # Errors
///
/// Returns an error if the game cannot be saved.
pub fn set_total<S: GameStore>(game: &mut Game<S>, total: u32) -> Result<()> {
    game.update_clues(|clues| clues.total_words = total)
        .context("failed to save the clues")
}

/// Set the expected count for words starting with `letter` of `length` letters
///
/// # Errors
///
/// Returns an error if the letter is not part of the game or the game
/// cannot be saved.
pub fn set_letter<S: GameStore>(
    game: &mut Game<S>,
    letter: char,
    length: usize,
    count: u32,
) -> Result<()> {
    let letter = letter.to_ascii_lowercase();
    if !letter.is_ascii_lowercase() || !game.alphabet().contains(letter as u8) {
        return Err(LetterError::NotInAlphabet(letter).into());
    }
    if length < MIN_WORD_LENGTH {
        bail!("words have at least {MIN_WORD_LENGTH} letters");
    }
    game.update_clues(|clues| clues.set_letter_length(letter, length, count))
        .context("failed to save the clues")
}

/// Apply a bulk `letters-count` entry to the subgroup or prefix clues
///
/// Valid tokens are applied even when others are rejected.
///
/// # Errors
///
/// Returns an error if the game cannot be saved.
pub fn apply_bulk<S: GameStore>(
    game: &mut Game<S>,
    input: &str,
    kind: BulkKind,
) -> Result<BulkOutcome> {
    let parsed = parse_bulk(input, kind, game.alphabet());
    if !parsed.entries.is_empty() {
        game.update_clues(|clues| {
            let map = match kind {
                BulkKind::Subgroups => &mut clues.per_subgroup,
                BulkKind::Prefixes => &mut clues.per_prefix,
            };
            for (key, count) in &parsed.entries {
                if *count == 0 {
                    map.remove(key);
                } else {
                    map.insert(key.clone(), *count);
                }
            }
        })
        .context("failed to save the clues")?;
    }
    Ok(BulkOutcome {
        applied: parsed.entries,
        errors: parsed.errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn game() -> Game<MemoryStore> {
        Game::create(MemoryStore::new(), 't', "erasg").unwrap()
    }

    #[test]
    fn total_and_letters() {
        let mut game = game();
        set_total(&mut game, 42).unwrap();
        set_letter(&mut game, 'T', 4, 3).unwrap();
        assert_eq!(game.clues().total_words, 42);
        assert_eq!(game.clues().expected('t', 4), 3);

        set_letter(&mut game, 't', 4, 0).unwrap();
        assert!(game.clues().per_letter.is_empty());
    }

    #[test]
    fn letter_outside_game_is_rejected() {
        let mut game = game();
        assert!(set_letter(&mut game, 'x', 4, 1).is_err());
        assert!(set_letter(&mut game, 't', 2, 1).is_err());
    }

    #[test]
    fn bulk_applies_valid_tokens_and_removes_zeros() {
        let mut game = game();
        let outcome = apply_bulk(&mut game, "rest-3 tag-2 xyz-1", BulkKind::Subgroups).unwrap();
        assert_eq!(outcome.applied.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(game.clues().per_subgroup.get("erst"), Some(&3));

        apply_bulk(&mut game, "ters-0", BulkKind::Subgroups).unwrap();
        assert!(!game.clues().per_subgroup.contains_key("erst"));
        assert_eq!(game.clues().per_subgroup.get("agt"), Some(&2));
    }

    #[test]
    fn bulk_prefixes() {
        let mut game = game();
        apply_bulk(&mut game, "tr-5 ga:2", BulkKind::Prefixes).unwrap();
        let clues = game.clues();
        assert_eq!(clues.per_prefix.get("tr"), Some(&5));
        assert_eq!(clues.per_prefix.get("ga"), Some(&2));
    }
}
