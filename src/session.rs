//! Game session
//!
//! [`Game`] owns the persisted [`GameData`] and the validated alphabet,
//! applies every mutation the engines ask for, and saves through the
//! injected [`GameStore`] after each change.

use crate::core::{Alphabet, ClueSpec, FoundWords, LetterError, WordError, split_word_list};
use crate::engine::{CombinationStatus, FoundWordChange, status_change};
use crate::progress::{ProgressReport, analyze};
use crate::store::{GameData, GameStore, StoreError};
use log::{info, warn};
use std::collections::BTreeSet;
use thiserror::Error;

/// Error type for session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no game yet; start one with `paraulogic new <MAIN> <EXTRAS>`")]
    NoGame,
    #[error("invalid game letters")]
    Letters(#[from] LetterError),
    #[error("invalid word")]
    Word(#[from] WordError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of adding a batch of typed words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    pub added: Vec<String>,
    pub duplicates: Vec<String>,
    pub rejected: Vec<(String, WordError)>,
}

/// An open game bound to its store
#[derive(Debug)]
pub struct Game<S: GameStore> {
    store: S,
    data: GameData,
    alphabet: Alphabet,
}

impl<S: GameStore> Game<S> {
    /// Start a new game, replacing whatever the store held
    ///
    /// # Errors
    /// Returns `SessionError` if the letters are invalid or the game cannot be saved.
    pub fn create(mut store: S, main_letter: char, extra_letters: &str) -> Result<Self, SessionError> {
        let data = GameData::new(main_letter, extra_letters)?;
        let alphabet = data.alphabet()?;
        store.save(&data)?;
        info!("new game {alphabet}");
        Ok(Self {
            store,
            data,
            alphabet,
        })
    }

    /// Open the game saved in `store`
    ///
    /// Words that no longer validate against the stored letters are kept
    /// but reported.
    ///
    /// # Errors
    /// Returns `SessionError::NoGame` if nothing is saved, or another
    /// variant if the saved game cannot be read or has invalid letters.
    pub fn open(store: S) -> Result<Self, SessionError> {
        let data = store.load()?.ok_or(SessionError::NoGame)?;
        let alphabet = data.alphabet()?;
        let invalid = data.found_words.invalid_words(&alphabet);
        if !invalid.is_empty() {
            warn!(
                "{} saved words do not fit {alphabet}: {}",
                invalid.len(),
                invalid.join(", ")
            );
        }
        Ok(Self {
            store,
            data,
            alphabet,
        })
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub const fn data(&self) -> &GameData {
        &self.data
    }

    #[must_use]
    pub const fn found_words(&self) -> &FoundWords {
        &self.data.found_words
    }

    #[must_use]
    pub const fn tried(&self) -> &BTreeSet<String> {
        &self.data.tried_combinations
    }

    /// Clues entered so far, or an empty set
    #[must_use]
    pub fn clues(&self) -> ClueSpec {
        self.data.clues_or_default()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reconcile the found words with the current clues
    #[must_use]
    pub fn report(&self) -> ProgressReport {
        analyze(self.data.found_words.as_slice(), &self.clues(), &self.alphabet)
    }

    fn save(&mut self) -> Result<(), SessionError> {
        self.store.save(&self.data)?;
        Ok(())
    }

    /// Add every word of a comma-separated entry
    ///
    /// Invalid words are collected in the outcome rather than failing the batch.
    ///
    /// # Errors
    /// Returns `SessionError` if the game cannot be saved.
    pub fn add_words(&mut self, input: &str) -> Result<AddOutcome, SessionError> {
        let mut outcome = AddOutcome::default();
        for word in split_word_list(input) {
            match self.data.found_words.add(&word, &self.alphabet) {
                Ok(true) => outcome.added.push(word),
                Ok(false) => outcome.duplicates.push(word),
                Err(e) => outcome.rejected.push((word, e)),
            }
        }
        if !outcome.added.is_empty() {
            info!("added {}", outcome.added.join(", "));
            self.save()?;
        }
        Ok(outcome)
    }

    /// Remove a found word; returns whether it was present
    ///
    /// # Errors
    /// Returns `SessionError` if the game cannot be saved.
    pub fn remove_word(&mut self, raw: &str) -> Result<bool, SessionError> {
        let removed = self.data.found_words.remove(raw);
        if removed {
            info!("removed {}", raw.trim());
            self.save()?;
        }
        Ok(removed)
    }

    /// Edit the clues in place and save
    ///
    /// # Errors
    /// Returns `SessionError` if the game cannot be saved.
    pub fn update_clues(&mut self, edit: impl FnOnce(&mut ClueSpec)) -> Result<(), SessionError> {
        let mut clues = self.clues();
        edit(&mut clues);
        self.data.clues = Some(clues);
        self.save()
    }

    /// Current status of a combination
    #[must_use]
    pub fn status_of(&self, combination: &str) -> CombinationStatus {
        CombinationStatus::of(
            combination,
            &self.data.found_words,
            &self.data.tried_combinations,
        )
    }

    /// Move a combination to `next` and apply the resulting found-word change
    ///
    /// Only `Tried` keeps the combination in the tried set.
    ///
    /// # Errors
    /// Returns `SessionError::Word` if marking it correct fails word
    /// validation, or a store error if the game cannot be saved.
    pub fn set_status(
        &mut self,
        combination: &str,
        next: CombinationStatus,
    ) -> Result<FoundWordChange, SessionError> {
        let combination = combination.trim().to_lowercase();
        let change = status_change(&combination, self.status_of(&combination), next);
        match &change {
            FoundWordChange::Add(word) => {
                self.data.found_words.add(word, &self.alphabet)?;
            }
            FoundWordChange::Remove(word) => {
                self.data.found_words.remove(word);
            }
            FoundWordChange::None => {}
        }
        if next == CombinationStatus::Tried {
            self.data.tried_combinations.insert(combination);
        } else {
            self.data.tried_combinations.remove(&combination);
        }
        self.save()?;
        Ok(change)
    }

    /// Remove the game from its store and hand the store back
    ///
    /// # Errors
    /// Returns `SessionError::Store` if the saved game cannot be removed.
    pub fn delete(mut self) -> Result<S, SessionError> {
        self.store.clear()?;
        info!("deleted game {}", self.alphabet);
        Ok(self.store)
    }

    /// Forget every tried combination
    ///
    /// # Errors
    /// Returns `SessionError` if the game cannot be saved.
    pub fn clear_tried(&mut self) -> Result<usize, SessionError> {
        let count = self.data.tried_combinations.len();
        self.data.tried_combinations.clear();
        self.save()?;
        Ok(count)
    }
}
