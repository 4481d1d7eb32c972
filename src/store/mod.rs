//! Persisted game state
//!
//! The engines never touch storage; the session loads a [`GameData`] through
//! a [`GameStore`] and saves it back after each mutation.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::{Alphabet, ClueSpec, FoundWords, LetterError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Error type for loading and saving game state
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid game file")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything persisted for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub main_letter: char,
    pub extra_letters: String,
    /// Unix timestamp in seconds
    pub created_at: u64,
    #[serde(default)]
    pub clues: Option<ClueSpec>,
    #[serde(default)]
    pub found_words: FoundWords,
    #[serde(default)]
    pub tried_combinations: BTreeSet<String>,
}

impl GameData {
    /// Start a game with no clues and no words
    ///
    /// # Errors
    /// Returns `LetterError` if the letters do not form a valid alphabet.
    pub fn new(main_letter: char, extra_letters: &str) -> Result<Self, LetterError> {
        let alphabet = Alphabet::new(main_letter, extra_letters)?;
        Ok(Self {
            main_letter: alphabet.main() as char,
            extra_letters: String::from_utf8_lossy(alphabet.extras()).into_owned(),
            created_at: now(),
            clues: None,
            found_words: FoundWords::new(),
            tried_combinations: BTreeSet::new(),
        })
    }

    /// Rebuild the validated alphabet from the stored letters
    ///
    /// # Errors
    /// Returns `LetterError` if the stored letters were edited into an invalid set.
    pub fn alphabet(&self) -> Result<Alphabet, LetterError> {
        Alphabet::new(self.main_letter, &self.extra_letters)
    }

    /// Clues entered so far, or an empty set
    #[must_use]
    pub fn clues_or_default(&self) -> ClueSpec {
        self.clues.clone().unwrap_or_default()
    }
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Where a game is loaded from and saved to
pub trait GameStore {
    /// Load the saved game, or `None` if there is none yet
    ///
    /// # Errors
    /// Returns `StoreError` if the saved game cannot be read or parsed.
    fn load(&self) -> Result<Option<GameData>, StoreError>;

    /// Replace the saved game
    ///
    /// # Errors
    /// Returns `StoreError` if the game cannot be written.
    fn save(&mut self, data: &GameData) -> Result<(), StoreError>;

    /// Forget the saved game
    ///
    /// # Errors
    /// Returns `StoreError` if the saved game cannot be removed.
    fn clear(&mut self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_normalizes_letters() {
        let data = GameData::new('T', "e r a s g").unwrap();
        assert_eq!(data.main_letter, 't');
        assert_eq!(data.extra_letters, "erasg");
        assert!(data.clues.is_none());
        assert!(data.found_words.is_empty());
        assert!(data.created_at > 0);
        assert_eq!(data.alphabet().unwrap().len(), 6);
    }

    #[test]
    fn new_game_rejects_bad_letters() {
        assert!(matches!(
            GameData::new('t', "er"),
            Err(LetterError::ExtraLetterCount(2))
        ));
    }

    #[test]
    fn json_field_names() {
        let mut data = GameData::new('t', "erasg").unwrap();
        data.tried_combinations.insert("trea".to_string());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["mainLetter"], "t");
        assert_eq!(json["extraLetters"], "erasg");
        assert_eq!(json["triedCombinations"][0], "trea");
        assert!(json["clues"].is_null());
    }

    #[test]
    fn optional_fields_default() {
        let data: GameData = serde_json::from_str(
            r#"{"mainLetter": "t", "extraLetters": "erasg", "createdAt": 1}"#,
        )
        .unwrap();
        assert!(data.found_words.is_empty());
        assert!(data.tried_combinations.is_empty());
        assert_eq!(data.clues_or_default(), ClueSpec::new());
    }
}
