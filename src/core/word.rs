//! Found words
//!
//! Normalization of typed words and the validated set of words the player
//! has already found.

use super::letters::{Alphabet, is_letter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// Error type for words that cannot be part of the found set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("empty word")]
    Empty,
    #[error("word must have at least {MIN_WORD_LENGTH} letters, got {0}")]
    TooShort(usize),
    #[error("word \"{0}\" may only contain letters")]
    InvalidCharacters(String),
    #[error("word must contain the main letter '{}'", .0.to_ascii_uppercase())]
    MissingMainLetter(char),
    #[error("letter '{}' is not available", .0.to_ascii_uppercase())]
    LetterNotAvailable(char),
}

/// Fold a typed word into the game's plain a-z form
///
/// Lowercases, folds Catalan accents, drops hyphens, dots and the
/// middle dot of "l·l", and keeps only the first whitespace-separated token
/// (the game shows words as "terra, terres").
///
/// # Examples
/// ```
/// use paraulogic_assistant::core::normalize_word;
///
/// assert_eq!(normalize_word("  Trèvol "), "trevol");
/// assert_eq!(normalize_word("col·lega"), "collega");
/// assert_eq!(normalize_word("ésser verb"), "esser");
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    let token = raw.split_whitespace().next().unwrap_or_default();
    token
        .chars()
        .filter(|c| !matches!(c, '-' | '.' | '·'))
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'á' => 'a',
            'è' | 'é' => 'e',
            'í' | 'ï' => 'i',
            'ò' | 'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

/// Split a comma-separated entry into normalized, non-empty words
#[must_use]
pub fn split_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Check a normalized word against the game rules
///
/// # Errors
/// Returns `WordError` if the word is shorter than 3 letters, contains
/// non-letters or unavailable letters, or lacks the main letter.
pub fn validate_word(word: &str, alphabet: &Alphabet) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if !word.bytes().all(is_letter) {
        return Err(WordError::InvalidCharacters(word.to_string()));
    }
    if word.len() < MIN_WORD_LENGTH {
        return Err(WordError::TooShort(word.len()));
    }
    if let Some(missing) = word.bytes().find(|&b| !alphabet.contains(b)) {
        return Err(WordError::LetterNotAvailable(missing as char));
    }
    if !word.bytes().any(|b| b == alphabet.main()) {
        return Err(WordError::MissingMainLetter(alphabet.main() as char));
    }
    Ok(())
}

/// The distinct words found so far, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoundWords {
    words: Vec<String>,
}

impl FoundWords {
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Normalize, validate and add a word
    ///
    /// Returns `Ok(false)` when the word was already present.
    ///
    /// # Errors
    /// Returns `WordError` if the normalized word breaks the game rules.
    ///
    /// # Examples
    /// ```
    /// use paraulogic_assistant::core::{Alphabet, FoundWords};
    ///
    /// let alphabet = Alphabet::new('t', "erasg").unwrap();
    /// let mut found = FoundWords::new();
    /// assert_eq!(found.add("Terra", &alphabet), Ok(true));
    /// assert_eq!(found.add("terra", &alphabet), Ok(false));
    /// assert!(found.add("erra", &alphabet).is_err());
    /// ```
    pub fn add(&mut self, raw: &str, alphabet: &Alphabet) -> Result<bool, WordError> {
        let word = normalize_word(raw);
        validate_word(&word, alphabet)?;
        if self.contains(&word) {
            return Ok(false);
        }
        self.words.push(word);
        Ok(true)
    }

    /// Remove a word; returns whether it was present
    pub fn remove(&mut self, raw: &str) -> bool {
        let word = normalize_word(raw);
        let before = self.words.len();
        self.words.retain(|w| *w != word);
        self.words.len() != before
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words that no longer satisfy the rules for `alphabet`
    #[must_use]
    pub fn invalid_words(&self, alphabet: &Alphabet) -> Vec<&str> {
        self.iter()
            .filter(|w| validate_word(w, alphabet).is_err())
            .collect()
    }
}

impl From<Vec<String>> for FoundWords {
    fn from(words: Vec<String>) -> Self {
        let mut found = Self::new();
        for word in words {
            if !found.contains(&word) {
                found.words.push(word);
            }
        }
        found
    }
}
