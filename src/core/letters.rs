//! Letter sets, alphabets, subgroups and prefixes
//!
//! Letters are ASCII lowercase bytes (`b'a'..=b'z'`). A [`LetterSet`] packs
//! them into a 26-bit mask so subset and equality checks are single
//! integer operations.

use std::fmt;
use thiserror::Error;

/// Minimum number of extra letters in a game
pub const MIN_EXTRA_LETTERS: usize = 4;
/// Maximum number of extra letters in a game
pub const MAX_EXTRA_LETTERS: usize = 6;

/// Error type for invalid letters, alphabets, subgroups and prefixes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not a lowercase letter a-z")]
    NotALetter(char),
    #[error("expected between {MIN_EXTRA_LETTERS} and {MAX_EXTRA_LETTERS} extra letters, got {0}")]
    ExtraLetterCount(usize),
    #[error("letter '{0}' is repeated")]
    Duplicate(char),
    #[error("letter '{0}' is not part of the game letters")]
    NotInAlphabet(char),
    #[error("a subgroup needs at least 2 letters, got \"{0}\"")]
    SubgroupTooShort(String),
    #[error("a prefix must have exactly 2 letters, got \"{0}\"")]
    PrefixLength(String),
}

#[inline]
const fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// Check that a byte is a letter this crate can represent
#[inline]
#[must_use]
pub const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

fn checked_letter(c: char) -> Result<u8, LetterError> {
    if c.is_ascii_lowercase() {
        Ok(c as u8)
    } else {
        Err(LetterError::NotALetter(c))
    }
}

/// An unordered set of lowercase letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    /// Build the set of letters used by a word
    ///
    /// Returns `None` if the word contains anything other than a-z.
    ///
    /// # Examples
    /// ```
    /// use paraulogic_assistant::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("terra").unwrap();
    /// assert_eq!(set.to_string(), "aert");
    /// assert!(LetterSet::from_word("això").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::from_bytes(word.as_bytes())
    }

    /// Byte-slice variant of [`LetterSet::from_word`]
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let mut set = Self::EMPTY;
        for &b in bytes {
            if !is_letter(b) {
                return None;
            }
            set.insert(b);
        }
        Some(set)
    }

    /// Add a letter; non-letters are ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if is_letter(letter) {
            self.0 |= bit(letter);
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        is_letter(letter) && self.0 & bit(letter) != 0
    }

    /// True when every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&b| self.contains(b))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Check whether a sequence contains three identical letters in a row
#[must_use]
pub fn has_triple_run(bytes: &[u8]) -> bool {
    bytes.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// The letters of one game: a main letter plus 4 to 6 extras
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    main: u8,
    extras: Vec<u8>,
    set: LetterSet,
}

impl Alphabet {
    /// Create a validated alphabet
    ///
    /// # Errors
    /// Returns `LetterError` if any letter is outside a-z, if a letter is
    /// repeated, or if the number of extra letters is not between 4 and 6.
    ///
    /// # Examples
    /// ```
    /// use paraulogic_assistant::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new('t', "erasg").unwrap();
    /// assert_eq!(alphabet.len(), 6);
    /// assert!(Alphabet::new('t', "eras").is_ok());
    /// assert!(Alphabet::new('t', "era").is_err());
    /// assert!(Alphabet::new('t', "erast").is_err());
    /// ```
    pub fn new(main: char, extras: &str) -> Result<Self, LetterError> {
        let main = checked_letter(main.to_ascii_lowercase())?;
        let extras = extras
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| checked_letter(c.to_ascii_lowercase()))
            .collect::<Result<Vec<u8>, _>>()?;

        if !(MIN_EXTRA_LETTERS..=MAX_EXTRA_LETTERS).contains(&extras.len()) {
            return Err(LetterError::ExtraLetterCount(extras.len()));
        }

        let mut set = LetterSet::EMPTY;
        for &letter in std::iter::once(&main).chain(&extras) {
            if set.contains(letter) {
                return Err(LetterError::Duplicate(letter as char));
            }
            set.insert(letter);
        }

        Ok(Self { main, extras, set })
    }

    /// The letter every word must contain
    #[inline]
    #[must_use]
    pub const fn main(&self) -> u8 {
        self.main
    }

    #[inline]
    #[must_use]
    pub fn extras(&self) -> &[u8] {
        &self.extras
    }

    /// All letters, main letter first, then extras in entry order
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        std::iter::once(self.main).chain(self.extras.iter().copied())
    }

    /// All letters in alphabetical order
    #[must_use]
    pub fn sorted_letters(&self) -> Vec<u8> {
        self.set.letters().collect()
    }

    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.set
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        self.set.contains(letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.extras.len()
    }

    /// Always false; an alphabet has at least five letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", (self.main as char).to_ascii_uppercase())?;
        for &letter in &self.extras {
            write!(f, " {}", (letter as char).to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// A set of letters that some real word's letters match
///
/// Identified by its sorted-letter key, so `"ters"` and `"rest"` are the
/// same subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subgroup(LetterSet);

impl Subgroup {
    /// Parse a subgroup from its letters, in any order
    ///
    /// # Errors
    /// Returns `LetterError` if the text has fewer than 2 letters, repeats a
    /// letter, or uses a letter outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use paraulogic_assistant::core::{Alphabet, Subgroup};
    ///
    /// let alphabet = Alphabet::new('t', "erasg").unwrap();
    /// let subgroup = Subgroup::parse("rest", &alphabet).unwrap();
    /// assert_eq!(subgroup.key(), "erst");
    /// assert!(Subgroup::parse("tt", &alphabet).is_err());
    /// ```
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, LetterError> {
        let text = text.trim().to_lowercase();
        let mut set = LetterSet::EMPTY;
        for c in text.chars() {
            let letter = checked_letter(c)?;
            if !alphabet.contains(letter) {
                return Err(LetterError::NotInAlphabet(c));
            }
            if set.contains(letter) {
                return Err(LetterError::Duplicate(c));
            }
            set.insert(letter);
        }
        if set.len() < 2 {
            return Err(LetterError::SubgroupTooShort(text));
        }
        Ok(Self(set))
    }

    /// Build a subgroup from a key without alphabet checks
    ///
    /// Returns `None` for keys with non-letters or fewer than 2 distinct letters.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        LetterSet::from_word(key)
            .filter(|set| set.len() >= 2)
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn letters(self) -> LetterSet {
        self.0
    }

    /// Canonical sorted-letter key
    #[must_use]
    pub fn key(self) -> String {
        self.0.to_string()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0.contains(letter)
    }
}

impl fmt::Display for Subgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered pair of distinct letters that starts a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix([u8; 2]);

impl Prefix {
    /// Parse a 2-letter prefix
    ///
    /// # Errors
    /// Returns `LetterError` if the text is not two distinct alphabet letters.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, LetterError> {
        let text = text.trim().to_lowercase();
        let chars: Vec<char> = text.chars().collect();
        let [first, second] = chars.as_slice() else {
            return Err(LetterError::PrefixLength(text));
        };
        let bytes = [checked_letter(*first)?, checked_letter(*second)?];
        for (&b, &c) in bytes.iter().zip([first, second]) {
            if !alphabet.contains(b) {
                return Err(LetterError::NotInAlphabet(c));
            }
        }
        if bytes[0] == bytes[1] {
            return Err(LetterError::Duplicate(*first));
        }
        Ok(Self(bytes))
    }

    #[inline]
    #[must_use]
    pub const fn first(self) -> u8 {
        self.0[0]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Both bytes are validated ASCII letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All `size`-letter combinations of `letters`, preserving input order
fn combinations(letters: &[u8], size: usize) -> Vec<Vec<u8>> {
    if size == 0 {
        return vec![Vec::new()];
    }
    if letters.len() < size {
        return Vec::new();
    }
    let mut result = Vec::new();
    for (i, &head) in letters.iter().enumerate() {
        for mut tail in combinations(&letters[i + 1..], size - 1) {
            tail.insert(0, head);
            result.push(tail);
        }
    }
    result
}

/// Every possible subgroup of the alphabet (2 letters up to all of them)
///
/// Keys are sorted-letter strings; the list is sorted alphabetically.
#[must_use]
pub fn all_subgroups(alphabet: &Alphabet) -> Vec<Subgroup> {
    let letters = alphabet.sorted_letters();
    let mut subgroups: Vec<Subgroup> = (2..=letters.len())
        .flat_map(|size| combinations(&letters, size))
        .filter_map(|combo| LetterSet::from_bytes(&combo).map(Subgroup))
        .collect();
    subgroups.sort_by_key(|s| s.key());
    subgroups
}

/// Every ordered pair of distinct alphabet letters, sorted
#[must_use]
pub fn all_prefixes(alphabet: &Alphabet) -> Vec<Prefix> {
    let letters = alphabet.sorted_letters();
    letters
        .iter()
        .flat_map(|&a| {
            letters
                .iter()
                .filter(move |&&b| b != a)
                .map(move |&b| Prefix([a, b]))
        })
        .collect()
}
