//! Core domain types for the puzzle
//!
//! Letters, alphabets, subgroups, prefixes, found words and clues. All types
//! here are plain values with validation; they perform no I/O.

mod clues;
mod letters;
mod word;

pub use clues::{BulkEntries, BulkKind, ClueError, ClueSpec, LetterClue, parse_bulk};
pub use letters::{
    Alphabet, LetterError, LetterSet, MAX_EXTRA_LETTERS, MIN_EXTRA_LETTERS, Prefix, Subgroup,
    all_prefixes, all_subgroups, has_triple_run, is_letter,
};
pub use word::{
    FoundWords, MIN_WORD_LENGTH, WordError, normalize_word, split_word_list, validate_word,
};
