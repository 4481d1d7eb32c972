//! Paraulògic Assistant
//!
//! Helper for the daily Catalan word puzzle: measures progress against the
//! game's clues and enumerates letter combinations worth trying.
//!
//! # Quick Start
//!
//! ```rust
//! use paraulogic_assistant::core::{Alphabet, ClueSpec, Subgroup};
//! use paraulogic_assistant::engine::generate;
//! use paraulogic_assistant::progress::{analyze, recommend};
//!
//! let alphabet = Alphabet::new('r', "egist").unwrap();
//!
//! // Candidates of 5 letters starting with "tr" built from {e, i, r, t}
//! let subgroups = vec![Subgroup::parse("eirt", &alphabet).unwrap()];
//! let combinations = generate("tr", 5, &alphabet, &subgroups);
//! assert!(combinations.iter().all(|c| c.text.starts_with("tr")));
//!
//! // Progress against the clues
//! let mut clues = ClueSpec::new();
//! clues.set_letter_length('t', 5, 2);
//! let report = analyze(&["tigre".to_string()], &clues, &alphabet);
//! assert_eq!(report.per_letter[&'t'].total.missing, 1);
//! assert_eq!(recommend(&report, 4)[0].letter, 't');
//! ```

// Core domain types
pub mod core;

// Combination generation and scoring
pub mod engine;

// Progress accounting and recommendations
pub mod progress;

// Game persistence
pub mod store;

// Stateful game shell
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
