//! Command implementations
//!
//! Each command returns a result struct; printing lives in `output`.

pub mod clues;
pub mod explore;
pub mod letters;
pub mod report;
pub mod sweep;
pub mod words;

pub use clues::{BulkOutcome, apply_bulk, set_letter, set_total};
pub use explore::{
    ExploreConfig, ExploreContext, ExploreResult, MAX_FREE_LETTERS, MAX_PREFIX_LETTERS, explore,
};
pub use letters::{ListingEntry, list_prefixes, list_subgroups};
pub use report::{ReportResult, build_report};
pub use sweep::{SweepConfig, SweepEntry, SweepResult, run_sweep, sweep_jobs};
pub use words::{MarkResult, RemoveOutcome, add_words, mark, remove_words};
