//! Combination engine
//!
//! Enumerates candidate letter sequences for a prefix and length, ranks them
//! with a Catalan plausibility score, and overlays the player's status.

mod generator;
mod score;
mod status;

pub use generator::{Combination, generate, generate_best, relevant_subgroups};
pub use score::{BASE_SCORE, score};
pub use status::{
    AnnotatedCombination, CombinationStatus, FoundWordChange, ScoreSummary, ScoreTally, StatusCounts,
    annotate, status_change,
};
