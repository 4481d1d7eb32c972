//! Progress accounting
//!
//! Reconciles the found words against the clues and turns the gaps into a
//! short list of where to search next.

mod accountant;
mod recommend;

pub use accountant::{FoundBreakdown, LetterProgress, ProgressReport, analyze, found_breakdown};
pub use recommend::{DEFAULT_RECOMMENDATIONS, Lead, Recommendation, recommend};

use std::ops::AddAssign;

/// Found, expected and missing counts for one clue bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket {
    pub found: u32,
    pub expected: u32,
    /// `expected - found`, floored at zero
    pub missing: u32,
}

impl Bucket {
    #[must_use]
    pub const fn new(found: u32, expected: u32) -> Self {
        Self {
            found,
            expected,
            missing: expected.saturating_sub(found),
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.found >= self.expected
    }

    /// Completion percentage; 0 when nothing is expected
    #[must_use]
    pub fn percent(&self) -> f64 {
        percentage(self.found, self.expected)
    }
}

impl AddAssign for Bucket {
    fn add_assign(&mut self, other: Self) {
        *self = Self::new(self.found + other.found, self.expected + other.expected);
    }
}

/// `found / expected` as a percentage, with 0/0 and n/0 reported as 0%
///
/// # Examples
/// ```
/// use paraulogic_assistant::progress::percentage;
///
/// assert_eq!(percentage(3, 4), 75.0);
/// assert_eq!(percentage(0, 0), 0.0);
/// assert_eq!(percentage(5, 0), 0.0);
/// ```
#[must_use]
pub fn percentage(found: u32, expected: u32) -> f64 {
    if expected == 0 {
        0.0
    } else {
        f64::from(found) / f64::from(expected) * 100.0
    }
}
