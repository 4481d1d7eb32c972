//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_add_outcome, print_bulk_outcome, print_clues, print_explore_result, print_listing,
    print_mark_result, print_new_game, print_remove_outcome, print_report, print_sweep_result,
};
