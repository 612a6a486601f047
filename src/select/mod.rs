//! Interactive command selection.
//!
//! - [`fuzzy`] - External fuzzy picker with a documentation preview
//! - [`filter`] - Built-in line-oriented filter used when no picker exists

pub mod filter;
pub mod fuzzy;

pub use filter::{matches, run_filter, step, FilterScreen, FilterStep};
pub use fuzzy::FuzzySelector;

/// Outcome of an interactive selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user picked this command.
    Chosen(String),
    /// The user backed out.
    Cancelled,
    /// The selection tool is not installed.
    Unavailable,
}
