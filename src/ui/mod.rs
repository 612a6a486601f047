//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for errors, hints and program output
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`TerminalScreen`] for the built-in filter
//!
//! # Example
//!
//! ```
//! use cmdoc::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.hint("Install fzf for a better picker.");
//! assert_eq!(ui.hints().len(), 1);
//! ```

pub mod mock;
pub mod output;
pub mod screen;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use screen::TerminalScreen;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, CmdocTheme};

/// Trait for user-visible output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display a contextual hint.
    fn hint(&mut self, msg: &str);

    /// Write program output. Never suppressed by the output mode.
    fn output(&mut self, text: &str);
}
