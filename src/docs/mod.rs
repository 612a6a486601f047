//! Documentation lookup.
//!
//! - [`resolver`] - Manual page first, fallbacks on a miss
//! - [`fallback`] - Ordered fallback strategies
//! - [`preview`] - Preview pane template for the fuzzy picker
//!
//! # Example
//!
//! ```
//! use cmdoc::config::Settings;
//! use cmdoc::docs::{LookupOutcome, Resolver};
//! use cmdoc::tools::{Capabilities, MockResponse, MockRunner, Tool};
//! use cmdoc::ui::MockUI;
//!
//! let caps = Capabilities::none().with(Tool::Man).with(Tool::Tldr);
//! let resolver = Resolver::new(caps, Settings::default());
//! let mut runner = MockRunner::new()
//!     .respond("man", MockResponse::Exit(16))
//!     .respond("tldr", MockResponse::Exit(0));
//! let mut ui = MockUI::new();
//!
//! assert_eq!(resolver.lookup("fd", &mut runner, &mut ui), LookupOutcome::Success);
//! assert_eq!(runner.command_lines(), vec!["man fd", "tldr fd"]);
//! ```

pub mod fallback;
pub mod preview;
pub mod resolver;

pub use fallback::{FallbackChain, Strategy};
pub use preview::PreviewCommand;
pub use resolver::Resolver;

/// Result of a documentation lookup.
///
/// Content is displayed by the underlying tool, never captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Documentation was shown.
    Success,
    /// No source had anything for this name.
    NotFound,
}

impl LookupOutcome {
    /// Whether documentation was shown.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
