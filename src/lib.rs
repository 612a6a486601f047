//! cmdoc - Fuzzy-search your commands and open their documentation.
//!
//! cmdoc enumerates the commands visible to your shell, lets you pick one
//! with `fzf` (or a built-in filter when `fzf` is missing) and opens its
//! manual page, falling back to `tldr` and then a plain-text cheat sheet.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`commands`] - Command enumeration
//! - [`config`] - Settings loading
//! - [`docs`] - Documentation resolution and fallbacks
//! - [`error`] - Error types and result aliases
//! - [`select`] - Interactive selection
//! - [`tools`] - External tool discovery and subprocess execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cmdoc::commands::CommandSet;
//! use cmdoc::select::matches;
//!
//! let set: CommandSet = ["cat", "car", "bar", "cart"].into_iter().collect();
//! assert_eq!(matches(&set, "car", 30), vec!["car", "cart"]);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod docs;
pub mod error;
pub mod select;
pub mod tools;
pub mod ui;

pub use error::{CmdocError, Result};
