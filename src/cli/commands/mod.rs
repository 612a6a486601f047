//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Invocations are routed via [`CommandDispatcher`]:
//! - no words → [`interactive`]
//! - one or more words → [`lookup`]
//! - `--list` → [`list`]
//! - `--completions` → [`completions`]

pub mod completions;
pub mod dispatcher;
pub mod interactive;
pub mod list;
pub mod lookup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, Session};
