//! `--list`: print every discoverable command.

use std::path::PathBuf;

use crate::commands::enumerate;
use crate::error::{CmdocError, Result};
use crate::tools::Capabilities;

use super::dispatcher::{Command, CommandResult, Session};

/// The list command implementation.
pub struct ListCommand<'a> {
    caps: &'a Capabilities,
    path_entries: &'a [PathBuf],
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(caps: &'a Capabilities, path_entries: &'a [PathBuf]) -> Self {
        Self { caps, path_entries }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, session: &mut Session<'_>) -> Result<CommandResult> {
        let commands = enumerate(self.caps, session.runner, self.path_entries);
        if commands.is_empty() {
            session.ui.error(&format!("{}.", CmdocError::EnumerationEmpty));
            return Ok(CommandResult::failure(1));
        }

        for name in commands.iter() {
            session.ui.output(name);
        }
        Ok(CommandResult::success())
    }
}
