//! Shell completions generation.
//!
//! `cmdoc --completions <shell>` prints a completion script.

use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::Shell;

use super::dispatcher::{Command, CommandResult, Session};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }

    /// Render the completion script.
    pub fn script(&self) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.shell, &mut cmd, "cmdoc", &mut buf);
        String::from_utf8_lossy(&buf).to_string()
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, session: &mut Session<'_>) -> crate::error::Result<CommandResult> {
        session.ui.output(self.script().trim_end());
        Ok(CommandResult::success())
    }
}
