//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`Session`] for the collaborators every command runs against
//! - [`CommandDispatcher`] for routing an invocation

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::config::Settings;
use crate::docs::Resolver;
use crate::error::Result;
use crate::select::{FilterScreen, FuzzySelector};
use crate::tools::{Capabilities, ProcessRunner};
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::interactive::InteractiveCommand;
use super::list::ListCommand;
use super::lookup::LookupCommand;

/// Collaborators a command runs against.
pub struct Session<'a> {
    /// Runs external tools.
    pub runner: &'a mut dyn ProcessRunner,
    /// Status output.
    pub ui: &'a mut dyn UserInterface,
    /// Built-in filter display and input.
    pub screen: &'a mut dyn FilterScreen,
}

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, session: &mut Session<'_>) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Routes an invocation to the matching command.
pub struct CommandDispatcher {
    resolver: Resolver,
    path_entries: Vec<PathBuf>,
    builtin_filter: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher for one run.
    pub fn new(caps: Capabilities, settings: Settings, path_entries: Vec<PathBuf>) -> Self {
        Self::with_resolver(Resolver::new(caps, settings), path_entries)
    }

    /// Create a dispatcher around an existing resolver.
    pub fn with_resolver(resolver: Resolver, path_entries: Vec<PathBuf>) -> Self {
        Self {
            resolver,
            path_entries,
            builtin_filter: false,
        }
    }

    /// Skip the external picker and always use the built-in filter.
    pub fn prefer_builtin_filter(mut self, builtin: bool) -> Self {
        self.builtin_filter = builtin;
        self
    }

    /// The resolver shared by every command.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Dispatch and execute.
    ///
    /// - `--completions` prints a completion script
    /// - `--list` prints the enumerated commands
    /// - no words opens the interactive picker
    /// - otherwise the words are looked up directly
    pub fn dispatch(&self, cli: &Cli, session: &mut Session<'_>) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return CompletionsCommand::new(shell).execute(session);
        }

        if cli.list {
            let cmd = ListCommand::new(self.resolver.capabilities(), &self.path_entries);
            return cmd.execute(session);
        }

        if cli.words.is_empty() {
            let settings = self.resolver.settings();
            let selector = FuzzySelector::new(
                self.resolver.capabilities(),
                settings.fuzzy.clone(),
                self.resolver.preview(),
            );
            let cmd = InteractiveCommand::new(&self.resolver, selector, &self.path_entries)
                .builtin_only(self.builtin_filter);
            return cmd.execute(session);
        }

        LookupCommand::new(&self.resolver, &cli.words).execute(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::filter::test_support::ScriptedScreen;
    use crate::tools::path::test_support::create_fake_binary;
    use crate::tools::{MockResponse, MockRunner, Tool};
    use crate::ui::MockUI;
    use clap::Parser;
    use std::env::VarError;
    use tempfile::TempDir;

    fn dispatcher(caps: Capabilities, path_entries: Vec<PathBuf>) -> CommandDispatcher {
        let resolver = Resolver::with_env(caps, Settings::default(), |_: &str| {
            Err(VarError::NotPresent)
        });
        CommandDispatcher::with_resolver(resolver, path_entries)
    }

    fn run(
        dispatcher: &CommandDispatcher,
        args: &[&str],
        runner: &mut MockRunner,
        ui: &mut MockUI,
        screen: &mut ScriptedScreen,
    ) -> CommandResult {
        let cli = Cli::parse_from(std::iter::once("cmdoc").chain(args.iter().copied()));
        let mut session = Session { runner, ui, screen };
        dispatcher.dispatch(&cli, &mut session).unwrap()
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn single_word_routes_to_lookup() {
        let d = dispatcher(Capabilities::none().with(Tool::Man), vec![]);
        let mut runner = MockRunner::new().respond("man", MockResponse::Exit(0));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::default();

        let result = run(&d, &["ls"], &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::success());
        assert_eq!(runner.command_lines(), vec!["man ls"]);
    }

    #[test]
    fn no_words_routes_to_interactive() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("htop"));

        let d = dispatcher(Capabilities::none().with(Tool::Man), vec![temp.path().into()]);
        let mut runner = MockRunner::new().respond("man", MockResponse::Exit(0));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::new(&[""]);

        let result = run(&d, &[], &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::success());
        assert_eq!(screen.rounds.len(), 1);
        assert_eq!(runner.command_lines(), vec!["man htop"]);
    }

    #[test]
    fn no_fzf_flag_forces_builtin_filter() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("htop"));

        let caps = Capabilities::none().with(Tool::Fzf).with(Tool::Man);
        let d = dispatcher(caps, vec![temp.path().into()]).prefer_builtin_filter(true);
        let mut runner = MockRunner::new().respond("man", MockResponse::Exit(0));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::default();

        let result = run(&d, &[], &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::success());
        assert!(runner.calls_to("fzf").is_empty());
        assert_eq!(screen.rounds.len(), 1);
    }

    #[test]
    fn list_routes_to_listing() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("jq"));

        let d = dispatcher(Capabilities::none(), vec![temp.path().into()]);
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::default();

        let result = run(&d, &["--list"], &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.outputs(), ["jq"]);
    }
}
