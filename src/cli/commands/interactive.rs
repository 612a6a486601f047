//! Interactive mode.
//!
//! Enumerates commands, lets the user pick one (fzf when installed, the
//! built-in filter otherwise) and opens its documentation.

use std::path::PathBuf;

use crate::commands::enumerate;
use crate::docs::Resolver;
use crate::error::{CmdocError, Result};
use crate::select::{run_filter, FuzzySelector, Selection};

use super::dispatcher::{Command, CommandResult, Session};

/// The interactive command implementation.
pub struct InteractiveCommand<'a> {
    resolver: &'a Resolver,
    selector: FuzzySelector,
    path_entries: &'a [PathBuf],
    builtin_only: bool,
}

impl<'a> InteractiveCommand<'a> {
    /// Create a new interactive command.
    pub fn new(
        resolver: &'a Resolver,
        selector: FuzzySelector,
        path_entries: &'a [PathBuf],
    ) -> Self {
        Self {
            resolver,
            selector,
            path_entries,
            builtin_only: false,
        }
    }

    /// Never start the external picker.
    pub fn builtin_only(mut self, builtin_only: bool) -> Self {
        self.builtin_only = builtin_only;
        self
    }
}

impl Command for InteractiveCommand<'_> {
    fn execute(&self, session: &mut Session<'_>) -> Result<CommandResult> {
        let commands = enumerate(
            self.resolver.capabilities(),
            session.runner,
            self.path_entries,
        );
        if commands.is_empty() {
            session.ui.error(&format!("{}.", CmdocError::EnumerationEmpty));
            return Ok(CommandResult::failure(1));
        }

        let selection = if self.builtin_only {
            Selection::Unavailable
        } else {
            self.selector.select(&commands, session.runner)
        };

        let chosen = match selection {
            Selection::Chosen(name) => Some(name),
            Selection::Cancelled => None,
            Selection::Unavailable => {
                session
                    .ui
                    .hint("Simple fuzzy search (install fzf for a better UI).");
                let limit = self.resolver.settings().match_limit;
                run_filter(&commands, session.screen, limit)
            }
        };

        match chosen {
            Some(name) => {
                self.resolver.lookup(&name, session.runner, session.ui);
            }
            None => tracing::debug!("Selection cancelled"),
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FuzzySettings, Settings};
    use crate::select::filter::test_support::ScriptedScreen;
    use crate::tools::{Capabilities, MockResponse, MockRunner, Tool};
    use crate::ui::MockUI;
    use std::env::VarError;

    fn resolver_with(caps: Capabilities, settings: Settings) -> Resolver {
        Resolver::with_env(caps, settings, |_: &str| Err(VarError::NotPresent))
    }

    fn resolver(caps: Capabilities) -> Resolver {
        resolver_with(caps, Settings::default())
    }

    fn execute(
        resolver: &Resolver,
        runner: &mut MockRunner,
        ui: &mut MockUI,
        screen: &mut ScriptedScreen,
    ) -> CommandResult {
        let selector = FuzzySelector::new(
            resolver.capabilities(),
            FuzzySettings::default(),
            resolver.preview(),
        );
        let mut session = Session { runner, ui, screen };
        InteractiveCommand::new(resolver, selector, &[])
            .execute(&mut session)
            .unwrap()
    }

    fn shell_listing(names: &str) -> MockResponse {
        MockResponse::Output(0, names.to_string())
    }

    #[test]
    fn empty_enumeration_exits_one() {
        let resolver = resolver(Capabilities::none().with(Tool::Man).with(Tool::Fzf));
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::default();

        let result = execute(&resolver, &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_error("No commands found"));
        assert!(runner.calls_to("fzf").is_empty());
    }

    #[test]
    fn fzf_choice_is_opened() {
        let caps = Capabilities::none()
            .with(Tool::Bash)
            .with(Tool::Man)
            .with(Tool::Fzf);
        let resolver = resolver(caps);
        let mut runner = MockRunner::new()
            .respond("bash", shell_listing("ls\ntar\n"))
            .respond("fzf", MockResponse::Output(0, "tar\n".into()))
            .respond("man", MockResponse::Exit(0));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::default();

        let result = execute(&resolver, &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::success());
        assert_eq!(runner.calls_to("man")[0].args, vec!["tar"]);
        assert!(screen.rounds.is_empty());
    }

    #[test]
    fn fzf_cancel_opens_nothing_and_exits_zero() {
        let caps = Capabilities::none()
            .with(Tool::Bash)
            .with(Tool::Man)
            .with(Tool::Fzf);
        let resolver = resolver(caps);
        let mut runner = MockRunner::new()
            .respond("bash", shell_listing("ls\n"))
            .respond("fzf", MockResponse::Exit(130))
            .respond("man", MockResponse::Exit(0));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::default();

        let result = execute(&resolver, &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::success());
        assert!(runner.calls_to("man").is_empty());
        assert!(screen.rounds.is_empty());
    }

    #[test]
    fn missing_fzf_falls_back_to_builtin_filter() {
        let caps = Capabilities::none().with(Tool::Bash).with(Tool::Man);
        let resolver = resolver(caps);
        let mut runner = MockRunner::new()
            .respond("bash", shell_listing("cat\ncar\nbar\ncart\n"))
            .respond("man", MockResponse::Exit(0));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::new(&["CAR", ""]);

        let result = execute(&resolver, &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::success());
        assert_eq!(screen.shown(1), vec!["car", "cart"]);
        assert_eq!(runner.calls_to("man")[0].args, vec!["car"]);
        assert!(!ui.hints().is_empty());
    }

    #[test]
    fn builtin_filter_uses_configured_match_limit() {
        let caps = Capabilities::none().with(Tool::Bash).with(Tool::Man);
        let settings = Settings {
            match_limit: 2,
            ..Default::default()
        };
        let resolver = resolver_with(caps, settings);
        let mut runner = MockRunner::new()
            .respond("bash", shell_listing("cat\ncar\nbar\ncart\n"))
            .respond("man", MockResponse::Exit(0));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::new(&[]);

        execute(&resolver, &mut runner, &mut ui, &mut screen);
        assert_eq!(screen.shown(0), vec!["bar", "car"]);
    }

    #[test]
    fn default_match_limit_comes_from_settings() {
        let caps = Capabilities::none().with(Tool::Bash);
        let names: String = (0..40).map(|i| format!("c{:02}\n", i)).collect();
        let mut runner = MockRunner::new().respond("bash", shell_listing(&names));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::new(&[]);

        execute(&resolver(caps), &mut runner, &mut ui, &mut screen);
        assert_eq!(screen.shown(0).len(), Settings::default().match_limit);
    }

    #[test]
    fn interrupted_filter_exits_zero() {
        let caps = Capabilities::none().with(Tool::Bash).with(Tool::Man);
        let resolver = resolver(caps);
        let mut runner = MockRunner::new().respond("bash", shell_listing("ls\n"));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::default();

        let result = execute(&resolver, &mut runner, &mut ui, &mut screen);
        assert_eq!(result, CommandResult::success());
        assert!(runner.calls_to("man").is_empty());
    }

    #[test]
    fn chosen_command_gets_fallbacks() {
        let caps = Capabilities::none()
            .with(Tool::Bash)
            .with(Tool::Man)
            .with(Tool::Tldr)
            .with(Tool::Fzf);
        let resolver = resolver(caps);
        let mut runner = MockRunner::new()
            .respond("bash", shell_listing("rg\n"))
            .respond("fzf", MockResponse::Output(0, "rg\n".into()))
            .respond("man", MockResponse::Exit(16))
            .respond("tldr", MockResponse::Exit(0));
        let mut ui = MockUI::new();
        let mut screen = ScriptedScreen::default();

        execute(&resolver, &mut runner, &mut ui, &mut screen);
        assert_eq!(runner.calls_to("tldr")[0].args, vec!["rg"]);
    }
}
