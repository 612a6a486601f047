//! Direct documentation lookup.
//!
//! `cmdoc ls` opens `ls`. `cmdoc git commit` tries the manual page for
//! `git-commit` and, if there is none, looks up `git` on its own.

use crate::docs::Resolver;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult, Session};

/// Join words the way namespaced manual pages are named.
pub fn joined_name(words: &[String]) -> String {
    words.join("-")
}

/// The lookup command implementation.
pub struct LookupCommand<'a> {
    resolver: &'a Resolver,
    words: &'a [String],
}

impl<'a> LookupCommand<'a> {
    /// Create a lookup for one or more words.
    pub fn new(resolver: &'a Resolver, words: &'a [String]) -> Self {
        Self { resolver, words }
    }
}

impl Command for LookupCommand<'_> {
    fn execute(&self, session: &mut Session<'_>) -> Result<CommandResult> {
        let Some(first) = self.words.first() else {
            return Ok(CommandResult::success());
        };

        if self.words.len() > 1 {
            let joined = joined_name(self.words);
            if self
                .resolver
                .resolve_full(&joined, session.runner)
                .is_success()
            {
                return Ok(CommandResult::success());
            }
            tracing::debug!("No manual page for {}, trying {}", joined, first);
        }

        // Not-found is reported by the resolver; it isn't an exit failure.
        self.resolver.lookup(first, session.runner, session.ui);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::select::filter::test_support::ScriptedScreen;
    use crate::tools::{Capabilities, MockResponse, MockRunner, Tool};
    use crate::ui::MockUI;
    use std::env::VarError;

    fn resolver(caps: Capabilities) -> Resolver {
        Resolver::with_env(caps, Settings::default(), |_: &str| Err(VarError::NotPresent))
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn execute(resolver: &Resolver, list: &[&str], runner: &mut MockRunner, ui: &mut MockUI) {
        let words = words(list);
        let mut screen = ScriptedScreen::default();
        let mut session = Session {
            runner,
            ui,
            screen: &mut screen,
        };
        let result = LookupCommand::new(resolver, &words)
            .execute(&mut session)
            .unwrap();
        assert_eq!(result, CommandResult::success());
    }

    #[test]
    fn joined_name_uses_hyphens() {
        assert_eq!(joined_name(&words(&["git", "commit"])), "git-commit");
        assert_eq!(joined_name(&words(&["a", "b", "c"])), "a-b-c");
    }

    #[test]
    fn joined_page_found_stops_there() {
        let resolver = resolver(Capabilities::none().with(Tool::Man));
        let mut runner = MockRunner::new().respond("man", MockResponse::Exit(0));
        let mut ui = MockUI::new();

        execute(&resolver, &["git", "commit"], &mut runner, &mut ui);
        assert_eq!(runner.command_lines(), vec!["man git-commit"]);
    }

    #[test]
    fn joined_page_missing_retries_first_word() {
        let resolver = resolver(Capabilities::none().with(Tool::Man));
        let mut runner = MockRunner::new()
            .respond("man git-commit", MockResponse::Exit(16))
            .respond("man git", MockResponse::Exit(0));
        let mut ui = MockUI::new();

        execute(&resolver, &["git", "commit"], &mut runner, &mut ui);
        assert_eq!(runner.command_lines(), vec!["man git-commit", "man git"]);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn joined_name_skips_fallback_chain() {
        let caps = Capabilities::none().with(Tool::Man).with(Tool::Tldr);
        let resolver = resolver(caps);
        let mut runner = MockRunner::new()
            .respond("man git-commit", MockResponse::Exit(16))
            .respond("man git", MockResponse::Exit(16))
            .respond("tldr", MockResponse::Exit(0));
        let mut ui = MockUI::new();

        execute(&resolver, &["git", "commit"], &mut runner, &mut ui);
        assert_eq!(
            runner.command_lines(),
            vec!["man git-commit", "man git", "tldr git"]
        );
    }

    #[test]
    fn single_word_uses_fallbacks_on_miss() {
        let caps = Capabilities::none().with(Tool::Man).with(Tool::Tldr);
        let resolver = resolver(caps);
        let mut runner = MockRunner::new()
            .respond("man", MockResponse::Exit(16))
            .respond("tldr", MockResponse::Exit(0));
        let mut ui = MockUI::new();

        execute(&resolver, &["fd"], &mut runner, &mut ui);
        assert_eq!(runner.command_lines(), vec!["man fd", "tldr fd"]);
    }

    #[test]
    fn not_found_still_exits_zero() {
        let resolver = resolver(Capabilities::none());
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        execute(&resolver, &["nope"], &mut runner, &mut ui);
        assert!(ui.has_error("'nope'"));
    }
}
