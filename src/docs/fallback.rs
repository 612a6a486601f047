//! Fallback documentation sources.
//!
//! An ordered list of strategies, each guarded by a capability check. The
//! first strategy that succeeds ends the chain.

use crate::config::Settings;
use crate::tools::{Capabilities, Invocation, ProcessRunner, Tool};

use super::LookupOutcome;

/// One way of showing documentation when the manual page is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Community cheat sheets via `tldr`.
    Tldr,
    /// Plain-text cheat sheet fetched with `curl`.
    CheatSheet,
}

impl Strategy {
    /// Whether the tool this strategy needs is available.
    pub fn is_applicable(&self, caps: &Capabilities) -> bool {
        match self {
            Strategy::Tldr => caps.has(Tool::Tldr),
            Strategy::CheatSheet => caps.has(Tool::Curl),
        }
    }

    /// Try to show documentation for `name`.
    ///
    /// `tldr` must exit 0. The cheat sheet only has to be fetched: curl
    /// finishing counts as success whatever it printed.
    pub fn attempt(
        &self,
        name: &str,
        runner: &mut dyn ProcessRunner,
        settings: &Settings,
    ) -> bool {
        let invocation = match self {
            Strategy::Tldr => Invocation::new(Tool::Tldr.executable()).arg(name),
            Strategy::CheatSheet => Invocation::new(Tool::Curl.executable())
                .arg("-s")
                .arg(settings.cheat_sheet_url(name)),
        };

        match (self, runner.status(&invocation)) {
            (Strategy::Tldr, Ok(exit)) => exit.success(),
            (Strategy::CheatSheet, Ok(_)) => true,
            (_, Err(e)) => {
                tracing::debug!("{:?} fallback failed to run: {}", self, e);
                false
            }
        }
    }
}

/// Ordered fallback strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    strategies: Vec<Strategy>,
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl FallbackChain {
    /// `tldr` first, then the cheat-sheet service.
    pub fn standard() -> Self {
        Self::new(vec![Strategy::Tldr, Strategy::CheatSheet])
    }

    /// Chain with a custom order.
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    /// Evaluate strategies in order, stopping at the first success.
    pub fn run(
        &self,
        name: &str,
        caps: &Capabilities,
        runner: &mut dyn ProcessRunner,
        settings: &Settings,
    ) -> LookupOutcome {
        for strategy in &self.strategies {
            if !strategy.is_applicable(caps) {
                continue;
            }
            tracing::debug!("Trying {:?} for {}", strategy, name);
            if strategy.attempt(name, runner, settings) {
                return LookupOutcome::Success;
            }
        }
        LookupOutcome::NotFound
    }
}
