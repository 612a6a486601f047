//! Documentation resolution.
//!
//! The manual page comes first. When it is missing, the [`FallbackChain`]
//! runs; when that is exhausted too, the user is told nothing was found.

use std::env::VarError;

use crate::config::Settings;
use crate::tools::{Capabilities, Invocation, ProcessRunner, Tool};
use crate::ui::UserInterface;

use super::fallback::FallbackChain;
use super::preview::PreviewCommand;
use super::LookupOutcome;

/// Resolves documentation for command names.
#[derive(Debug, Clone)]
pub struct Resolver {
    caps: Capabilities,
    settings: Settings,
    pager_override: Option<(String, String)>,
    chain: FallbackChain,
}

impl Resolver {
    /// Create a resolver reading the pager preference from the real environment.
    pub fn new(caps: Capabilities, settings: Settings) -> Self {
        Self::with_env(caps, settings, |key: &str| std::env::var(key))
    }

    /// Create a resolver with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_env<F>(caps: Capabilities, settings: Settings, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let pager_override = pager_override(&settings, &env_fn);
        Self {
            caps,
            settings,
            pager_override,
            chain: FallbackChain::standard(),
        }
    }

    /// The capability table this resolver consults.
    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    /// The settings this resolver was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Variable injected into the manual viewer's environment, if any.
    pub fn pager_override(&self) -> Option<&(String, String)> {
        self.pager_override.as_ref()
    }

    /// Preview template for the fuzzy picker.
    pub fn preview(&self) -> PreviewCommand {
        PreviewCommand::for_capabilities(&self.caps, &self.settings)
    }

    /// Open the manual page for `name`.
    ///
    /// Success iff the viewer exits 0. A missing viewer is a plain miss.
    pub fn resolve_full(&self, name: &str, runner: &mut dyn ProcessRunner) -> LookupOutcome {
        if !self.caps.has(Tool::Man) {
            tracing::debug!("man not available, skipping manual page for {}", name);
            return LookupOutcome::NotFound;
        }

        let mut invocation = Invocation::new(Tool::Man.executable()).arg(name);
        if let Some((key, value)) = &self.pager_override {
            invocation = invocation.env(key, value);
        }

        match runner.status(&invocation) {
            Ok(exit) if exit.success() => LookupOutcome::Success,
            Ok(exit) => {
                tracing::debug!("man {} exited with {:?}", name, exit.code);
                LookupOutcome::NotFound
            }
            Err(e) => {
                tracing::debug!("man failed to run: {}", e);
                LookupOutcome::NotFound
            }
        }
    }

    /// Show fallback documentation for `name`.
    ///
    /// Reports a not-found line through the UI when every source misses.
    pub fn resolve_fallback(
        &self,
        name: &str,
        runner: &mut dyn ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> LookupOutcome {
        let outcome = self.chain.run(name, &self.caps, runner, &self.settings);
        if outcome == LookupOutcome::NotFound {
            ui.error(&format!("No documentation found for '{}'.", name));
        }
        outcome
    }

    /// Manual page, then fallbacks on a miss.
    pub fn lookup(
        &self,
        name: &str,
        runner: &mut dyn ProcessRunner,
        ui: &mut dyn UserInterface,
    ) -> LookupOutcome {
        match self.resolve_full(name, runner) {
            LookupOutcome::Success => LookupOutcome::Success,
            LookupOutcome::NotFound => self.resolve_fallback(name, runner, ui),
        }
    }
}

/// `MANPAGER=<default>` unless the caller already chose a pager.
fn pager_override<F>(settings: &Settings, env_fn: &F) -> Option<(String, String)>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let is_set = |key: &str| !matches!(env_fn(key), Err(VarError::NotPresent));

    if is_set("MANPAGER") || is_set("PAGER") {
        None
    } else {
        Some(("MANPAGER".to_string(), settings.default_pager.clone()))
    }
}
