//! External fuzzy picker (`fzf`).

use crate::commands::CommandSet;
use crate::config::FuzzySettings;
use crate::docs::PreviewCommand;
use crate::tools::{Capabilities, Invocation, ProcessRunner, Tool};

use super::Selection;

/// Key bindings for scrolling the preview pane.
const PREVIEW_BINDINGS: &str = "ctrl-d:preview-half-page-down,ctrl-u:preview-half-page-up";

/// Header line shown above the candidates.
const HEADER: &str = "Type to search • Enter to open full man page • Ctrl-U/D to scroll preview";

/// Interactive selection through `fzf` with a live documentation preview.
#[derive(Debug, Clone)]
pub struct FuzzySelector {
    available: bool,
    settings: FuzzySettings,
    preview: PreviewCommand,
}

impl FuzzySelector {
    /// Create a selector for the given capabilities.
    pub fn new(caps: &Capabilities, settings: FuzzySettings, preview: PreviewCommand) -> Self {
        Self {
            available: caps.has(Tool::Fzf),
            settings,
            preview,
        }
    }

    /// Full `fzf` invocation for `commands`.
    pub fn invocation(&self, commands: &CommandSet) -> Invocation {
        Invocation::new(Tool::Fzf.executable())
            .args(["--prompt", self.settings.prompt.as_str()])
            .arg("--border")
            .args(["--height", self.settings.height.as_str()])
            .arg("--layout=reverse")
            .arg("--ansi")
            .args(["--preview", self.preview.template()])
            .args(["--preview-window", self.settings.preview_window.as_str()])
            .args(["--bind", PREVIEW_BINDINGS])
            .args(["--color", "header:italic,fg+:bold"])
            .args(["--header", HEADER])
            .stdin(commands.to_lines())
    }

    /// Let the user pick a command.
    ///
    /// A non-zero exit from `fzf` means the user backed out.
    pub fn select(&self, commands: &CommandSet, runner: &mut dyn ProcessRunner) -> Selection {
        if !self.available {
            return Selection::Unavailable;
        }

        match runner.output(&self.invocation(commands)) {
            Ok(captured) if captured.exit.success() => {
                let chosen = captured.stdout.trim();
                if chosen.is_empty() {
                    Selection::Cancelled
                } else {
                    Selection::Chosen(chosen.to_string())
                }
            }
            Ok(captured) => {
                tracing::debug!("fzf exited with {:?}", captured.exit.code);
                Selection::Cancelled
            }
            Err(e) => {
                tracing::debug!("fzf failed to run: {}", e);
                Selection::Unavailable
            }
        }
    }
}
