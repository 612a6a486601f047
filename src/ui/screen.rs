//! Terminal rendering for the built-in filter.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{BufRead, Write};

use crate::select::FilterScreen;
use crate::tools::signal::SigintGuard;

use super::CmdocTheme;

/// Question shown under the match list.
const REFINE_PROMPT: &str = "Type to refine, or exact command to open";

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// [`FilterScreen`] on the process's terminal.
///
/// On a tty each line is read with a dialoguer prompt; otherwise lines are
/// read straight from stdin so the filter can be driven by a pipe.
pub struct TerminalScreen {
    term: Term,
    theme: CmdocTheme,
    label: String,
}

impl TerminalScreen {
    /// Create a screen whose query line starts with `label`.
    pub fn new(theme: CmdocTheme, label: &str) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            label: label.to_string(),
        }
    }

    fn read_interactive(&mut self) -> Option<String> {
        // In raw mode Ctrl-C arrives as a key press; console reports an
        // interrupted read and then re-raises SIGINT.
        let _guard = SigintGuard::ignore();

        let result = Input::<String>::with_theme(&prompt_theme())
            .with_prompt(REFINE_PROMPT)
            .allow_empty(true)
            .interact_text_on(&self.term);

        match result {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::debug!("Filter prompt ended: {}", e);
                self.term.write_line("").ok();
                None
            }
        }
    }
}

impl FilterScreen for TerminalScreen {
    fn render(&mut self, query: &str, matches: &[&str]) {
        self.term.clear_screen().ok();
        writeln!(
            self.term,
            "{}   {}",
            self.theme
                .query
                .apply_to(format!("{}{}", self.label, query)),
            self.theme
                .dim
                .apply_to("(Enter to open, Ctrl-C to quit)")
        )
        .ok();
        for name in matches {
            writeln!(self.term, "  {}", name).ok();
        }
        writeln!(self.term).ok();
    }

    fn read_line(&mut self) -> Option<String> {
        if self.term.is_term() {
            self.read_interactive()
        } else {
            read_stdin_line()
        }
    }
}

/// One line from stdin; None at end of input.
fn read_stdin_line() -> Option<String> {
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            tracing::debug!("Failed to read stdin: {}", e);
            None
        }
    }
}
