//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, CmdocTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Hints and program output go to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: CmdocTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        let colors = should_use_colors(no_color);
        if !colors {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: CmdocTheme::for_colors(colors),
            mode,
        }
    }

    /// The theme in use.
    pub fn theme(&self) -> &CmdocTheme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_hint(msg)).ok();
        }
    }

    fn output(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }
}
