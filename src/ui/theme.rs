//! Visual theme and styling.

use console::Style;

/// cmdoc's visual theme.
#[derive(Debug, Clone)]
pub struct CmdocTheme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the filter's query line (yellow).
    pub query: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for contextual hints (cyan).
    pub hint: Style,
}

impl Default for CmdocTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CmdocTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            query: Style::new().yellow(),
            dim: Style::new().dim(),
            hint: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            query: Style::new(),
            dim: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a hint.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
