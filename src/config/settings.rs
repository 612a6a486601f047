//! Settings schema.
//!
//! Maps to the optional YAML file at `<config dir>/cmdoc/config.yml`.
//! Every field has a default so an empty or partial file is valid.

use serde::Deserialize;

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Lines of documentation shown in the preview pane.
    pub preview_lines: usize,

    /// Matches shown per iteration of the built-in filter.
    pub match_limit: usize,

    /// Base URL of the plain-text cheat-sheet service.
    pub cheat_url: String,

    /// `MANPAGER` injected when neither `MANPAGER` nor `PAGER` is set.
    pub default_pager: String,

    /// External fuzzy picker appearance.
    pub fuzzy: FuzzySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_lines: 200,
            match_limit: 30,
            cheat_url: "https://cheat.sh".to_string(),
            default_pager: "less -R".to_string(),
            fuzzy: FuzzySettings::default(),
        }
    }
}

impl Settings {
    /// Cheat-sheet URL for a subject, plain-text variant.
    pub fn cheat_sheet_url(&self, subject: &str) -> String {
        format!("{}/{}?T", self.cheat_url.trim_end_matches('/'), subject)
    }
}

/// Options passed through to the fuzzy picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FuzzySettings {
    /// Prompt label.
    pub prompt: String,

    /// Picker height (fzf `--height`).
    pub height: String,

    /// Preview pane layout (fzf `--preview-window`).
    pub preview_window: String,
}

impl Default for FuzzySettings {
    fn default() -> Self {
        Self {
            prompt: "cmd> ".to_string(),
            height: "90%".to_string(),
            preview_window: "right,70%,wrap".to_string(),
        }
    }
}
