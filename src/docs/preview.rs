//! Preview pane command for the fuzzy picker.

use crate::config::Settings;
use crate::tools::{Capabilities, Tool};

/// Placeholder the fuzzy picker replaces with the highlighted line.
pub const PLACEHOLDER: &str = "{}";

/// Shell command template rendering a read-only, pager-less preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCommand {
    template: String,
}

impl PreviewCommand {
    /// Pick the best preview source among the available tools.
    ///
    /// Same order as full resolution: manual page, tldr, cheat sheet.
    pub fn for_capabilities(caps: &Capabilities, settings: &Settings) -> Self {
        let head = format!("sed -n '1,{}p'", settings.preview_lines);

        let template = if caps.has(Tool::Man) {
            format!("man -P cat {PLACEHOLDER} 2>/dev/null | col -bx | {head}")
        } else if caps.has(Tool::Tldr) {
            format!("tldr {PLACEHOLDER} 2>/dev/null | {head}")
        } else if caps.has(Tool::Curl) {
            format!("curl -s {} | {head}", settings.cheat_sheet_url(PLACEHOLDER))
        } else {
            "echo 'No preview available'".to_string()
        };

        Self { template }
    }

    /// The raw template, placeholder included.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Template with the placeholder replaced by `name`.
    pub fn render(&self, name: &str) -> String {
        self.template.replace(PLACEHOLDER, name)
    }
}
