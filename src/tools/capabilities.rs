//! Capability table for optional external tools.
//!
//! Probed once at startup. The resolver, the enumerator and the selectors
//! all consult the same table so behavior stays consistent within a run.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use super::path::resolve_tool_path;

/// External tools cmdoc knows how to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
    /// Shell with the `compgen` builtin.
    Bash,
    /// Manual page viewer.
    Man,
    /// Community cheat-sheet client.
    Tldr,
    /// HTTP client for the cheat-sheet service.
    Curl,
    /// Fuzzy picker.
    Fzf,
}

impl Tool {
    /// Every known tool, in probe order.
    pub const ALL: [Tool; 5] = [Tool::Bash, Tool::Man, Tool::Tldr, Tool::Curl, Tool::Fzf];

    /// Executable name looked up on PATH.
    pub fn executable(&self) -> &'static str {
        match self {
            Tool::Bash => "bash",
            Tool::Man => "man",
            Tool::Tldr => "tldr",
            Tool::Curl => "curl",
            Tool::Fzf => "fzf",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// Which tools are available in this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    found: BTreeSet<Tool>,
}

impl Capabilities {
    /// Probe every [`Tool`] against the given PATH entries.
    pub fn probe(path_entries: &[PathBuf]) -> Self {
        let mut found = BTreeSet::new();
        for tool in Tool::ALL {
            match resolve_tool_path(tool.executable(), path_entries) {
                Some(path) => {
                    tracing::debug!("Found {} at {}", tool, path.display());
                    found.insert(tool);
                }
                None => tracing::debug!("{} not found on PATH", tool),
            }
        }
        Self { found }
    }

    /// A table with nothing available.
    pub fn none() -> Self {
        Self::default()
    }

    /// Mark a tool as available.
    pub fn with(mut self, tool: Tool) -> Self {
        self.found.insert(tool);
        self
    }

    /// Whether the tool was found.
    pub fn has(&self, tool: Tool) -> bool {
        self.found.contains(&tool)
    }
}
