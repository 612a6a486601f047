//! Error types for cmdoc operations.
//!
//! This module defines [`CmdocError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Subprocess failures are caught where the call is made and turned into
//!   the next step of whichever fallback chain is running
//! - Only configuration problems travel all the way up to `main`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cmdoc operations.
#[derive(Debug, Error)]
pub enum CmdocError {
    /// An external tool could not be found or spawned.
    #[error("Tool not available: {tool}")]
    ToolUnavailable { tool: String },

    /// No commands could be discovered on this system.
    #[error("No commands found in PATH")]
    EnumerationEmpty,

    /// Explicitly requested settings file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cmdoc operations.
pub type Result<T> = std::result::Result<T, CmdocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_unavailable_displays_tool() {
        let err = CmdocError::ToolUnavailable { tool: "fzf".into() };
        assert!(err.to_string().contains("fzf"));
    }

    #[test]
    fn enumeration_empty_mentions_path() {
        assert!(CmdocError::EnumerationEmpty.to_string().contains("PATH"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CmdocError::ConfigParseError {
            path: PathBuf::from("/home/me/.config/cmdoc/config.yml"),
            message: "invalid type".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config.yml"));
        assert!(msg.contains("invalid type"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CmdocError = io_err.into();
        assert!(matches!(err, CmdocError::Io(_)));
    }
}
