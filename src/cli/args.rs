//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// cmdoc - Fuzzy-search your commands and open their documentation.
///
/// With no COMMAND, pick one interactively. With several words, the
/// hyphenated form is tried first (git commit -> git-commit), then the
/// first word alone.
#[derive(Debug, Parser)]
#[command(name = "cmdoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to open documentation for
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub words: Vec<String>,

    /// Print every discoverable command and exit
    #[arg(long, conflicts_with = "words")]
    pub list: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with_all = ["words", "list"])]
    pub completions: Option<Shell>,

    /// Path to settings file (overrides <config dir>/cmdoc/config.yml)
    #[arg(short, long, env = "CMDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use the built-in filter even if fzf is installed
    #[arg(long)]
    pub no_fzf: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
