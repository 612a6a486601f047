//! Command enumeration.
//!
//! Prefers asking a login shell (`compgen -c` also reports aliases and
//! functions); falls back to scanning PATH for executable files.

use std::fs;
use std::path::PathBuf;

use crate::tools::{is_executable, Capabilities, Invocation, ProcessRunner, Tool};

use super::set::CommandSet;

/// Shell snippet listing every command the shell knows.
const COMPGEN_SCRIPT: &str = "compgen -c";

/// Enumerate commands visible to the user's shell.
///
/// Never fails: an empty set is returned when nothing can be found, and it
/// is up to the caller to report that.
pub fn enumerate(
    caps: &Capabilities,
    runner: &mut dyn ProcessRunner,
    path_entries: &[PathBuf],
) -> CommandSet {
    if caps.has(Tool::Bash) {
        if let Some(set) = from_shell(runner) {
            tracing::debug!("Shell reported {} commands", set.len());
            return set;
        }
    }

    let set = scan_path(path_entries);
    tracing::debug!("PATH scan found {} commands", set.len());
    set
}

/// Ask `bash` in login mode for its completion list.
///
/// Returns None when the shell fails or reports nothing.
fn from_shell(runner: &mut dyn ProcessRunner) -> Option<CommandSet> {
    let invocation = Invocation::new(Tool::Bash.executable())
        .args(["-lc", COMPGEN_SCRIPT])
        .quiet_stderr();

    match runner.output(&invocation) {
        Ok(captured) if captured.exit.success() => {
            let set = parse_lines(&captured.stdout);
            (!set.is_empty()).then_some(set)
        }
        Ok(captured) => {
            tracing::debug!("compgen exited with {:?}", captured.exit.code);
            None
        }
        Err(e) => {
            tracing::debug!("compgen unavailable: {}", e);
            None
        }
    }
}

/// One name per line; blank lines ignored.
pub fn parse_lines(output: &str) -> CommandSet {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Collect executable regular files from every PATH directory.
///
/// Directories that cannot be listed are skipped.
pub fn scan_path(path_entries: &[PathBuf]) -> CommandSet {
    let mut set = CommandSet::new();

    for dir in path_entries {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", dir.display(), e);
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !is_executable(&path) {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                set.insert(name);
            }
        }
    }

    set
}
