//! Built-in line-oriented filter.
//!
//! Used when no external fuzzy picker is installed. Each round shows the
//! current query with up to `limit` matches and reads one line: an empty
//! line opens the first match, an exact command name opens that command,
//! anything else becomes the new query.

use crate::commands::CommandSet;

/// Source of input lines and sink for rendered rounds.
pub trait FilterScreen {
    /// Show the query and its visible matches.
    fn render(&mut self, query: &str, matches: &[&str]);

    /// Read one line. None on end of input or interrupt.
    fn read_line(&mut self) -> Option<String>;
}

/// What a line of input does to the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterStep {
    /// Open this command.
    Select(String),
    /// Filter again with this query.
    Refine(String),
}

/// Names containing `query`, ignoring case, in set order, at most `limit`.
pub fn matches<'a>(commands: &'a CommandSet, query: &str, limit: usize) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    commands
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

/// Decide what one line of input means for the current `query`.
///
/// An empty line opens the first of the (at most `limit`) matches; an exact
/// name is looked up in the whole set so hidden commands can still be opened.
pub fn step(commands: &CommandSet, query: &str, input: &str, limit: usize) -> FilterStep {
    let input = input.trim();

    if input.is_empty() {
        if let Some(first) = matches(commands, query, limit).first() {
            return FilterStep::Select((*first).to_string());
        }
    } else if commands.contains(input) {
        return FilterStep::Select(input.to_string());
    }

    FilterStep::Refine(input.to_string())
}

/// Run the filter until a command is chosen or input ends.
pub fn run_filter(
    commands: &CommandSet,
    screen: &mut dyn FilterScreen,
    limit: usize,
) -> Option<String> {
    let mut query = String::new();

    loop {
        screen.render(&query, &matches(commands, &query, limit));

        let input = screen.read_line()?;
        match step(commands, &query, &input, limit) {
            FilterStep::Select(name) => {
                tracing::debug!("Filter selected {}", name);
                return Some(name);
            }
            FilterStep::Refine(next) => query = next,
        }
    }
}
