//! Sorted, deduplicated set of command names.

use std::collections::BTreeSet;

/// Command names visible to the user's shell.
///
/// Backed by a `BTreeSet`, so iteration is always sorted and duplicates
/// collapse on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSet {
    names: BTreeSet<String>,
}

impl CommandSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Whether `name` is in the set (case-sensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// One name per line, each newline-terminated.
    pub fn to_lines(&self) -> String {
        self.iter().map(|name| format!("{}\n", name)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for CommandSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
