// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit view consumed by the rules.

/// A commit as seen by the rules: its title and, optionally, the whole message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// First line of the commit message.
    pub title: String,
    /// The complete message, if the host has it. No built-in rule reads it.
    pub full_message: Option<String>,
}

impl Commit {
    /// Create a commit that only carries a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            full_message: None,
        }
    }

    /// Create a commit from a full message; the title is its first line.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let title = message
            .split('\n')
            .next()
            .unwrap_or_default()
            .trim_end_matches('\r')
            .to_string();

        Self {
            title,
            full_message: Some(message),
        }
    }

    /// The title line.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The full message, when known.
    pub fn full_message(&self) -> Option<&str> {
        self.full_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_message() {
        let commit = Commit::new("cli: Fix the bug.");
        assert_eq!(commit.title(), "cli: Fix the bug.");
        assert!(commit.full_message().is_none());
    }

    #[test]
    fn test_from_message_takes_first_line() {
        let commit = Commit::from_message("ui: Add sidebar.\n\nLonger body here.\n");
        assert_eq!(commit.title(), "ui: Add sidebar.");
        assert_eq!(
            commit.full_message(),
            Some("ui: Add sidebar.\n\nLonger body here.\n")
        );
    }

    #[test]
    fn test_from_message_strips_carriage_return() {
        let commit = Commit::from_message("ui: Add sidebar.\r\nBody\r\n");
        assert_eq!(commit.title(), "ui: Add sidebar.");
    }

    #[test]
    fn test_from_empty_message() {
        let commit = Commit::from_message("");
        assert_eq!(commit.title(), "");
        assert_eq!(commit.full_message(), Some(""));
    }
}
