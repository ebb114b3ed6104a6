// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Violation record returned by rules.

use serde::Serialize;
use std::fmt;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Id of the rule that produced it (e.g. `ZT1`).
    pub rule_id: String,
    /// Human-readable message.
    pub message: String,
    /// 1-based line the violation applies to.
    pub line_number: usize,
}

impl Violation {
    /// Create a violation on the title line.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            line_number: 1,
        }
    }

    /// Move the violation to another line. Lines start at 1.
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = line_number.max(1);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.line_number, self.rule_id, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_on_title_line() {
        let violation = Violation::new("ZT1", "Title does not end with a '.' character");
        assert_eq!(violation.line_number, 1);
        assert_eq!(violation.rule_id, "ZT1");
    }

    #[test]
    fn test_at_line_never_below_one() {
        let violation = Violation::new("ZT1", "msg").at_line(0);
        assert_eq!(violation.line_number, 1);

        let violation = Violation::new("ZT1", "msg").at_line(3);
        assert_eq!(violation.line_number, 3);
    }

    #[test]
    fn test_display() {
        let violation = Violation::new("ZT1", "Title does not end with a '.' character");
        assert_eq!(
            violation.to_string(),
            "1: ZT1 Title does not end with a '.' character"
        );
    }

    #[test]
    fn test_serialize() {
        let violation = Violation::new(
            "ZT2",
            "Summary of change, after area(s), should be capitalized",
        );
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["rule_id"], "ZT2");
        assert_eq!(json["line_number"], 1);
    }
}
