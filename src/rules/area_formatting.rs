// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! ZT2: titles start with lower-case areas and a capitalized summary.
//!
//! A title is split on `": "`. Every component but the last is an area,
//! which may combine sub-areas with `/` (`cli/ui: Improve layout.`); the
//! last component is the summary.

use crate::commit::Commit;
use crate::config::{AreaFormattingConfig, RulesConfig};

use super::rule::Rule;
use super::violation::Violation;

const AREA_DELIMITER: &str = ": ";
const SUBAREA_DELIMITER: char = '/';

/// Enforces `area[/subarea]...: Summary.` titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaFormatting;

impl AreaFormatting {
    pub const ID: &'static str = "ZT2";
    pub const NAME: &'static str = "area-formatting";

    pub const MISSING_AREA_MESSAGE: &'static str =
        "Title should start with at least one area, followed by a colon and space";
    pub const SUMMARY_MESSAGE: &'static str =
        "Summary of change, after area(s), should be capitalized";

    /// Check a commit against explicit options.
    pub fn validate_with(&self, commit: &Commit, config: &AreaFormattingConfig) -> Vec<Violation> {
        let components: Vec<&str> = commit.title().split(AREA_DELIMITER).collect();

        // The remaining checks need at least one area and a summary.
        let Some((summary, areas)) = components.split_last().filter(|(_, a)| !a.is_empty())
        else {
            return vec![Violation::new(Self::ID, Self::MISSING_AREA_MESSAGE)];
        };

        let mut violations = Vec::new();

        let area_message = area_message(&config.exclusions);
        for area in areas {
            if !is_well_formed_area(area, config) {
                tracing::trace!("Area {:?} is not a lower-case area token", area);
                violations.push(Violation::new(Self::ID, area_message.clone()));
            }
        }

        if !summary.chars().next().is_some_and(char::is_uppercase) {
            violations.push(Violation::new(Self::ID, Self::SUMMARY_MESSAGE));
        }

        violations
    }
}

impl Rule for AreaFormatting {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Title must start with lower-case area(s) and ': ', then a capitalized summary"
    }

    fn validate(&self, commit: &Commit, config: &RulesConfig) -> Vec<Violation> {
        self.validate_with(commit, &config.area_formatting)
    }
}

/// Render the area message, naming the exclusions when there are any.
fn area_message(exclusions: &[String]) -> String {
    let exclusions_text = if exclusions.is_empty() {
        String::new()
    } else {
        format!(" (or {})", exclusions.join(", or "))
    };
    format!(
        "Areas at start of title should be lower case{}, followed by ': '",
        exclusions_text
    )
}

/// An area has no spaces and every `/`-separated token is lower case or excluded.
fn is_well_formed_area(area: &str, config: &AreaFormattingConfig) -> bool {
    !area.contains(' ')
        && area
            .split(SUBAREA_DELIMITER)
            .all(|token| config.is_excluded(token) || is_lower_case(token))
}

/// No upper-case letters and lower-casing changes nothing.
///
/// Tokens without cased letters pass. Upper-case letters with no
/// lower-case mapping (`ℂ`) still fail.
fn is_lower_case(token: &str) -> bool {
    token
        .chars()
        .all(|c| !c.is_uppercase() && c.to_lowercase().eq(std::iter::once(c)))
}
