// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The rule capability.

use crate::commit::Commit;
use crate::config::RulesConfig;

use super::area_formatting::AreaFormatting;
use super::ends_with_dot::EndsWithDot;
use super::violation::Violation;

/// A commit rule.
///
/// Rules are stateless: `validate` depends only on its arguments, so one
/// rule may check many commits at once from different threads.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Stable short identifier (e.g. `ZT1`).
    fn id(&self) -> &'static str;

    /// Human-readable slug.
    fn name(&self) -> &'static str;

    /// One-line description of what the rule enforces.
    fn description(&self) -> &'static str {
        ""
    }

    /// Check a commit. An empty list means it passes.
    fn validate(&self, commit: &Commit, config: &RulesConfig) -> Vec<Violation>;
}

/// The built-in rules, in id order.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(EndsWithDot), Box::new(AreaFormatting)]
}
