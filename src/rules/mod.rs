// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule module for commit title validation.
//!
//! Each rule is a stateless check of one commit title. A rule returns
//! zero or more violations; how they are reported is up to the caller.

mod area_formatting;
mod ends_with_dot;
mod engine;
mod rule;
mod violation;

pub use area_formatting::AreaFormatting;
pub use ends_with_dot::EndsWithDot;
pub use engine::RuleSet;
pub use rule::{builtin_rules, Rule};
pub use violation::Violation;
