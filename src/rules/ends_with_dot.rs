// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! ZT1: the title ends with a dot.

use crate::commit::Commit;
use crate::config::RulesConfig;

use super::rule::Rule;
use super::violation::Violation;

/// Requires the title to end with `.`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndsWithDot;

impl EndsWithDot {
    pub const ID: &'static str = "ZT1";
    pub const NAME: &'static str = "title-doesn't-end-with-dot";
    pub const MESSAGE: &'static str = "Title does not end with a '.' character";
}

impl Rule for EndsWithDot {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Title must end with a '.'"
    }

    fn validate(&self, commit: &Commit, _config: &RulesConfig) -> Vec<Violation> {
        if commit.title().ends_with('.') {
            Vec::new()
        } else {
            vec![Violation::new(Self::ID, Self::MESSAGE)]
        }
    }
}
