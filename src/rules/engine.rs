// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule set for commit validation.

use crate::commit::Commit;
use crate::config::RulesConfig;

use super::rule::{builtin_rules, Rule};
use super::violation::Violation;

/// An ordered collection of rules sharing one immutable configuration.
#[derive(Debug)]
pub struct RuleSet {
    config: RulesConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Create a rule set with the built-in rules.
    pub fn new(config: RulesConfig) -> Self {
        Self {
            config,
            rules: builtin_rules(),
        }
    }

    /// Create a rule set with no rules.
    pub fn empty(config: RulesConfig) -> Self {
        Self {
            config,
            rules: Vec::new(),
        }
    }

    /// Add a custom rule after the existing ones.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// The options every rule is validated with.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Find a rule by id or name.
    pub fn find(&self, key: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.id() == key || rule.name() == key)
            .map(|rule| rule.as_ref())
    }

    /// Run every rule on a commit, keeping each rule's violations in order.
    pub fn validate(&self, commit: &Commit) -> Vec<Violation> {
        tracing::debug!(
            "Validating title {:?} with {} rules",
            commit.title(),
            self.rules.len()
        );

        self.rules
            .iter()
            .flat_map(|rule| rule.validate(commit, &self.config))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}
