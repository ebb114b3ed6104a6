// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the per-rule options a host can hand to the rules, usually
//! parsed from the `[rules]` table of its own configuration file.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result, TlintError};
use crate::rules::{AreaFormatting, EndsWithDot};

/// Options for every built-in rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Options for `area-formatting` (ZT2).
    #[serde(rename = "area-formatting")]
    pub area_formatting: AreaFormattingConfig,
}

impl RulesConfig {
    /// Apply a `rule.option=value` override.
    ///
    /// `rule` may be a rule id (`ZT2`) or name (`area-formatting`). List
    /// values are comma-separated.
    pub fn set_option(&mut self, rule: &str, option: &str, value: &str) -> Result<()> {
        tracing::trace!("Setting option {}.{} = {:?}", rule, option, value);

        if rule == AreaFormatting::ID || rule == AreaFormatting::NAME {
            match option {
                "exclusions" => {
                    let updated = AreaFormattingConfig {
                        exclusions: split_list(value),
                    };
                    updated.validate()?;
                    self.area_formatting = updated;
                    Ok(())
                }
                _ => Err(unknown_option(AreaFormatting::NAME, option)),
            }
        } else if rule == EndsWithDot::ID || rule == EndsWithDot::NAME {
            Err(unknown_option(EndsWithDot::NAME, option))
        } else {
            Err(ConfigError::UnknownRule {
                rule: rule.to_string(),
            }
            .into())
        }
    }

    /// Check every rule's options for values that can never take effect.
    pub fn validate(&self) -> Result<()> {
        self.area_formatting.validate()
    }
}

fn unknown_option(rule: &str, option: &str) -> TlintError {
    ConfigError::UnknownOption {
        rule: rule.to_string(),
        option: option.to_string(),
    }
    .into()
}

/// Options for the area formatting rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AreaFormattingConfig {
    /// Area tokens allowed to break the lower-case rule, matched exactly.
    ///
    /// Order is kept; it is the order the tokens are listed in messages.
    #[serde(deserialize_with = "deserialize_list")]
    pub exclusions: Vec<String>,
}

impl Default for AreaFormattingConfig {
    fn default() -> Self {
        Self {
            exclusions: vec!["WIP".to_string()],
        }
    }
}

impl AreaFormattingConfig {
    /// Create options with the given exclusions.
    pub fn with_exclusions<I, S>(exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `token` is exempt from the lower-case rule.
    pub fn is_excluded(&self, token: &str) -> bool {
        self.exclusions.iter().any(|e| e == token)
    }

    /// Reject exclusions that could never match a single area token.
    ///
    /// Tokens are split on `/`, and areas containing a space always fail.
    pub fn validate(&self) -> Result<()> {
        for exclusion in &self.exclusions {
            if exclusion.contains('/') || exclusion.contains(' ') {
                return Err(ConfigError::InvalidValue {
                    key: "area-formatting.exclusions".to_string(),
                    message: format!(
                        "'{}' cannot match an area token (no '/' or ' ' allowed)",
                        exclusion
                    ),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Split a comma-separated list, trimming items and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accept either a list of strings or a single comma-separated string.
fn deserialize_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrString {
        List(Vec<String>),
        String(String),
    }

    Ok(match ListOrString::deserialize(deserializer)? {
        ListOrString::List(items) => items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        ListOrString::String(value) => split_list(&value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exclusions() {
        let config = RulesConfig::default();
        assert_eq!(config.area_formatting.exclusions, vec!["WIP"]);
        assert!(config.area_formatting.is_excluded("WIP"));
        assert!(!config.area_formatting.is_excluded("wip"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("WIP, DRAFT ,,RFC"), vec!["WIP", "DRAFT", "RFC"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_set_option_by_name_and_id() {
        let mut config = RulesConfig::default();
        config
            .set_option("area-formatting", "exclusions", "WIP,DRAFT")
            .unwrap();
        assert_eq!(config.area_formatting.exclusions, vec!["WIP", "DRAFT"]);

        config.set_option("ZT2", "exclusions", "").unwrap();
        assert!(config.area_formatting.exclusions.is_empty());
    }

    #[test]
    fn test_set_option_unknown_rule() {
        let mut config = RulesConfig::default();
        let err = config.set_option("ZT9", "exclusions", "WIP").unwrap_err();
        assert!(matches!(
            err,
            TlintError::Config(ConfigError::UnknownRule { .. })
        ));
    }

    #[test]
    fn test_set_option_unknown_option() {
        let mut config = RulesConfig::default();
        let err = config.set_option("ZT1", "exclusions", "WIP").unwrap_err();
        assert!(matches!(
            err,
            TlintError::Config(ConfigError::UnknownOption { .. })
        ));

        let err = config
            .set_option("area-formatting", "separator", ":")
            .unwrap_err();
        assert!(err.to_string().contains("separator"));
    }

    #[test]
    fn test_set_option_rejects_unmatchable_exclusion() {
        let mut config = RulesConfig::default();
        let err = config
            .set_option("ZT2", "exclusions", "WIP,api/v2")
            .unwrap_err();
        assert!(matches!(
            err,
            TlintError::Config(ConfigError::InvalidValue { .. })
        ));
        // A rejected override leaves the previous value in place.
        assert_eq!(config.area_formatting.exclusions, vec!["WIP"]);
    }

    #[test]
    fn test_exclusion_with_tab_is_accepted() {
        let mut config = RulesConfig::default();
        config.set_option("ZT2", "exclusions", "WIP,A\tB").unwrap();
        assert_eq!(config.area_formatting.exclusions, vec!["WIP", "A\tB"]);

        let err = config
            .set_option("ZT2", "exclusions", "Work in progress")
            .unwrap_err();
        assert!(matches!(
            err,
            TlintError::Config(ConfigError::InvalidValue { .. })
        ));
    }
}
