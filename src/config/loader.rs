// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration parsing.
//!
//! The host reads the file; this only turns its text into a [`RulesConfig`].

use crate::error::{ConfigError, Result};

use super::schema::RulesConfig;

/// Parse rule options from a TOML string.
///
/// Accepts either the bare options (`[area-formatting]`) or a document
/// nesting them under a `[rules]` table. Missing keys take their defaults.
pub fn parse_config(content: &str) -> Result<RulesConfig> {
    let table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to parse TOML: {}", e),
    })?;

    let rules = match table.get("rules") {
        Some(toml::Value::Table(rules)) => rules.clone(),
        Some(_) => {
            return Err(ConfigError::InvalidValue {
                key: "rules".to_string(),
                message: "expected a table".to_string(),
            }
            .into())
        }
        None => table,
    };

    let config: RulesConfig =
        toml::Value::Table(rules)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                message: format!("Invalid rule options: {}", e),
            })?;

    config.validate()?;
    tracing::debug!(
        "Parsed rule options: area-formatting exclusions = {:?}",
        config.area_formatting.exclusions
    );
    Ok(config)
}
