// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for tlint.
//!
//! Rule violations are ordinary results and never show up here. Errors
//! only come from the configuration surface: parsing a host-supplied
//! document or applying a `rule.option=value` override.

use thiserror::Error;

/// The main error type for tlint operations.
#[derive(Error, Debug)]
pub enum TlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-related errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("No rule with id or name '{rule}'")]
    UnknownRule { rule: String },

    #[error("Rule '{rule}' has no option '{option}'")]
    UnknownOption { rule: String, option: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for tlint operations.
pub type Result<T> = std::result::Result<T, TlintError>;
