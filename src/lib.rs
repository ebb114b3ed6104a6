// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! tlint - commit title rules
//!
//! Stateless rules that check the title line of a commit message.
//!
//! # Rules
//!
//! - **ZT1** `title-doesn't-end-with-dot`: the title ends with `.`
//! - **ZT2** `area-formatting`: the title starts with one or more
//!   lower-case areas joined by `": "` (sub-areas joined by `/`), followed
//!   by a capitalized summary, e.g. `cli/ui: Improve layout.`
//!
//! Loading configuration, choosing which rules run and reporting the
//! results belong to the caller.
//!
//! # Example
//!
//! ```
//! use tlint::commit::Commit;
//! use tlint::config::parse_config;
//! use tlint::rules::RuleSet;
//!
//! let config = parse_config("[area-formatting]\nexclusions = [\"WIP\", \"RFC\"]").unwrap();
//! let rules = RuleSet::new(config);
//!
//! assert!(rules.validate(&Commit::new("RFC: Sketch the plugin API.")).is_empty());
//!
//! let violations = rules.validate(&Commit::new("Fix the bug"));
//! assert_eq!(violations.len(), 2);
//! assert_eq!(violations[0].to_string(), "1: ZT1 Title does not end with a '.' character");
//! ```

// Module declarations
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use commit::Commit;
pub use config::RulesConfig;
pub use error::{ConfigError, Result, TlintError};
pub use rules::{Rule, RuleSet, Violation};
