// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for tlint.
//!
//! Rule options are plain immutable values passed into each validation.
//! Nothing here reads files or environment variables; the host does that
//! and hands over the text or the individual overrides.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::parse_config;
pub use schema::*;
