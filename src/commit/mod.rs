// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module.
//!
//! The read-only commit view handed to every rule.

mod message;

pub use message::Commit;
