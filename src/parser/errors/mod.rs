//! Rule diagnostics
//!
//! The rules themselves never fail loudly: absence becomes a placeholder
//! node and a failed alternative is just a non-match. This module turns
//! that output into reportable diagnostics:
//! - Categorized error codes for filtering and documentation
//! - `expected <tag>` messages for every placeholder in a tree
//! - Lexical errors for unrecognized input
//! - [`RuleError`] for whole-input parses that do not fit a rule

mod codes;
mod diagnostics;
mod error;

pub use codes::ErrorCode;
pub use diagnostics::{lexical_diagnostics, missing_diagnostics};
pub use error::{RuleError, SyntaxError};

#[cfg(test)]
mod tests;
