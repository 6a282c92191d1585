//! Syntax error types
//!
//! Provides:
//! - [`SyntaxError`], a coded diagnostic over rule output
//! - [`RuleError`], the failure of a whole-input rule parse

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;
use crate::parser::rule_parser::Rule;

/// A diagnostic over rule output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location; empty for placeholders
    pub range: TextRange,
    /// Category of the error
    pub code: ErrorCode,
}

impl SyntaxError {
    /// Create an error over a source range
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }
}

/// Failure of [`parse_rule`](crate::parser::parse_rule) over a whole input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The rule did not match at the start of the input.
    #[error("{rule:?} did not match the input")]
    NoMatch { rule: Rule },

    /// The rule matched a prefix; `offset` is where the rest begins.
    #[error("{rule:?} matched, but input remains at offset {offset:?}")]
    UnconsumedInput { rule: Rule, offset: TextSize },
}

impl RuleError {
    /// The rule that was run
    pub fn rule(&self) -> Rule {
        match self {
            RuleError::NoMatch { rule } | RuleError::UnconsumedInput { rule, .. } => *rule,
        }
    }

    /// The error as a diagnostic at the point of failure
    pub fn to_syntax_error(&self) -> SyntaxError {
        match self {
            RuleError::NoMatch { .. } => {
                SyntaxError::at_offset(self.to_string(), TextSize::new(0), ErrorCode::E0902)
            }
            RuleError::UnconsumedInput { offset, .. } => {
                SyntaxError::at_offset(self.to_string(), *offset, ErrorCode::E0901)
            }
        }
    }
}
