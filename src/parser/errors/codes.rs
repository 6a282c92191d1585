//! Error code definitions for rule diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (delimiters)
//! - E03xx: Name errors (declarations, references)
//! - E04xx: Expression errors (expressions, values, literals, types, text)
//! - E07xx: Function errors (declarations, bodies, statements)
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for rule diagnostics
///
/// Each code names one kind of placeholder the rules can synthesize, plus
/// a few generic fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character sequence the lexer does not recognize
    E0101,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Missing delimiter or separator token
    E0201,

    // =========================================================================
    // E03xx: Name errors
    // =========================================================================
    /// Missing name in a declaration position
    E0301,
    /// Missing name reference
    E0302,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Missing expression
    E0401,
    /// Missing value
    E0402,
    /// Missing string literal
    E0403,
    /// Missing type
    E0404,
    /// Missing input text
    E0405,

    // =========================================================================
    // E07xx: Function errors
    // =========================================================================
    /// Missing function declaration
    E0701,
    /// Missing function body
    E0702,
    /// Missing statement
    E0703,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Input left over after a rule matched
    E0901,
    /// Expected a specific token
    E0902,
}

impl ErrorCode {
    /// Every code, in numeric order
    pub const ALL: [ErrorCode; 14] = [
        Self::E0101,
        Self::E0201,
        Self::E0301,
        Self::E0302,
        Self::E0401,
        Self::E0402,
        Self::E0403,
        Self::E0404,
        Self::E0405,
        Self::E0701,
        Self::E0702,
        Self::E0703,
        Self::E0901,
        Self::E0902,
    ];

    /// Get the string representation of the error code (e.g., "E0301")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            Self::E0405 => "E0405",
            Self::E0701 => "E0701",
            Self::E0702 => "E0702",
            Self::E0703 => "E0703",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "lexical error",
            Self::E0201 => "structural error",
            Self::E0301 | Self::E0302 => "name error",
            Self::E0401 | Self::E0402 | Self::E0403 | Self::E0404 | Self::E0405 => {
                "expression error"
            }
            Self::E0701 | Self::E0702 | Self::E0703 => "function error",
            Self::E0901 | Self::E0902 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0201 => "missing delimiter",
            Self::E0301 => "expected <name>",
            Self::E0302 => "expected name reference",
            Self::E0401 => "expected <expression>",
            Self::E0402 => "expected <value>",
            Self::E0403 => "expected <string>",
            Self::E0404 => "expected <type>",
            Self::E0405 => "expected <input_text>",
            Self::E0701 => "expected <function_declaration>",
            Self::E0702 => "expected <function_body>",
            Self::E0703 => "expected <statement>",
            Self::E0901 => "unexpected input",
            Self::E0902 => "expected token",
        }
    }

    /// Check if this error reports a placeholder synthesized by recovery
    pub fn is_missing_node(&self) -> bool {
        !matches!(self, Self::E0101 | Self::E0901)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
