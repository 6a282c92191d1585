//! Foundation types for the rule layer.
//!
//! This module provides:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`text`] - Text helpers shared by the lexer and the grammar
//!
//! This module has NO dependencies on other crate modules.

pub mod text;

pub use text::{bracketed_string_content, has_line_breaks, string_literal_value};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
