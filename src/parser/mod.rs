//! Combinator-based rule layer for Kusto commands
//!
//! This module provides composable grammar rules using:
//! - **logos** for fast lexing
//! - closure-backed [`Parser`] values for the rules themselves
//!
//! Rules run over an immutable [`TokenSource`] and return a node plus the
//! next position, or nothing. Nothing is mutated while parsing, so one set
//! of rules can serve any number of parses at once.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → LexicalTokens with leading trivia
//!     ↓
//! TokenSource → indexable, ends with an end marker
//!     ↓
//! PredefinedRules → SyntaxElement trees (placeholders where input is absent)
//!     ↓
//! errors → diagnostics derived from placeholders
//! ```

pub mod combinators;
pub mod errors;
pub mod grammar;
mod lexer;
pub mod rule_parser;
mod symbol_match;
pub mod syntax;
mod syntax_kind;
mod token_source;

pub use combinators::Parser;
pub use errors::{ErrorCode, RuleError, SyntaxError, lexical_diagnostics, missing_diagnostics};
pub use grammar::{GrammarOptions, PredefinedRules, QueryGrammar};
pub use lexer::{Lexer, LexicalToken, tokenize};
pub use rule_parser::{Rule, default_rules, parse_rule};
pub use symbol_match::SymbolMatch;
pub use syntax::*;
pub use syntax_kind::SyntaxKind;
pub use token_source::TokenSource;

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
