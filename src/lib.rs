//! # kql-rules
//!
//! Predefined grammar rules for Kusto command parsing: names, qualified
//! paths, symbol-tagged references, wildcards, inline function declarations
//! and raw text capture.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Completion hints read by editors
//!   ↓
//! parser    → Logos lexer, combinators, syntax tree, predefined rules, diagnostics
//!   ↓
//! base      → Primitives (TextRange, text helpers)
//! ```
//!
//! ## Example
//!
//! ```
//! use kql_rules::parser::{PredefinedRules, Rule, TokenSource};
//!
//! let rules = PredefinedRules::standard();
//! let source = TokenSource::from_text("Samples.StormEvents.State");
//! let (tree, end) = rules.rule(Rule::DatabaseTableColumnNameReference).parse(&source, 0).unwrap();
//! assert!(source.is_end(end));
//! assert_eq!(tree.as_path().unwrap().segments().len(), 3);
//! ```

/// Foundation types: TextRange, text helpers
pub mod base;

/// Parser: lexer, combinators, syntax tree, predefined rules
pub mod parser;

/// IDE features: completion hints
pub mod ide;

// Re-export commonly needed items
pub use base::{TextRange, TextSize};
pub use parser::{
    GrammarOptions, PredefinedRules, Rule, RuleError, SymbolMatch, SyntaxElement, parse_rule,
};
