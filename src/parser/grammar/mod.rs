//! Grammar modules for the predefined rules
//!
//! This module contains the rule-building logic, leaf-first:
//! - `query` - Default query-language sub-grammars (literals, types, function signatures)
//! - `names` - Name spellings as one ordered alternation
//! - `missing` - Placeholder factories for required-but-absent elements
//! - `input_text` - Raw-text capture over token runs
//! - `paths` - Left-folded qualified paths
//! - `predefined` - Every named rule, built once into [`PredefinedRules`]
//!
//! Rules are values of [`Parser`](crate::parser::Parser) rather than
//! functions over a mutable parser, so they can be built once and shared.

pub mod input_text;
pub mod missing;
pub mod names;
pub mod paths;
pub mod predefined;
pub mod query;

pub use missing::{
    MissingFactory, missing_expression, missing_function_body, missing_function_declaration,
    missing_input_text, missing_name_declaration, missing_name_reference,
    missing_name_reference_of, missing_statement, missing_string_literal, missing_type,
    missing_value,
};
pub use names::{NAME_FORMS, NameForm};
pub use paths::qualified_path;
pub use predefined::{GrammarOptions, PredefinedRules};
pub use query::QueryGrammar;
