//! Rule-based parser for testing individual grammar rules
//!
//! Every predefined rule has a [`Rule`] name. [`parse_rule`] runs one rule
//! over a complete input against a shared default rule set, which is handy
//! for tests and for tools that only need a single construct.
//!
//! # Example
//!
//! ```
//! use kql_rules::parser::{Rule, parse_rule};
//!
//! let tree = parse_rule(Rule::DatabaseTableNameReference, "Samples.StormEvents").unwrap();
//! assert_eq!(tree.text(), "Samples.StormEvents");
//! ```

use once_cell::sync::Lazy;
use tracing::debug;

use super::errors::RuleError;
use super::grammar::PredefinedRules;
use super::syntax::SyntaxElement;
use super::token_source::TokenSource;
use crate::ide::CompletionHint;

/// Names of the predefined rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // === Literals ===
    /// `00000000-0000-0000-0000-000000000000`
    RawGuidLiteral,
    /// `guid(...)`
    GuidLiteral,
    StringLiteral,
    AnyGuidLiteralOrString,
    /// `[a.b]`
    BracketedStringLiteral,
    Value,
    Type,

    // === Declarations ===
    NameDeclaration,
    /// `a.b.c`
    QualifiedNameDeclaration,

    // === References ===
    ColumnNameReference,
    TableNameReference,
    ExternalTableNameReference,
    MaterializedViewNameReference,
    EntityGroups,
    DatabaseNameReference,
    ClusterNameReference,
    DatabaseFunctionNameReference,
    DatabaseOrTableNameReference,
    /// `db.table`
    DatabaseTableNameReference,
    DatabaseOrTableOrColumnNameReference,
    /// `db.table.column`
    DatabaseTableColumnNameReference,
    TableOrColumnNameReference,
    /// `table.column`
    TableColumnNameReference,

    // === Wildcards ===
    /// `Tab*`
    WildcardedNameDeclaration,
    /// `Db.Tab*`
    QualifiedWildcardedNameDeclaration,

    // === Functions ===
    /// `(a: string) { ... }`
    FunctionDeclaration,
    FunctionBody,

    // === Inputs ===
    QueryInput,
    ScriptInput,
    InputText,
    BracketedInputText,
}

impl Rule {
    pub const ALL: [Rule; 31] = [
        Rule::RawGuidLiteral,
        Rule::GuidLiteral,
        Rule::StringLiteral,
        Rule::AnyGuidLiteralOrString,
        Rule::BracketedStringLiteral,
        Rule::Value,
        Rule::Type,
        Rule::NameDeclaration,
        Rule::QualifiedNameDeclaration,
        Rule::ColumnNameReference,
        Rule::TableNameReference,
        Rule::ExternalTableNameReference,
        Rule::MaterializedViewNameReference,
        Rule::EntityGroups,
        Rule::DatabaseNameReference,
        Rule::ClusterNameReference,
        Rule::DatabaseFunctionNameReference,
        Rule::DatabaseOrTableNameReference,
        Rule::DatabaseTableNameReference,
        Rule::DatabaseOrTableOrColumnNameReference,
        Rule::DatabaseTableColumnNameReference,
        Rule::TableOrColumnNameReference,
        Rule::TableColumnNameReference,
        Rule::WildcardedNameDeclaration,
        Rule::QualifiedWildcardedNameDeclaration,
        Rule::FunctionDeclaration,
        Rule::FunctionBody,
        Rule::QueryInput,
        Rule::ScriptInput,
        Rule::InputText,
        Rule::BracketedInputText,
    ];

    /// Diagnostic label of the rule in the default rule set, if it has one
    pub fn tag(self) -> Option<&'static str> {
        DEFAULT_RULES.rule(self).tag()
    }

    /// Completion hint of the rule in the default rule set
    pub fn completion_hint(self) -> CompletionHint {
        DEFAULT_RULES.rule(self).completion_hint()
    }
}

static DEFAULT_RULES: Lazy<PredefinedRules> = Lazy::new(PredefinedRules::standard);

/// The shared default rule set
pub fn default_rules() -> &'static PredefinedRules {
    &DEFAULT_RULES
}

/// Parse `input` with `rule`; the rule must consume every token.
///
/// Trailing trivia is allowed. Placeholders synthesized inside the rule are
/// not errors here; inspect them with
/// [`missing_diagnostics`](crate::parser::errors::missing_diagnostics).
pub fn parse_rule(rule: Rule, input: &str) -> Result<SyntaxElement, RuleError> {
    debug!("[PARSE_RULE] rule={:?} len={}", rule, input.len());

    let source = TokenSource::from_text(input);
    let Some((element, end)) = DEFAULT_RULES.rule(rule).parse(&source, 0) else {
        return Err(RuleError::NoMatch { rule });
    };
    if !source.is_end(end) {
        let offset = source.offset_at(end);
        debug!("[PARSE_RULE] rule={:?} stopped at offset {:?}", rule, offset);
        return Err(RuleError::UnconsumedInput { rule, offset });
    }
    Ok(element)
}
