//! The predefined rules command grammars are assembled from.
//!
//! [`PredefinedRules`] is built once from a [`QueryGrammar`] and then only
//! read. Every rule is a [`Parser<SyntaxElement>`] and every rule has a
//! placeholder factory registered for it, so a command grammar can make any
//! of them required without writing its own recovery.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::parser::combinators::{Parser, first, if_then, required, rule2, rule3, text, token};
use crate::parser::grammar::input_text::{bracketed_input_text, bracketed_string_token, input_text};
use crate::parser::grammar::missing::{
    MissingFactory, missing_expression, missing_function_body, missing_function_declaration,
    missing_input_text, missing_name_declaration, missing_name_reference_of, missing_statement,
    missing_string_literal, missing_type, missing_value,
};
use crate::parser::grammar::names::name;
use crate::parser::grammar::paths::qualified_path;
use crate::parser::grammar::query::QueryGrammar;
use crate::parser::rule_parser::Rule;
use crate::parser::symbol_match::SymbolMatch;
use crate::parser::syntax::{
    FunctionDeclaration, LiteralExpression, LiteralKind, Name, NameDeclaration, NameReference,
    SyntaxElement, WildcardedName,
};
use crate::parser::syntax_kind::SyntaxKind;

/// Knobs for building [`PredefinedRules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarOptions {
    /// Let bracketed strings (`[a.b]`) run across line breaks.
    pub multiline_bracketed_strings: bool,
    /// Separator of qualified paths.
    pub path_separator: SmolStr,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            multiline_bracketed_strings: false,
            path_separator: SmolStr::new_static("."),
        }
    }
}

impl GrammarOptions {
    pub fn with_multiline_bracketed_strings(mut self, multiline: bool) -> Self {
        self.multiline_bracketed_strings = multiline;
        self
    }

    pub fn with_path_separator(mut self, separator: impl Into<SmolStr>) -> Self {
        self.path_separator = separator.into();
        self
    }
}

/// All predefined rules, built once and shared.
#[derive(Clone)]
pub struct PredefinedRules {
    pub raw_guid_literal: Parser<SyntaxElement>,
    pub guid_literal: Parser<SyntaxElement>,
    pub string_literal: Parser<SyntaxElement>,
    pub any_guid_literal_or_string: Parser<SyntaxElement>,
    pub bracketed_string_literal: Parser<SyntaxElement>,
    pub value: Parser<SyntaxElement>,
    pub type_: Parser<SyntaxElement>,

    pub name_declaration: Parser<SyntaxElement>,
    pub qualified_name_declaration: Parser<SyntaxElement>,

    pub column_name_reference: Parser<SyntaxElement>,
    pub table_name_reference: Parser<SyntaxElement>,
    pub external_table_name_reference: Parser<SyntaxElement>,
    pub materialized_view_name_reference: Parser<SyntaxElement>,
    pub entity_groups: Parser<SyntaxElement>,
    pub database_name_reference: Parser<SyntaxElement>,
    pub cluster_name_reference: Parser<SyntaxElement>,
    pub database_function_name_reference: Parser<SyntaxElement>,
    pub database_or_table_name_reference: Parser<SyntaxElement>,
    pub database_table_name_reference: Parser<SyntaxElement>,
    pub database_or_table_or_column_name_reference: Parser<SyntaxElement>,
    pub database_table_column_name_reference: Parser<SyntaxElement>,
    pub table_or_column_name_reference: Parser<SyntaxElement>,
    pub table_column_name_reference: Parser<SyntaxElement>,

    pub wildcarded_name_declaration: Parser<SyntaxElement>,
    pub qualified_wildcarded_name_declaration: Parser<SyntaxElement>,

    pub function_declaration: Parser<SyntaxElement>,
    pub function_body: Parser<SyntaxElement>,

    pub query_input: Parser<SyntaxElement>,
    pub script_input: Parser<SyntaxElement>,
    pub input_text: Parser<SyntaxElement>,
    pub bracketed_input_text: Parser<SyntaxElement>,

    missing: FxHashMap<Rule, MissingFactory>,
    options: GrammarOptions,
}

impl PredefinedRules {
    /// Rules over the standard query grammar with default options.
    pub fn standard() -> Self {
        let grammar = QueryGrammar::standard();
        Self::new(&grammar, grammar.query_input.clone(), grammar.script_input.clone())
    }

    pub fn new(
        grammar: &QueryGrammar,
        query_input: Parser<SyntaxElement>,
        script_input: Parser<SyntaxElement>,
    ) -> Self {
        Self::with_options(grammar, query_input, script_input, GrammarOptions::default())
    }

    pub fn with_options(
        grammar: &QueryGrammar,
        query_input: Parser<SyntaxElement>,
        script_input: Parser<SyntaxElement>,
        options: GrammarOptions,
    ) -> Self {
        let separator = options.path_separator.as_str();

        // Literals
        let raw_guid_literal = guid_literal_of(SyntaxKind::RAW_GUID_LITERAL).with_tag("<guid>");
        let guid_literal = guid_literal_of(SyntaxKind::GUID_LITERAL).with_tag("<guid>");
        let string_literal = grammar.string_literal.clone().with_tag("<string>");
        let any_guid_literal_or_string = first(vec![
            guid_literal.clone(),
            string_literal.clone(),
            raw_guid_literal.clone(),
        ]);

        let bracketed_string = bracketed_string_token(options.multiline_bracketed_strings);
        let bracketed_string_literal = bracketed_string
            .clone()
            .map(|token| SyntaxElement::from(LiteralExpression::new(LiteralKind::String, token)))
            .with_tag("<bracketed-string>");

        let value = first(vec![
            guid_literal.clone(),
            raw_guid_literal.clone(),
            grammar.literal.clone(),
        ])
        .with_tag("<value>");
        let type_ = grammar.param_type.clone().with_tag("<type>");

        // Names
        let name_forms = name(grammar, &bracketed_string);
        let name_declaration = name_forms
            .clone()
            .map(|name| SyntaxElement::from(NameDeclaration::new(name)))
            .with_tag("<name>");
        let qualified_name_declaration = qualified_path(
            name_declaration.clone(),
            name_declaration.clone(),
            separator,
            missing_name_declaration,
        )
        .with_tag("<qualified_name>");

        // References
        let column_name_reference = reference(&name_forms, SymbolMatch::COLUMN);
        let table_name_reference = reference(&name_forms, SymbolMatch::TABLE);
        let external_table_name_reference = reference(&name_forms, SymbolMatch::EXTERNAL_TABLE);
        let materialized_view_name_reference = reference(&name_forms, SymbolMatch::MATERIALIZED_VIEW);
        let entity_groups = reference(&name_forms, SymbolMatch::ENTITY_GROUP);
        let database_name_reference = reference(&name_forms, SymbolMatch::DATABASE);
        let cluster_name_reference = reference(&name_forms, SymbolMatch::CLUSTER);
        let database_function_name_reference = reference(&name_forms, SymbolMatch::DATABASE_FUNCTION);

        let database_or_table = SymbolMatch::DATABASE | SymbolMatch::TABLE;
        let database_or_table_name_reference = reference(&name_forms, database_or_table);
        let database_table_name_reference = qualified_path(
            database_or_table_name_reference.clone(),
            table_name_reference.clone(),
            separator,
            || missing_name_reference_of(SymbolMatch::TABLE),
        )
        .with_tag("<database_table>");

        let database_or_table_or_column = database_or_table | SymbolMatch::COLUMN;
        let database_or_table_or_column_name_reference =
            reference(&name_forms, database_or_table_or_column);
        let database_table_column_name_reference = qualified_path(
            database_or_table_or_column_name_reference.clone(),
            database_or_table_or_column_name_reference.clone(),
            separator,
            move || missing_name_reference_of(database_or_table_or_column),
        )
        .with_tag("<database_table_column>");

        let table_or_column = SymbolMatch::TABLE | SymbolMatch::COLUMN;
        let table_or_column_name_reference = reference(&name_forms, table_or_column);
        let table_column_name_reference = qualified_path(
            table_or_column_name_reference.clone(),
            table_or_column_name_reference.clone(),
            separator,
            move || missing_name_reference_of(table_or_column),
        )
        .with_tag("<table_column>");

        // Wildcards
        let wildcarded_name_declaration = grammar
            .wildcarded_identifier
            .clone()
            .map(|pattern| {
                SyntaxElement::from(NameDeclaration::new(Name::Wildcarded(WildcardedName {
                    pattern,
                })))
            })
            .with_tag("<wildcarded_name>");
        let wildcarded_or_name =
            first(vec![wildcarded_name_declaration.clone(), name_declaration.clone()]);
        let qualifier_then_pattern = rule3(
            name_declaration.clone(),
            text(separator),
            wildcarded_or_name.clone(),
            SyntaxElement::path,
        );
        let qualified_wildcarded_name_declaration = first(vec![
            if_then(qualifier_then_pattern.clone(), qualifier_then_pattern),
            wildcarded_or_name,
        ])
        .with_tag("<qualified_wildcarded_name>");

        // Functions
        let function_declaration = rule2(
            grammar.function_parameters.clone(),
            grammar.function_body.clone(),
            |parameters, body| SyntaxElement::from(FunctionDeclaration { parameters, body }),
        )
        .with_tag("<function_declaration>");
        let function_body = grammar
            .function_body
            .clone()
            .map(SyntaxElement::from)
            .with_tag("<function_body>");

        let input_text = input_text();
        let bracketed_input_text = bracketed_input_text();

        let missing = missing_registry(
            database_or_table,
            database_or_table_or_column,
            table_or_column,
        );

        Self {
            raw_guid_literal,
            guid_literal,
            string_literal,
            any_guid_literal_or_string,
            bracketed_string_literal,
            value,
            type_,
            name_declaration,
            qualified_name_declaration,
            column_name_reference,
            table_name_reference,
            external_table_name_reference,
            materialized_view_name_reference,
            entity_groups,
            database_name_reference,
            cluster_name_reference,
            database_function_name_reference,
            database_or_table_name_reference,
            database_table_name_reference,
            database_or_table_or_column_name_reference,
            database_table_column_name_reference,
            table_or_column_name_reference,
            table_column_name_reference,
            wildcarded_name_declaration,
            qualified_wildcarded_name_declaration,
            function_declaration,
            function_body,
            query_input,
            script_input,
            input_text,
            bracketed_input_text,
            missing,
            options,
        }
    }

    pub fn options(&self) -> &GrammarOptions {
        &self.options
    }

    /// The parser behind `rule`.
    pub fn rule(&self, rule: Rule) -> &Parser<SyntaxElement> {
        match rule {
            Rule::RawGuidLiteral => &self.raw_guid_literal,
            Rule::GuidLiteral => &self.guid_literal,
            Rule::StringLiteral => &self.string_literal,
            Rule::AnyGuidLiteralOrString => &self.any_guid_literal_or_string,
            Rule::BracketedStringLiteral => &self.bracketed_string_literal,
            Rule::Value => &self.value,
            Rule::Type => &self.type_,
            Rule::NameDeclaration => &self.name_declaration,
            Rule::QualifiedNameDeclaration => &self.qualified_name_declaration,
            Rule::ColumnNameReference => &self.column_name_reference,
            Rule::TableNameReference => &self.table_name_reference,
            Rule::ExternalTableNameReference => &self.external_table_name_reference,
            Rule::MaterializedViewNameReference => &self.materialized_view_name_reference,
            Rule::EntityGroups => &self.entity_groups,
            Rule::DatabaseNameReference => &self.database_name_reference,
            Rule::ClusterNameReference => &self.cluster_name_reference,
            Rule::DatabaseFunctionNameReference => &self.database_function_name_reference,
            Rule::DatabaseOrTableNameReference => &self.database_or_table_name_reference,
            Rule::DatabaseTableNameReference => &self.database_table_name_reference,
            Rule::DatabaseOrTableOrColumnNameReference => {
                &self.database_or_table_or_column_name_reference
            }
            Rule::DatabaseTableColumnNameReference => &self.database_table_column_name_reference,
            Rule::TableOrColumnNameReference => &self.table_or_column_name_reference,
            Rule::TableColumnNameReference => &self.table_column_name_reference,
            Rule::WildcardedNameDeclaration => &self.wildcarded_name_declaration,
            Rule::QualifiedWildcardedNameDeclaration => {
                &self.qualified_wildcarded_name_declaration
            }
            Rule::FunctionDeclaration => &self.function_declaration,
            Rule::FunctionBody => &self.function_body,
            Rule::QueryInput => &self.query_input,
            Rule::ScriptInput => &self.script_input,
            Rule::InputText => &self.input_text,
            Rule::BracketedInputText => &self.bracketed_input_text,
        }
    }

    /// Placeholder of the shape `rule` produces.
    pub fn missing_node(&self, rule: Rule) -> SyntaxElement {
        match self.missing.get(&rule) {
            Some(factory) => factory(),
            None => missing_expression(),
        }
    }

    /// `rule`, falling back to its placeholder instead of failing.
    pub fn required(&self, rule: Rule) -> Parser<SyntaxElement> {
        let factory = self.missing.get(&rule).cloned();
        required(self.rule(rule).clone(), move || {
            factory.as_ref().map_or_else(missing_expression, |f| f())
        })
    }
}

impl fmt::Debug for PredefinedRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut placeholders: Vec<Rule> = self.missing.keys().copied().collect();
        placeholders.sort_by_key(|rule| Rule::ALL.iter().position(|r| r == rule));
        f.debug_struct("PredefinedRules")
            .field("options", &self.options)
            .field("placeholders", &placeholders)
            .finish_non_exhaustive()
    }
}

fn guid_literal_of(kind: SyntaxKind) -> Parser<SyntaxElement> {
    token(kind).map(|token| LiteralExpression::new(LiteralKind::Guid, token).into())
}

fn reference(name: &Parser<Name>, symbols: SymbolMatch) -> Parser<SyntaxElement> {
    name.clone()
        .map(move |name| SyntaxElement::from(NameReference::new(name, symbols)))
        .with_completion_hint(symbols.into())
        .with_tag(symbols.tag_label())
}

fn missing_registry(
    database_or_table: SymbolMatch,
    database_or_table_or_column: SymbolMatch,
    table_or_column: SymbolMatch,
) -> FxHashMap<Rule, MissingFactory> {
    let reference = |symbols: SymbolMatch| -> MissingFactory {
        Arc::new(move || missing_name_reference_of(symbols))
    };

    let mut registry: FxHashMap<Rule, MissingFactory> = FxHashMap::default();
    for rule in [Rule::RawGuidLiteral, Rule::GuidLiteral, Rule::Value] {
        registry.insert(rule, Arc::new(missing_value));
    }
    for rule in [
        Rule::StringLiteral,
        Rule::AnyGuidLiteralOrString,
        Rule::BracketedStringLiteral,
    ] {
        registry.insert(rule, Arc::new(missing_string_literal));
    }
    registry.insert(Rule::Type, Arc::new(missing_type));
    for rule in [
        Rule::NameDeclaration,
        Rule::QualifiedNameDeclaration,
        Rule::WildcardedNameDeclaration,
        Rule::QualifiedWildcardedNameDeclaration,
    ] {
        registry.insert(rule, Arc::new(missing_name_declaration));
    }
    for (rule, symbols) in [
        (Rule::ColumnNameReference, SymbolMatch::COLUMN),
        (Rule::TableNameReference, SymbolMatch::TABLE),
        (Rule::ExternalTableNameReference, SymbolMatch::EXTERNAL_TABLE),
        (Rule::MaterializedViewNameReference, SymbolMatch::MATERIALIZED_VIEW),
        (Rule::EntityGroups, SymbolMatch::ENTITY_GROUP),
        (Rule::DatabaseNameReference, SymbolMatch::DATABASE),
        (Rule::ClusterNameReference, SymbolMatch::CLUSTER),
        (Rule::DatabaseFunctionNameReference, SymbolMatch::DATABASE_FUNCTION),
        (Rule::DatabaseOrTableNameReference, database_or_table),
        (Rule::DatabaseTableNameReference, database_or_table),
        (Rule::DatabaseOrTableOrColumnNameReference, database_or_table_or_column),
        (Rule::DatabaseTableColumnNameReference, database_or_table_or_column),
        (Rule::TableOrColumnNameReference, table_or_column),
        (Rule::TableColumnNameReference, table_or_column),
    ] {
        registry.insert(rule, reference(symbols));
    }
    registry.insert(Rule::FunctionDeclaration, Arc::new(missing_function_declaration));
    registry.insert(Rule::FunctionBody, Arc::new(missing_function_body));
    registry.insert(Rule::QueryInput, Arc::new(missing_expression));
    registry.insert(Rule::ScriptInput, Arc::new(missing_statement));
    registry.insert(Rule::InputText, Arc::new(missing_input_text));
    registry.insert(Rule::BracketedInputText, Arc::new(missing_input_text));
    registry
}
