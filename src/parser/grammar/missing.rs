//! Placeholder nodes for required-but-absent elements.
//!
//! Each factory builds the exact shape its rule would have produced, with
//! every token zero-width and flagged missing. Composite placeholders carry
//! equally synthetic children so consumers can walk them like real nodes.

use std::sync::Arc;

use crate::parser::symbol_match::SymbolMatch;
use crate::parser::syntax::{
    ExpressionStatement, FunctionBody, FunctionDeclaration, FunctionParameters, LiteralExpression,
    LiteralKind, Name, NameDeclaration, NameReference, Statement, SyntaxElement, SyntaxToken,
    TypeExpression,
};
use crate::parser::syntax_kind::SyntaxKind;

/// A shared placeholder constructor.
pub type MissingFactory = Arc<dyn Fn() -> SyntaxElement + Send + Sync>;

pub fn missing_string_literal() -> SyntaxElement {
    LiteralExpression::new(
        LiteralKind::String,
        SyntaxToken::missing(SyntaxKind::STRING_LITERAL),
    )
    .into()
}

pub fn missing_value() -> SyntaxElement {
    LiteralExpression::new(LiteralKind::Long, SyntaxToken::missing(SyntaxKind::LONG_LITERAL)).into()
}

pub fn missing_type() -> SyntaxElement {
    TypeExpression {
        token: SyntaxToken::missing(SyntaxKind::IDENTIFIER),
    }
    .into()
}

/// A reference admitting every symbol category.
pub fn missing_name_reference() -> SyntaxElement {
    missing_name_reference_of(SymbolMatch::ANY)
}

/// A reference that keeps the mask of the rule it stands in for.
pub fn missing_name_reference_of(symbols: SymbolMatch) -> SyntaxElement {
    NameReference::new(Name::missing(), symbols).into()
}

pub fn missing_name_declaration() -> SyntaxElement {
    NameDeclaration::new(Name::missing()).into()
}

pub fn missing_function_declaration() -> SyntaxElement {
    FunctionDeclaration {
        parameters: FunctionParameters::missing(),
        body: FunctionBody::missing(),
    }
    .into()
}

pub fn missing_function_body() -> SyntaxElement {
    FunctionBody::missing().into()
}

pub fn missing_expression() -> SyntaxElement {
    missing_name_reference()
}

pub fn missing_statement() -> SyntaxElement {
    Statement::Expression(ExpressionStatement {
        expression: missing_expression(),
    })
    .into()
}

pub fn missing_input_text() -> SyntaxElement {
    SyntaxToken::missing(SyntaxKind::INPUT_TEXT).into()
}
