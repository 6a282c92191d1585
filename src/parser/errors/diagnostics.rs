//! Diagnostics derived from rule output.
//!
//! Rules never report errors themselves; they leave placeholders in the
//! tree. This module walks a tree and turns each outermost placeholder into
//! an `expected <tag>` diagnostic positioned right after the last real token
//! before it.

use text_size::TextSize;

use super::codes::ErrorCode;
use super::error::SyntaxError;
use crate::parser::lexer::LexicalToken;
use crate::parser::syntax::{LiteralKind, SyntaxChild, SyntaxElement};
use crate::parser::syntax_kind::SyntaxKind;

/// One diagnostic per synthetic node in `element`, in source order.
///
/// A placeholder's own synthetic children are not reported separately.
pub fn missing_diagnostics(element: &SyntaxElement) -> Vec<SyntaxError> {
    let mut diagnostics = Vec::new();
    let mut last_end = element
        .tokens()
        .first()
        .filter(|t| !t.is_missing())
        .map_or(TextSize::new(0), |t| t.offset());

    let mut stack = vec![SyntaxChild::Element(element)];
    while let Some(child) = stack.pop() {
        if child.is_missing() {
            let (code, message) = describe(child);
            diagnostics.push(SyntaxError::at_offset(message, last_end, code));
            continue;
        }
        match child {
            SyntaxChild::Token(token) => last_end = token.range().end(),
            other => stack.extend(other.children().into_iter().rev()),
        }
    }
    diagnostics
}

/// One diagnostic per token the lexer could not classify.
pub fn lexical_diagnostics(tokens: &[LexicalToken]) -> Vec<SyntaxError> {
    tokens
        .iter()
        .filter(|t| t.kind == SyntaxKind::BAD_TOKEN)
        .map(|t| {
            SyntaxError::new(
                format!("unexpected character '{}'", t.text),
                t.range(),
                ErrorCode::E0101,
            )
        })
        .collect()
}

fn describe(child: SyntaxChild<'_>) -> (ErrorCode, String) {
    match child {
        SyntaxChild::Token(token) => describe_token(token.kind()),
        SyntaxChild::Declaration(_) => fixed(ErrorCode::E0301),
        SyntaxChild::Type(_) => fixed(ErrorCode::E0404),
        SyntaxChild::Statement(_) => fixed(ErrorCode::E0703),
        SyntaxChild::Element(element) => match element {
            SyntaxElement::Token(token) => describe_token(token.kind()),
            SyntaxElement::NameDeclaration(_) => fixed(ErrorCode::E0301),
            SyntaxElement::NameReference(reference) => (
                ErrorCode::E0302,
                format!("expected {}", reference.symbols.tag_label()),
            ),
            SyntaxElement::Literal(literal) if literal.kind == LiteralKind::String => {
                fixed(ErrorCode::E0403)
            }
            SyntaxElement::Literal(_) => fixed(ErrorCode::E0402),
            SyntaxElement::Type(_) => fixed(ErrorCode::E0404),
            SyntaxElement::FunctionDeclaration(_) => fixed(ErrorCode::E0701),
            SyntaxElement::FunctionBody(_) => fixed(ErrorCode::E0702),
            SyntaxElement::Statement(_) | SyntaxElement::Statements(_) => fixed(ErrorCode::E0703),
            SyntaxElement::Path(_) | SyntaxElement::FunctionParameters(_) => {
                fixed(ErrorCode::E0401)
            }
        },
    }
}

fn fixed(code: ErrorCode) -> (ErrorCode, String) {
    (code, code.default_message().to_string())
}

fn describe_token(kind: SyntaxKind) -> (ErrorCode, String) {
    match kind {
        SyntaxKind::INPUT_TEXT => fixed(ErrorCode::E0405),
        SyntaxKind::IDENTIFIER => fixed(ErrorCode::E0301),
        kind => match kind.fixed_text() {
            Some(text) if kind.is_punct() => (ErrorCode::E0201, format!("expected '{text}'")),
            Some(text) => (ErrorCode::E0902, format!("expected '{text}'")),
            None => (ErrorCode::E0902, format!("expected {kind:?}")),
        },
    }
}
