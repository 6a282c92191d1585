//! Syntax tree produced by the grammar rules.
//!
//! The tree is a closed set of shapes wrapped by [`SyntaxElement`], the
//! single handle every rule returns. Nodes are immutable once built and own
//! their children outright; they carry no reference back to the rule that
//! produced them.
//!
//! Traversal is iterative. Dotted chains nest to the left and can be
//! arbitrarily long, so nothing here recurses on the tree depth.

mod nodes;
mod token;

pub use nodes::{
    BracedName, BracketedName, BracketedStringName, ExpressionStatement, FunctionBody,
    FunctionDeclaration, FunctionParameter, FunctionParameters, LetStatement, LiteralExpression,
    LiteralKind, Name, NameDeclaration, NameReference, PathExpression, QuotedName, Separated,
    Statement, StatementList, TokenName, TypeExpression, WildcardedName,
};
pub use token::SyntaxToken;

use text_size::{TextRange, TextSize};

use super::syntax_kind::SyntaxKind;

/// Handle over every node shape a rule can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxElement {
    Token(SyntaxToken),
    NameDeclaration(NameDeclaration),
    NameReference(NameReference),
    Path(Box<PathExpression>),
    Literal(LiteralExpression),
    Type(TypeExpression),
    FunctionParameters(FunctionParameters),
    FunctionBody(Box<FunctionBody>),
    FunctionDeclaration(Box<FunctionDeclaration>),
    Statement(Box<Statement>),
    Statements(StatementList),
}

impl SyntaxElement {
    /// Zero-width stand-in used while unlinking long chains.
    pub(crate) fn placeholder() -> Self {
        SyntaxElement::Token(SyntaxToken::missing(SyntaxKind::BAD_TOKEN))
    }

    pub fn path(expression: SyntaxElement, dot: SyntaxToken, selector: SyntaxElement) -> Self {
        SyntaxElement::Path(Box::new(PathExpression::new(expression, dot, selector)))
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxElement::Token(t) => t.kind(),
            SyntaxElement::NameDeclaration(_) => SyntaxKind::NAME_DECLARATION,
            SyntaxElement::NameReference(_) => SyntaxKind::NAME_REFERENCE,
            SyntaxElement::Path(_) => SyntaxKind::PATH_EXPRESSION,
            SyntaxElement::Literal(l) => l.kind.expression_kind(),
            SyntaxElement::Type(_) => SyntaxKind::PRIMITIVE_TYPE_EXPRESSION,
            SyntaxElement::FunctionParameters(_) => SyntaxKind::FUNCTION_PARAMETERS,
            SyntaxElement::FunctionBody(_) => SyntaxKind::FUNCTION_BODY,
            SyntaxElement::FunctionDeclaration(_) => SyntaxKind::FUNCTION_DECLARATION,
            SyntaxElement::Statement(s) => s.kind(),
            SyntaxElement::Statements(_) => SyntaxKind::STATEMENT_LIST,
        }
    }

    /// True when every token under this element was synthesized by recovery.
    pub fn is_missing(&self) -> bool {
        SyntaxChild::Element(self).is_missing()
    }

    /// Tokens in source order, hidden and missing ones included.
    pub fn tokens(&self) -> Vec<&SyntaxToken> {
        SyntaxChild::Element(self).tokens()
    }

    /// Source text including the leading trivia of the first token.
    pub fn full_text(&self) -> String {
        self.tokens()
            .into_iter()
            .flat_map(|t| [t.trivia(), t.text()])
            .collect()
    }

    /// Source text without the leading trivia of the first token.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (i, token) in self.tokens().into_iter().enumerate() {
            if i > 0 {
                text.push_str(token.trivia());
            }
            text.push_str(token.text());
        }
        text
    }

    /// Span of the non-synthetic tokens, if there are any.
    pub fn range(&self) -> Option<TextRange> {
        let tokens = self.tokens();
        let mut real = tokens.iter().filter(|t| !t.is_missing());
        let first = real.next()?;
        let end = real.last().map_or(first.range().end(), |t| t.range().end());
        Some(TextRange::new(first.offset(), end.max(first.offset())))
    }

    /// End of the last non-synthetic token, if there is one.
    pub fn end(&self) -> Option<TextSize> {
        self.range().map(TextRange::end)
    }

    pub fn as_token(&self) -> Option<&SyntaxToken> {
        match self {
            SyntaxElement::Token(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_name_declaration(&self) -> Option<&NameDeclaration> {
        match self {
            SyntaxElement::NameDeclaration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_name_reference(&self) -> Option<&NameReference> {
        match self {
            SyntaxElement::NameReference(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathExpression> {
        match self {
            SyntaxElement::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&LiteralExpression> {
        match self {
            SyntaxElement::Literal(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeExpression> {
        match self {
            SyntaxElement::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_function_parameters(&self) -> Option<&FunctionParameters> {
        match self {
            SyntaxElement::FunctionParameters(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_function_body(&self) -> Option<&FunctionBody> {
        match self {
            SyntaxElement::FunctionBody(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_function_declaration(&self) -> Option<&FunctionDeclaration> {
        match self {
            SyntaxElement::FunctionDeclaration(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            SyntaxElement::Statement(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_statements(&self) -> Option<&StatementList> {
        match self {
            SyntaxElement::Statements(s) => Some(s),
            _ => None,
        }
    }
}

impl From<SyntaxToken> for SyntaxElement {
    fn from(token: SyntaxToken) -> Self {
        SyntaxElement::Token(token)
    }
}

impl From<NameDeclaration> for SyntaxElement {
    fn from(declaration: NameDeclaration) -> Self {
        SyntaxElement::NameDeclaration(declaration)
    }
}

impl From<NameReference> for SyntaxElement {
    fn from(reference: NameReference) -> Self {
        SyntaxElement::NameReference(reference)
    }
}

impl From<LiteralExpression> for SyntaxElement {
    fn from(literal: LiteralExpression) -> Self {
        SyntaxElement::Literal(literal)
    }
}

impl From<TypeExpression> for SyntaxElement {
    fn from(ty: TypeExpression) -> Self {
        SyntaxElement::Type(ty)
    }
}

impl From<FunctionBody> for SyntaxElement {
    fn from(body: FunctionBody) -> Self {
        SyntaxElement::FunctionBody(Box::new(body))
    }
}

impl From<FunctionDeclaration> for SyntaxElement {
    fn from(declaration: FunctionDeclaration) -> Self {
        SyntaxElement::FunctionDeclaration(Box::new(declaration))
    }
}

impl From<Statement> for SyntaxElement {
    fn from(statement: Statement) -> Self {
        SyntaxElement::Statement(Box::new(statement))
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// A borrowed position in the tree: an element or one of the typed
/// sub-shapes that only appear inside other nodes.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxChild<'a> {
    Token(&'a SyntaxToken),
    Element(&'a SyntaxElement),
    Declaration(&'a NameDeclaration),
    Type(&'a TypeExpression),
    Statement(&'a Statement),
}

impl<'a> SyntaxChild<'a> {
    /// Direct children in source order.
    pub fn children(self) -> Vec<SyntaxChild<'a>> {
        use SyntaxChild as C;

        match self {
            C::Token(_) => Vec::new(),
            C::Declaration(d) => d.name.tokens().into_iter().map(C::Token).collect(),
            C::Type(t) => vec![C::Token(&t.token)],
            C::Statement(Statement::Expression(s)) => vec![C::Element(&s.expression)],
            C::Statement(Statement::Let(s)) => vec![
                C::Token(&s.let_keyword),
                C::Declaration(&s.name),
                C::Token(&s.equal),
                C::Element(&s.expression),
            ],
            C::Element(element) => match element {
                SyntaxElement::Token(t) => vec![C::Token(t)],
                SyntaxElement::NameDeclaration(d) => vec![C::Declaration(d)],
                SyntaxElement::NameReference(r) => {
                    r.name.tokens().into_iter().map(C::Token).collect()
                }
                SyntaxElement::Path(p) => vec![
                    C::Element(&p.expression),
                    C::Token(&p.dot),
                    C::Element(&p.selector),
                ],
                SyntaxElement::Literal(l) => vec![C::Token(&l.token)],
                SyntaxElement::Type(t) => vec![C::Type(t)],
                SyntaxElement::FunctionParameters(p) => parameter_children(p),
                SyntaxElement::FunctionBody(b) => body_children(b),
                SyntaxElement::FunctionDeclaration(f) => {
                    let mut children = parameter_children(&f.parameters);
                    children.extend(body_children(&f.body));
                    children
                }
                SyntaxElement::Statement(s) => vec![C::Statement(s)],
                SyntaxElement::Statements(list) => statement_children(&list.statements),
            },
        }
    }

    /// Tokens under this child in source order.
    pub fn tokens(self) -> Vec<&'a SyntaxToken> {
        let mut tokens = Vec::new();
        let mut stack = vec![self];
        while let Some(child) = stack.pop() {
            match child {
                SyntaxChild::Token(t) => tokens.push(t),
                other => stack.extend(other.children().into_iter().rev()),
            }
        }
        tokens
    }

    pub fn is_missing(self) -> bool {
        let tokens = self.tokens();
        !tokens.is_empty() && tokens.iter().all(|t| t.is_missing())
    }
}

fn parameter_children(parameters: &FunctionParameters) -> Vec<SyntaxChild<'_>> {
    let mut children = vec![SyntaxChild::Token(&parameters.open_paren)];
    for item in &parameters.parameters {
        children.push(SyntaxChild::Declaration(&item.element.name));
        children.push(SyntaxChild::Token(&item.element.colon));
        children.push(SyntaxChild::Type(&item.element.ty));
        children.extend(item.separator.as_ref().map(SyntaxChild::Token));
    }
    children.push(SyntaxChild::Token(&parameters.close_paren));
    children
}

fn body_children(body: &FunctionBody) -> Vec<SyntaxChild<'_>> {
    let mut children = vec![SyntaxChild::Token(&body.open_brace)];
    children.extend(statement_children(&body.statements));
    children.extend(body.expression.as_ref().map(SyntaxChild::Element));
    children.extend(body.semicolon.as_ref().map(SyntaxChild::Token));
    children.push(SyntaxChild::Token(&body.close_brace));
    children
}

fn statement_children(statements: &[Separated<Statement>]) -> Vec<SyntaxChild<'_>> {
    let mut children = Vec::new();
    for item in statements {
        children.push(SyntaxChild::Statement(&item.element));
        children.extend(item.separator.as_ref().map(SyntaxChild::Token));
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SymbolMatch;

    fn ident(text: &str, trivia: &str, offset: u32) -> SyntaxToken {
        SyntaxToken::other(SyntaxKind::IDENTIFIER, trivia, text, offset.into())
    }

    fn reference(text: &str, trivia: &str, offset: u32) -> SyntaxElement {
        NameReference::new(Name::token(ident(text, trivia, offset)), SymbolMatch::TABLE).into()
    }

    fn dot(offset: u32) -> SyntaxToken {
        SyntaxToken::other(SyntaxKind::DOT, "", ".", offset.into()).hidden()
    }

    #[test]
    fn test_path_text_and_segments() {
        let path = SyntaxElement::path(
            SyntaxElement::path(reference("a", " ", 1), dot(2), reference("b", "", 3)),
            dot(4),
            reference("c", "", 5),
        );
        assert_eq!(path.text(), "a.b.c");
        assert_eq!(path.full_text(), " a.b.c");
        assert_eq!(path.range(), Some(TextRange::new(1.into(), 6.into())));

        let names: Vec<String> = path
            .as_path()
            .map(|p| p.segments())
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| s.as_name_reference().map(NameReference::simple_name))
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_missing_detection() {
        let missing: SyntaxElement = NameDeclaration::new(Name::missing()).into();
        assert!(missing.is_missing());
        assert_eq!(missing.range(), None);

        let partial = SyntaxElement::path(reference("a", "", 0), dot(1), missing);
        assert!(!partial.is_missing());
        assert_eq!(partial.text(), "a.");
    }

    #[test]
    fn test_deep_chain_drops_without_overflow() {
        let mut chain = reference("a", "", 0);
        for i in 0..200_000u32 {
            chain = SyntaxElement::path(chain, dot(i), reference("b", "", i));
        }
        assert_eq!(chain.kind(), SyntaxKind::PATH_EXPRESSION);
        drop(chain);
    }
}
