//! Composite node shapes.
//!
//! Every shape is a plain immutable value. Shapes that can appear in a
//! generic position are wrapped by [`SyntaxElement`].

use std::fmt;

use crate::base::{bracketed_string_content, string_literal_value};
use crate::parser::symbol_match::SymbolMatch;
use crate::parser::syntax_kind::SyntaxKind;

use super::SyntaxElement;
use super::token::SyntaxToken;

// ============================================================================
// Names
// ============================================================================

/// The surface spellings of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    /// `Foo`
    Token(TokenName),
    /// `['Foo Bar']`
    Bracketed(BracketedName),
    /// `{Foo}`
    Braced(BracedName),
    /// `Foo*`
    Wildcarded(WildcardedName),
    /// `'Foo'` used where a name is expected
    Quoted(QuotedName),
    /// `[Foo.Bar]` reconstructed from a run of tokens
    BracketedString(BracketedStringName),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenName {
    pub identifier: SyntaxToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketedName {
    pub open_bracket: SyntaxToken,
    pub name: SyntaxToken,
    pub close_bracket: SyntaxToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracedName {
    pub open_brace: SyntaxToken,
    pub name: SyntaxToken,
    pub close_brace: SyntaxToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardedName {
    pub pattern: SyntaxToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedName {
    pub literal: SyntaxToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketedStringName {
    pub literal: SyntaxToken,
}

impl Name {
    /// A plain identifier name
    pub fn token(identifier: SyntaxToken) -> Self {
        Name::Token(TokenName { identifier })
    }

    /// A zero-width identifier name
    pub fn missing() -> Self {
        Name::token(SyntaxToken::missing(SyntaxKind::IDENTIFIER))
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            Name::Token(_) => SyntaxKind::TOKEN_NAME,
            Name::Bracketed(_) => SyntaxKind::BRACKETED_NAME,
            Name::Braced(_) => SyntaxKind::BRACED_NAME,
            Name::Wildcarded(_) => SyntaxKind::WILDCARDED_NAME,
            Name::Quoted(_) => SyntaxKind::QUOTED_NAME,
            Name::BracketedString(_) => SyntaxKind::BRACKETED_STRING_NAME,
        }
    }

    /// The declared spelling of the name, independent of how it was written.
    pub fn simple_name(&self) -> String {
        match self {
            Name::Token(n) => n.identifier.text().to_string(),
            Name::Bracketed(n) => string_literal_value(n.name.text()),
            Name::Braced(n) => n.name.text().to_string(),
            Name::Wildcarded(n) => n.pattern.text().to_string(),
            Name::Quoted(n) => string_literal_value(n.literal.text()),
            Name::BracketedString(n) => bracketed_string_content(n.literal.text()).to_string(),
        }
    }

    /// Tokens in source order
    pub fn tokens(&self) -> Vec<&SyntaxToken> {
        match self {
            Name::Token(n) => vec![&n.identifier],
            Name::Bracketed(n) => vec![&n.open_bracket, &n.name, &n.close_bracket],
            Name::Braced(n) => vec![&n.open_brace, &n.name, &n.close_brace],
            Name::Wildcarded(n) => vec![&n.pattern],
            Name::Quoted(n) => vec![&n.literal],
            Name::BracketedString(n) => vec![&n.literal],
        }
    }

    pub fn is_missing(&self) -> bool {
        self.tokens().iter().all(|t| t.is_missing())
    }
}

/// A name in a binding position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDeclaration {
    pub name: Name,
}

impl NameDeclaration {
    pub fn new(name: Name) -> Self {
        Self { name }
    }

    pub fn simple_name(&self) -> String {
        self.name.simple_name()
    }
}

/// A name that refers to an entity of one of the categories in `symbols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReference {
    pub name: Name,
    pub symbols: SymbolMatch,
}

impl NameReference {
    pub fn new(name: Name, symbols: SymbolMatch) -> Self {
        Self { name, symbols }
    }

    pub fn simple_name(&self) -> String {
        self.name.simple_name()
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// `expression . selector`; chains nest to the left.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` walk the left spine in a loop,
/// so chain length never turns into stack depth.
pub struct PathExpression {
    pub expression: SyntaxElement,
    pub dot: SyntaxToken,
    pub selector: SyntaxElement,
}

impl PathExpression {
    pub fn new(expression: SyntaxElement, dot: SyntaxToken, selector: SyntaxElement) -> Self {
        Self {
            expression,
            dot,
            selector,
        }
    }

    /// Leaf elements of the chain, leftmost first.
    pub fn segments(&self) -> Vec<&SyntaxElement> {
        let mut selectors = vec![&self.selector];
        let mut current = &self.expression;
        while let SyntaxElement::Path(path) = current {
            selectors.push(&path.selector);
            current = &path.expression;
        }
        selectors.push(current);
        selectors.reverse();
        selectors
    }

    /// Separator and selector of every link, outermost first, plus the
    /// leftmost element.
    fn spine(&self) -> (Vec<(&SyntaxToken, &SyntaxElement)>, &SyntaxElement) {
        let mut links = vec![(&self.dot, &self.selector)];
        let mut current = &self.expression;
        while let SyntaxElement::Path(path) = current {
            links.push((&path.dot, &path.selector));
            current = &path.expression;
        }
        (links, current)
    }
}

impl Clone for PathExpression {
    fn clone(&self) -> Self {
        let (links, leftmost) = self.spine();
        let mut expression = leftmost.clone();
        // Innermost link first; the outermost one is `self`'s own fields.
        for (dot, selector) in links.into_iter().skip(1).rev() {
            expression = SyntaxElement::path(expression, dot.clone(), selector.clone());
        }
        PathExpression::new(expression, self.dot.clone(), self.selector.clone())
    }
}

impl PartialEq for PathExpression {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            if left.dot != right.dot || left.selector != right.selector {
                return false;
            }
            match (&left.expression, &right.expression) {
                (SyntaxElement::Path(l), SyntaxElement::Path(r)) => {
                    left = l;
                    right = r;
                }
                (l, r) => return l == r,
            }
        }
    }
}

impl Eq for PathExpression {}

impl fmt::Debug for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (links, _) = self.spine();
        let dots: Vec<&SyntaxToken> = links.into_iter().rev().map(|(dot, _)| dot).collect();
        f.debug_struct("PathExpression")
            .field("segments", &self.segments())
            .field("dots", &dots)
            .finish()
    }
}

impl Drop for PathExpression {
    // Long chains are nested to the left; unlink them one level at a time.
    fn drop(&mut self) {
        let mut next = std::mem::replace(&mut self.expression, SyntaxElement::placeholder());
        while let SyntaxElement::Path(mut path) = next {
            next = std::mem::replace(&mut path.expression, SyntaxElement::placeholder());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Guid,
    String,
    Long,
    Real,
    Boolean,
}

impl LiteralKind {
    pub fn expression_kind(self) -> SyntaxKind {
        match self {
            LiteralKind::Guid => SyntaxKind::GUID_LITERAL_EXPRESSION,
            LiteralKind::String => SyntaxKind::STRING_LITERAL_EXPRESSION,
            LiteralKind::Long => SyntaxKind::LONG_LITERAL_EXPRESSION,
            LiteralKind::Real => SyntaxKind::REAL_LITERAL_EXPRESSION,
            LiteralKind::Boolean => SyntaxKind::BOOLEAN_LITERAL_EXPRESSION,
        }
    }

    pub fn token_kind(self) -> SyntaxKind {
        match self {
            LiteralKind::Guid => SyntaxKind::GUID_LITERAL,
            LiteralKind::String => SyntaxKind::STRING_LITERAL,
            LiteralKind::Long => SyntaxKind::LONG_LITERAL,
            LiteralKind::Real => SyntaxKind::REAL_LITERAL,
            LiteralKind::Boolean => SyntaxKind::BOOLEAN_LITERAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralExpression {
    pub kind: LiteralKind,
    pub token: SyntaxToken,
}

impl LiteralExpression {
    pub fn new(kind: LiteralKind, token: SyntaxToken) -> Self {
        Self { kind, token }
    }

    /// The literal's value as text.
    ///
    /// Strings are unquoted and unescaped; bracketed strings yield the text
    /// between the brackets; guids drop the `guid(...)` wrapper.
    pub fn value(&self) -> String {
        let text = self.token.text();
        match self.kind {
            LiteralKind::String if text.starts_with('[') => {
                bracketed_string_content(text).to_string()
            }
            LiteralKind::String => string_literal_value(text),
            LiteralKind::Guid => text
                .strip_prefix("guid(")
                .and_then(|t| t.strip_suffix(')'))
                .map_or(text, str::trim)
                .to_string(),
            _ => text.to_string(),
        }
    }
}

/// A scalar type name such as `string` or `long`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpression {
    pub token: SyntaxToken,
}

// ============================================================================
// Functions and statements
// ============================================================================

/// An element of a separated list with its trailing separator, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separated<T> {
    pub element: T,
    pub separator: Option<SyntaxToken>,
}

impl<T> Separated<T> {
    pub fn new(element: T, separator: Option<SyntaxToken>) -> Self {
        Self { element, separator }
    }
}

/// `name: type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionParameter {
    pub name: NameDeclaration,
    pub colon: SyntaxToken,
    pub ty: TypeExpression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionParameters {
    pub open_paren: SyntaxToken,
    pub parameters: Vec<Separated<FunctionParameter>>,
    pub close_paren: SyntaxToken,
}

impl FunctionParameters {
    pub fn missing() -> Self {
        Self {
            open_paren: SyntaxToken::missing(SyntaxKind::OPEN_PAREN),
            parameters: Vec::new(),
            close_paren: SyntaxToken::missing(SyntaxKind::CLOSE_PAREN),
        }
    }
}

/// `{ statement; ... expression }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBody {
    pub open_brace: SyntaxToken,
    pub statements: Vec<Separated<Statement>>,
    pub expression: Option<SyntaxElement>,
    pub semicolon: Option<SyntaxToken>,
    pub close_brace: SyntaxToken,
}

impl FunctionBody {
    pub fn missing() -> Self {
        Self {
            open_brace: SyntaxToken::missing(SyntaxKind::OPEN_BRACE),
            statements: Vec::new(),
            expression: None,
            semicolon: None,
            close_brace: SyntaxToken::missing(SyntaxKind::CLOSE_BRACE),
        }
    }
}

/// An anonymous function: parameters and body, no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub parameters: FunctionParameters,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Expression(ExpressionStatement),
    Let(LetStatement),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: SyntaxElement,
}

/// `let name = expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    pub let_keyword: SyntaxToken,
    pub name: NameDeclaration,
    pub equal: SyntaxToken,
    pub expression: SyntaxElement,
}

/// Statements of a script, each with its trailing `;` if present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatementList {
    pub statements: Vec<Separated<Statement>>,
}

impl Statement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Statement::Expression(_) => SyntaxKind::EXPRESSION_STATEMENT,
            Statement::Let(_) => SyntaxKind::LET_STATEMENT,
        }
    }
}
