//! Parser combinators over a [`TokenSource`].
//!
//! A [`Parser`] is a shared, immutable closure from a start position to an
//! optional `(value, end)` pair. Combinators build larger parsers out of
//! smaller ones once, at construction; running a parser never mutates it,
//! so a single instance can serve any number of concurrent parses.
//!
//! Failure is `None` and consumes nothing: the caller still holds the
//! position it started from, which makes backtracking free.

use std::sync::Arc;

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::lexer::LexicalToken;
use super::syntax::SyntaxToken;
use super::syntax_kind::SyntaxKind;
use super::token_source::TokenSource;
use crate::ide::CompletionHint;

type ParseFn<T> = dyn Fn(&TokenSource, usize) -> Option<(T, usize)> + Send + Sync;

/// A reusable parsing rule producing `T`.
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
    tag: Option<SmolStr>,
    hint: CompletionHint,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
            tag: self.tag.clone(),
            hint: self.hint,
        }
    }
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("tag", &self.tag)
            .field("hint", &self.hint)
            .finish()
    }
}

impl<T: 'static> Parser<T> {
    pub fn new(
        run: impl Fn(&TokenSource, usize) -> Option<(T, usize)> + Send + Sync + 'static,
    ) -> Self {
        Self {
            run: Arc::new(run),
            tag: None,
            hint: CompletionHint::NONE,
        }
    }

    /// Run the rule at `pos`.
    pub fn parse(&self, source: &TokenSource, pos: usize) -> Option<(T, usize)> {
        let result = (self.run)(source, pos);
        if let Some(tag) = &self.tag {
            match &result {
                Some((_, end)) => trace!("[RULE] {} matched tokens {}..{}", tag, pos, end),
                None => trace!("[RULE] {} failed at token {}", tag, pos),
            }
        }
        result
    }

    /// Diagnostic label, e.g. `<table>`.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn completion_hint(&self) -> CompletionHint {
        self.hint
    }

    pub fn with_tag(mut self, tag: impl Into<SmolStr>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_completion_hint(mut self, hint: CompletionHint) -> Self {
        self.hint = hint;
        self
    }

    /// Convert the produced value. The result carries no tag or hint.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Parser<U> {
        Parser::new(move |source, pos| self.parse(source, pos).map(|(v, end)| (f(v), end)))
    }
}

// ============================================================================
// Token primitives
// ============================================================================

/// Match one token satisfying `predicate`. Never matches the end marker.
pub fn match_token(
    predicate: impl Fn(&LexicalToken) -> bool + Send + Sync + 'static,
) -> Parser<SyntaxToken> {
    Parser::new(move |source, pos| {
        let token = source.peek(pos);
        (!token.is_end() && predicate(token)).then(|| (SyntaxToken::from_lexical(token), pos + 1))
    })
}

/// Match one token of the given kind.
pub fn token(kind: SyntaxKind) -> Parser<SyntaxToken> {
    match_token(move |t| t.kind == kind)
}

/// Match one token whose text is exactly `text`.
pub fn text(text: impl Into<SmolStr>) -> Parser<SyntaxToken> {
    let text = text.into();
    match_token(move |t| t.text == text)
}

/// Match any single token that is not the end marker.
pub fn any_token_but_end() -> Parser<SyntaxToken> {
    match_token(|_| true)
}

/// Match any single token whose text is none of `excluded`.
pub fn not_text(excluded: &[&str]) -> Parser<SyntaxToken> {
    let excluded: Vec<SmolStr> = excluded.iter().map(|s| SmolStr::new(s)).collect();
    match_token(move |t| !excluded.contains(&t.text))
}

/// Mark the matched token non-semantic.
pub fn hide(parser: Parser<SyntaxToken>) -> Parser<SyntaxToken> {
    parser.map(SyntaxToken::hidden)
}

// ============================================================================
// Sequencing and alternation
// ============================================================================

pub fn rule2<A, B, R>(
    a: Parser<A>,
    b: Parser<B>,
    f: impl Fn(A, B) -> R + Send + Sync + 'static,
) -> Parser<R>
where
    A: 'static,
    B: 'static,
    R: 'static,
{
    Parser::new(move |source, pos| {
        let (va, pos) = a.parse(source, pos)?;
        let (vb, pos) = b.parse(source, pos)?;
        Some((f(va, vb), pos))
    })
}

pub fn rule3<A, B, C, R>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    f: impl Fn(A, B, C) -> R + Send + Sync + 'static,
) -> Parser<R>
where
    A: 'static,
    B: 'static,
    C: 'static,
    R: 'static,
{
    Parser::new(move |source, pos| {
        let (va, pos) = a.parse(source, pos)?;
        let (vb, pos) = b.parse(source, pos)?;
        let (vc, pos) = c.parse(source, pos)?;
        Some((f(va, vb, vc), pos))
    })
}

/// Ordered alternation: the first alternative that matches wins.
pub fn first<T: 'static>(alternatives: Vec<Parser<T>>) -> Parser<T> {
    Parser::new(move |source, pos| alternatives.iter().find_map(|p| p.parse(source, pos)))
}

pub fn optional<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::new(move |source, pos| match parser.parse(source, pos) {
        Some((v, end)) => Some((Some(v), end)),
        None => Some((None, pos)),
    })
}

/// Repeat until the element fails or stops consuming input.
pub fn zero_or_more<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |source, mut pos| {
        let mut items = Vec::new();
        while let Some((item, end)) = parser.parse(source, pos) {
            if end == pos {
                break;
            }
            items.push(item);
            pos = end;
        }
        Some((items, pos))
    })
}

/// Build a value from the span of tokens `parser` consumed.
///
/// `f` receives the source and the `[start, end)` token positions.
pub fn produce<T, U>(
    parser: Parser<T>,
    f: impl Fn(&TokenSource, usize, usize) -> U + Send + Sync + 'static,
) -> Parser<U>
where
    T: 'static,
    U: 'static,
{
    Parser::new(move |source, pos| {
        let (_, end) = parser.parse(source, pos)?;
        Some((f(source, pos, end), end))
    })
}

/// Never fails: when `parser` does not match, `missing` supplies a
/// synthetic value and no input is consumed.
pub fn required<T: 'static>(
    parser: Parser<T>,
    missing: impl Fn() -> T + Send + Sync + 'static,
) -> Parser<T> {
    let tag = parser.tag.clone();
    let hint = parser.hint;
    let label = tag.clone();
    let mut result = Parser::new(move |source, pos| {
        parser.parse(source, pos).or_else(|| {
            debug!(
                "[MISSING] {} at token {}",
                label.as_deref().unwrap_or("<element>"),
                pos
            );
            Some((missing(), pos))
        })
    });
    result.tag = tag;
    result.hint = hint;
    result
}

/// Left-associative fold: `first (tail)*`, combining as it goes.
///
/// Iterative, so chains of any length use constant stack.
pub fn left_fold<T, U>(
    first: Parser<T>,
    tail: Parser<U>,
    combine: impl Fn(T, U) -> T + Send + Sync + 'static,
) -> Parser<T>
where
    T: 'static,
    U: 'static,
{
    Parser::new(move |source, pos| {
        let (mut acc, mut pos) = first.parse(source, pos)?;
        while let Some((item, end)) = tail.parse(source, pos) {
            if end == pos {
                break;
            }
            acc = combine(acc, item);
            pos = end;
        }
        Some((acc, pos))
    })
}

/// Succeeds with `()` where `parser` would match, consuming nothing.
pub fn lookahead<T: 'static>(parser: Parser<T>) -> Parser<()> {
    Parser::new(move |source, pos| parser.parse(source, pos).map(|_| ((), pos)))
}

/// Run `then` only where `condition` matches; the condition's own
/// consumption is discarded in both outcomes.
pub fn if_then<C, T>(condition: Parser<C>, then: Parser<T>) -> Parser<T>
where
    C: 'static,
    T: 'static,
{
    Parser::new(move |source, pos| {
        condition.parse(source, pos)?;
        then.parse(source, pos)
    })
}
