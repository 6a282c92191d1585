//! Raw-text capture.
//!
//! Passthrough arguments are kept as the exact source text of the tokens
//! they span. The first token's trivia becomes the trivia of the result;
//! every later token contributes its trivia and text, in order.

use crate::base::has_line_breaks;
use crate::parser::combinators::{
    Parser, any_token_but_end, match_token, not_text, optional, produce, rule3, text, zero_or_more,
};
use crate::parser::lexer::LexicalToken;
use crate::parser::syntax::{SyntaxElement, SyntaxToken};
use crate::parser::syntax_kind::SyntaxKind;
use crate::parser::token_source::TokenSource;

/// Rebuild the source text of tokens `[start, end)` as one token of `kind`.
///
/// An empty span yields an empty token positioned at `start`.
pub fn reconstruct(source: &TokenSource, start: usize, end: usize, kind: SyntaxKind) -> SyntaxToken {
    if end <= start {
        return SyntaxToken::other(kind, "", "", source.offset_at(start));
    }
    let head = source.peek(start);
    let mut text = head.text.to_string();
    for pos in start + 1..end {
        let token = source.peek(pos);
        text.push_str(&token.trivia);
        text.push_str(&token.text);
    }
    SyntaxToken::other(kind, head.trivia.clone(), text, head.offset)
}

/// Every remaining token up to the end of input.
pub fn input_text() -> Parser<SyntaxElement> {
    produce(zero_or_more(any_token_but_end()), |source, start, end| {
        SyntaxElement::from(reconstruct(source, start, end, SyntaxKind::INPUT_TEXT))
    })
    .with_tag("<input_text>")
}

/// Tokens up to, not including, a closing `]`.
pub fn bracketed_input_text() -> Parser<SyntaxElement> {
    produce(zero_or_more(not_text(&["]"])), |source, start, end| {
        SyntaxElement::from(reconstruct(source, start, end, SyntaxKind::INPUT_TEXT))
    })
    .with_tag("<input_text>")
}

/// `[` run `]?` as a single string-literal token whose text is the source span.
///
/// The run stops at another bracket. Unless `multiline` is set, it also stops
/// at any token with a line break in its trivia or text, so an unclosed
/// bracket cannot swallow the following lines.
pub fn bracketed_string_token(multiline: bool) -> Parser<SyntaxToken> {
    let inner = match_token(move |t: &LexicalToken| {
        t.text != "]"
            && t.text != "["
            && (multiline || !(has_line_breaks(&t.trivia) || has_line_breaks(&t.text)))
    });
    produce(
        rule3(text("["), zero_or_more(inner), optional(text("]")), |_, _, _| ()),
        |source, start, end| reconstruct(source, start, end, SyntaxKind::STRING_LITERAL),
    )
    .with_tag("<bracketed-string>")
}
