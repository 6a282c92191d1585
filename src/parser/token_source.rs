//! Indexable token stream consumed by the grammar rules.
//!
//! Rules never mutate the source; a parse position is a plain index that a
//! rule returns alongside its result. Backtracking is therefore free: a caller
//! simply keeps using the position it already had.

use text_size::TextSize;

use super::lexer::{LexicalToken, tokenize};

/// An immutable, indexable run of tokens that always ends with `END_OF_TEXT`.
#[derive(Debug, Clone)]
pub struct TokenSource {
    tokens: Vec<LexicalToken>,
}

impl TokenSource {
    /// Build a source from lexed tokens, appending an end marker if missing.
    pub fn new(mut tokens: Vec<LexicalToken>) -> Self {
        if !tokens.last().is_some_and(LexicalToken::is_end) {
            let end = tokens
                .last()
                .map_or(TextSize::new(0), |t| t.range().end());
            tokens.push(LexicalToken::end("", end));
        }
        Self { tokens }
    }

    /// Lex `text` and wrap the result.
    pub fn from_text(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    /// Token at `pos`; positions past the end yield the end marker.
    pub fn peek(&self, pos: usize) -> &LexicalToken {
        let last = self.tokens.len() - 1;
        &self.tokens[pos.min(last)]
    }

    /// Check if `pos` is at (or past) the end marker
    pub fn is_end(&self, pos: usize) -> bool {
        self.peek(pos).is_end()
    }

    /// Number of tokens, excluding the end marker
    pub fn len(&self) -> usize {
        self.tokens.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All tokens including the end marker
    pub fn tokens(&self) -> &[LexicalToken] {
        &self.tokens
    }

    /// Text offset of the token at `pos` (start of its text, after trivia)
    pub fn offset_at(&self, pos: usize) -> TextSize {
        self.peek(pos).offset
    }
}

impl From<Vec<LexicalToken>> for TokenSource {
    fn from(tokens: Vec<LexicalToken>) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SyntaxKind;

    #[test]
    fn test_peek_past_end_returns_end_marker() {
        let source = TokenSource::from_text("a b");
        assert_eq!(source.len(), 2);
        assert_eq!(source.peek(1).text, "b");
        assert!(source.peek(2).is_end());
        assert!(source.peek(100).is_end());
    }

    #[test]
    fn test_end_marker_is_appended() {
        let tokens = vec![LexicalToken::new(
            SyntaxKind::IDENTIFIER,
            "",
            "x",
            TextSize::new(0),
        )];
        let source = TokenSource::new(tokens);
        assert_eq!(source.tokens().len(), 2);
        assert!(source.is_end(1));
        assert_eq!(source.offset_at(1), TextSize::new(1));
    }

    #[test]
    fn test_empty_source() {
        let source = TokenSource::new(Vec::new());
        assert!(source.is_empty());
        assert!(source.is_end(0));
    }
}
