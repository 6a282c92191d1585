//! Logos-based lexer for Kusto command text
//!
//! Produces [`LexicalToken`]s whose leading trivia (whitespace and `//`
//! comments) is folded into the token that follows it. The stream always
//! ends with an `END_OF_TEXT` token that carries any trailing trivia, so
//! concatenating `trivia + text` over every token reproduces the input.

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::syntax_kind::SyntaxKind;

/// A token with its kind, leading trivia, text, and position
///
/// `offset` is the position of `text`; the trivia immediately precedes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexicalToken {
    pub kind: SyntaxKind,
    pub trivia: SmolStr,
    pub text: SmolStr,
    pub offset: TextSize,
}

impl LexicalToken {
    pub fn new(
        kind: SyntaxKind,
        trivia: impl Into<SmolStr>,
        text: impl Into<SmolStr>,
        offset: TextSize,
    ) -> Self {
        Self {
            kind,
            trivia: trivia.into(),
            text: text.into(),
            offset,
        }
    }

    /// The end-of-input marker
    pub fn end(trivia: impl Into<SmolStr>, offset: TextSize) -> Self {
        Self::new(SyntaxKind::END_OF_TEXT, trivia, "", offset)
    }

    /// Range of the token text, excluding trivia
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text.as_str()))
    }

    /// Range of the token including its leading trivia
    pub fn full_range(&self) -> TextRange {
        let start = self.offset - TextSize::of(self.trivia.as_str());
        TextRange::new(start, self.range().end())
    }

    pub fn is_end(&self) -> bool {
        self.kind == SyntaxKind::END_OF_TEXT
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    source: &'a str,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            source: input,
            finished: false,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexicalToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut trivia_start: Option<usize> = None;
        loop {
            let Some(result) = self.inner.next() else {
                self.finished = true;
                let end = self.source.len();
                let trivia = trivia_start.map_or("", |start| &self.source[start..end]);
                return Some(LexicalToken::end(trivia, TextSize::new(end as u32)));
            };

            let span = self.inner.span();
            let kind = match result {
                Ok(t) => SyntaxKind::from(t),
                Err(()) => SyntaxKind::BAD_TOKEN,
            };

            if kind.is_trivia() {
                trivia_start.get_or_insert(span.start);
                continue;
            }

            let trivia = trivia_start.map_or("", |start| &self.source[start..span.start]);
            return Some(LexicalToken::new(
                kind,
                trivia,
                self.inner.slice(),
                TextSize::new(span.start as u32),
            ));
        }
    }
}

/// Tokenize an entire string into a Vec (always ending in `END_OF_TEXT`)
pub fn tokenize(input: &str) -> Vec<LexicalToken> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    // =========================================================================
    // NAMES
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*\*[a-zA-Z0-9_*]*")]
    #[regex(r"\*[a-zA-Z0-9_][a-zA-Z0-9_*]*")]
    WildcardedIdentifier,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r#"[hH]?"([^"\\\n]|\\.)*""#)]
    #[regex(r#"[hH]?'([^'\\\n]|\\.)*'"#)]
    #[regex(r#"@"([^"]|"")*""#)]
    #[regex(r#"@'([^']|'')*'"#)]
    String,

    #[regex(r"[0-9]+")]
    Long,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Real,

    #[token("true")]
    #[token("false")]
    Boolean,

    #[regex(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")]
    RawGuid,

    #[regex(r"guid\([ \t]*[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}[ \t]*\)")]
    Guid,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equal,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("|")]
    Bar,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("let")]
    LetKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::Identifier => SyntaxKind::IDENTIFIER,
            LogosToken::WildcardedIdentifier => SyntaxKind::WILDCARDED_IDENTIFIER,
            LogosToken::String => SyntaxKind::STRING_LITERAL,
            LogosToken::Long => SyntaxKind::LONG_LITERAL,
            LogosToken::Real => SyntaxKind::REAL_LITERAL,
            LogosToken::Boolean => SyntaxKind::BOOLEAN_LITERAL,
            LogosToken::RawGuid => SyntaxKind::RAW_GUID_LITERAL,
            LogosToken::Guid => SyntaxKind::GUID_LITERAL,
            LogosToken::EqualEqual => SyntaxKind::EQUAL_EQUAL,
            LogosToken::BangEqual => SyntaxKind::BANG_EQUAL,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Equal => SyntaxKind::EQUAL,
            LogosToken::LessThan => SyntaxKind::LESS_THAN,
            LogosToken::GreaterThan => SyntaxKind::GREATER_THAN,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Asterisk => SyntaxKind::ASTERISK,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Bar => SyntaxKind::BAR,
            LogosToken::OpenParen => SyntaxKind::OPEN_PAREN,
            LogosToken::CloseParen => SyntaxKind::CLOSE_PAREN,
            LogosToken::OpenBracket => SyntaxKind::OPEN_BRACKET,
            LogosToken::CloseBracket => SyntaxKind::CLOSE_BRACKET,
            LogosToken::OpenBrace => SyntaxKind::OPEN_BRACE,
            LogosToken::CloseBrace => SyntaxKind::CLOSE_BRACE,
            LogosToken::LetKw => SyntaxKind::LET_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("Db.Table"),
            vec![
                SyntaxKind::IDENTIFIER,
                SyntaxKind::DOT,
                SyntaxKind::IDENTIFIER,
                SyntaxKind::END_OF_TEXT
            ]
        );
    }

    #[test]
    fn test_trivia_is_leading() {
        let tokens = tokenize("  a // note\n b ");
        assert_eq!(tokens[0].trivia, "  ");
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].trivia, " // note\n ");
        assert_eq!(tokens[1].text, "b");
        assert!(tokens[2].is_end());
        assert_eq!(tokens[2].trivia, " ");
    }

    #[test]
    fn test_lossless() {
        let input = "  foo . ['bar baz'] // tail\n{x} Tab* ";
        let rebuilt: String = tokenize(input)
            .iter()
            .map(|t| format!("{}{}", t.trivia, t.text))
            .collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(kinds("Tab*")[0], SyntaxKind::WILDCARDED_IDENTIFIER);
        assert_eq!(kinds("*log")[0], SyntaxKind::WILDCARDED_IDENTIFIER);
        assert_eq!(kinds("*")[0], SyntaxKind::ASTERISK);
    }

    #[test]
    fn test_guids() {
        assert_eq!(
            kinds("0d5b3b8a-1c2d-4e5f-8a9b-0c1d2e3f4a5b")[0],
            SyntaxKind::RAW_GUID_LITERAL
        );
        assert_eq!(
            kinds("guid(0d5b3b8a-1c2d-4e5f-8a9b-0c1d2e3f4a5b)")[0],
            SyntaxKind::GUID_LITERAL
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(kinds("'x'")[0], SyntaxKind::STRING_LITERAL);
        assert_eq!(kinds(r#"@"c:\dir""#)[0], SyntaxKind::STRING_LITERAL);
        assert_eq!(kinds("42")[0], SyntaxKind::LONG_LITERAL);
        assert_eq!(kinds("4.2")[0], SyntaxKind::REAL_LITERAL);
        assert_eq!(kinds("true")[0], SyntaxKind::BOOLEAN_LITERAL);
        assert_eq!(kinds("let")[0], SyntaxKind::LET_KW);
    }

    #[test]
    fn test_bad_token() {
        assert_eq!(kinds("#")[0], SyntaxKind::BAD_TOKEN);
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize(" ab.c");
        assert_eq!(tokens[0].offset, TextSize::new(1));
        assert_eq!(tokens[0].full_range(), TextRange::new(0.into(), 3.into()));
        assert_eq!(tokens[2].range(), TextRange::new(4.into(), 5.into()));
    }
}
