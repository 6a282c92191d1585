//! Syntax kinds for tokens and tree nodes
//!
//! This enum defines all token and node kinds produced by the rule layer.
//! Token kinds mirror the lexical categories the rules consume; node kinds
//! tag the shapes in [`crate::parser::syntax`].

/// All syntax kinds (tokens and nodes)
///
/// Tokens are leaf elements (identifiers, literals, punctuation).
/// Nodes are composite (names, references, paths, declarations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (folded into the leading trivia of the next token)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,

    // =========================================================================
    // NAMES AND LITERALS
    // =========================================================================
    IDENTIFIER,            // Foo
    WILDCARDED_IDENTIFIER, // Foo*
    STRING_LITERAL,        // "x", 'x', @"x"
    LONG_LITERAL,          // 42
    REAL_LITERAL,          // 4.2
    BOOLEAN_LITERAL,       // true
    GUID_LITERAL,          // guid(00000000-0000-0000-0000-000000000000)
    RAW_GUID_LITERAL,      // 00000000-0000-0000-0000-000000000000
    INPUT_TEXT,            // verbatim passthrough text

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    DOT,           // .
    COMMA,         // ,
    COLON,         // :
    SEMICOLON,     // ;
    EQUAL,         // =
    EQUAL_EQUAL,   // ==
    BANG_EQUAL,    // !=
    LESS_THAN,     // <
    GREATER_THAN,  // >
    PLUS,          // +
    MINUS,         // -
    ASTERISK,      // *
    SLASH,         // /
    BAR,           // |
    OPEN_PAREN,    // (
    CLOSE_PAREN,   // )
    OPEN_BRACKET,  // [
    CLOSE_BRACKET, // ]
    OPEN_BRACE,    // {
    CLOSE_BRACE,   // }

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    LET_KW,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    BAD_TOKEN,
    END_OF_TEXT,

    // =========================================================================
    // NODES
    // =========================================================================
    TOKEN_NAME,
    BRACKETED_NAME,
    BRACED_NAME,
    WILDCARDED_NAME,
    QUOTED_NAME,
    BRACKETED_STRING_NAME,
    NAME_DECLARATION,
    NAME_REFERENCE,
    PATH_EXPRESSION,
    GUID_LITERAL_EXPRESSION,
    STRING_LITERAL_EXPRESSION,
    LONG_LITERAL_EXPRESSION,
    REAL_LITERAL_EXPRESSION,
    BOOLEAN_LITERAL_EXPRESSION,
    PRIMITIVE_TYPE_EXPRESSION,
    FUNCTION_PARAMETER,
    FUNCTION_PARAMETERS,
    FUNCTION_BODY,
    FUNCTION_DECLARATION,
    EXPRESSION_STATEMENT,
    LET_STATEMENT,
    STATEMENT_LIST,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        matches!(self, Self::LET_KW)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::DOT as u16) && (self as u16) <= (Self::CLOSE_BRACE as u16)
    }

    /// Check if this is a literal token
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::STRING_LITERAL
                | Self::LONG_LITERAL
                | Self::REAL_LITERAL
                | Self::BOOLEAN_LITERAL
                | Self::GUID_LITERAL
                | Self::RAW_GUID_LITERAL
        )
    }

    /// Check if this is a token kind (as opposed to a node kind)
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::END_OF_TEXT as u16)
    }

    /// Tokens that may be spelled as a plain identifier name.
    ///
    /// Keywords are admitted so that `let` can still name an entity.
    pub fn is_identifier_like(self) -> bool {
        matches!(self, Self::IDENTIFIER) || self.is_keyword()
    }

    /// Fixed spelling of punctuation and keyword tokens
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            Self::DOT => ".",
            Self::COMMA => ",",
            Self::COLON => ":",
            Self::SEMICOLON => ";",
            Self::EQUAL => "=",
            Self::EQUAL_EQUAL => "==",
            Self::BANG_EQUAL => "!=",
            Self::LESS_THAN => "<",
            Self::GREATER_THAN => ">",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::ASTERISK => "*",
            Self::SLASH => "/",
            Self::BAR => "|",
            Self::OPEN_PAREN => "(",
            Self::CLOSE_PAREN => ")",
            Self::OPEN_BRACKET => "[",
            Self::CLOSE_BRACKET => "]",
            Self::OPEN_BRACE => "{",
            Self::CLOSE_BRACE => "}",
            Self::LET_KW => "let",
            _ => return None,
        };
        Some(text)
    }
}
