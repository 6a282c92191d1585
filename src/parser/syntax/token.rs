//! Leaf tokens of the syntax tree.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::parser::lexer::LexicalToken;
use crate::parser::syntax_kind::SyntaxKind;

/// A token placed in the tree.
///
/// Missing tokens are synthesized by recovery: they have empty text, empty
/// trivia, and no meaningful offset. Hidden tokens (path separators) are
/// skipped by default when consumers compute completion context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    kind: SyntaxKind,
    trivia: SmolStr,
    text: SmolStr,
    offset: TextSize,
    missing: bool,
    hidden: bool,
}

impl SyntaxToken {
    /// Place a lexed token in the tree
    pub fn from_lexical(token: &LexicalToken) -> Self {
        Self {
            kind: token.kind,
            trivia: token.trivia.clone(),
            text: token.text.clone(),
            offset: token.offset,
            missing: false,
            hidden: false,
        }
    }

    /// A token built from reconstructed text (input text, bracketed strings)
    pub fn other(
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
            missing: false,
            hidden: false,
        }
    }

    /// A zero-width synthetic token
    pub fn missing(kind: SyntaxKind) -> Self {
        Self {
            kind,
            trivia: SmolStr::default(),
            text: SmolStr::default(),
            offset: TextSize::new(0),
            missing: true,
            hidden: false,
        }
    }

    /// Same token, marked non-semantic
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn trivia(&self) -> &str {
        &self.trivia
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offset(&self) -> TextSize {
        self.offset
    }

    pub fn is_missing(&self) -> bool {
        self.missing
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Range of the text, excluding trivia
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text.as_str()))
    }

    /// Width of trivia plus text
    pub fn full_width(&self) -> TextSize {
        TextSize::of(self.trivia.as_str()) + TextSize::of(self.text.as_str())
    }
}
