//! Name spellings, tried in a fixed order.

use crate::parser::combinators::{Parser, first, token};
use crate::parser::grammar::query::QueryGrammar;
use crate::parser::syntax::{BracketedStringName, Name, QuotedName, SyntaxToken};
use crate::parser::syntax_kind::SyntaxKind;

/// One spelling of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameForm {
    /// `Foo`
    Identifier,
    /// `['Foo']`
    Bracketed,
    /// `{Foo}`
    Braced,
    /// `'Foo'`
    Quoted,
    /// `[Foo.Bar]`
    BracketedString,
}

/// Priority order of the name alternation. Earlier forms win whenever two
/// could match the same tokens.
pub const NAME_FORMS: [NameForm; 5] = [
    NameForm::Identifier,
    NameForm::Bracketed,
    NameForm::Braced,
    NameForm::Quoted,
    NameForm::BracketedString,
];

impl NameForm {
    pub fn kind(self) -> SyntaxKind {
        match self {
            NameForm::Identifier => SyntaxKind::TOKEN_NAME,
            NameForm::Bracketed => SyntaxKind::BRACKETED_NAME,
            NameForm::Braced => SyntaxKind::BRACED_NAME,
            NameForm::Quoted => SyntaxKind::QUOTED_NAME,
            NameForm::BracketedString => SyntaxKind::BRACKETED_STRING_NAME,
        }
    }
}

/// The name alternation over [`NAME_FORMS`].
///
/// `bracketed_string` is the shared `[...]` run recognizer, so bracketed
/// string names and literals agree on what a run is.
pub fn name(grammar: &QueryGrammar, bracketed_string: &Parser<SyntaxToken>) -> Parser<Name> {
    let alternatives = NAME_FORMS
        .iter()
        .map(|form| match form {
            NameForm::Identifier => grammar.identifier_name.clone(),
            NameForm::Bracketed => grammar.bracketed_name.clone(),
            NameForm::Braced => grammar.braced_name.clone(),
            NameForm::Quoted => token(SyntaxKind::STRING_LITERAL)
                .map(|literal| Name::Quoted(QuotedName { literal })),
            NameForm::BracketedString => bracketed_string
                .clone()
                .map(|literal| Name::BracketedString(BracketedStringName { literal })),
        })
        .collect();
    first(alternatives).with_tag("<name>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::grammar::input_text::bracketed_string_token;
    use crate::parser::token_source::TokenSource;
    use rstest::rstest;

    #[rstest]
    #[case("Foo", SyntaxKind::TOKEN_NAME, "Foo")]
    #[case("['Foo Bar']", SyntaxKind::BRACKETED_NAME, "Foo Bar")]
    #[case("{Foo}", SyntaxKind::BRACED_NAME, "Foo")]
    #[case("'Foo'", SyntaxKind::QUOTED_NAME, "Foo")]
    #[case("[Foo.Bar]", SyntaxKind::BRACKETED_STRING_NAME, "Foo.Bar")]
    fn test_name_forms(#[case] input: &str, #[case] kind: SyntaxKind, #[case] simple: &str) {
        let parser = name(&QueryGrammar::standard(), &bracketed_string_token(false));
        let (name, end) = parser.parse(&TokenSource::from_text(input), 0).unwrap();
        assert_eq!(name.kind(), kind);
        assert_eq!(name.simple_name(), simple);
        assert_eq!(end, TokenSource::from_text(input).len());
    }

    #[test]
    fn test_failure_consumes_nothing() {
        let parser = name(&QueryGrammar::standard(), &bracketed_string_token(false));
        assert!(parser.parse(&TokenSource::from_text("123"), 0).is_none());
        assert!(parser.parse(&TokenSource::from_text(""), 0).is_none());
    }

    #[test]
    fn test_order_is_fixed() {
        let kinds: Vec<SyntaxKind> = NAME_FORMS.iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            [
                SyntaxKind::TOKEN_NAME,
                SyntaxKind::BRACKETED_NAME,
                SyntaxKind::BRACED_NAME,
                SyntaxKind::QUOTED_NAME,
                SyntaxKind::BRACKETED_STRING_NAME,
            ]
        );
    }
}
