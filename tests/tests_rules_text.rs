//! Rule Tests - Literals and Raw Text Capture

mod helpers;

use helpers::{RULES, parse_all, parse_prefix};
use kql_rules::parser::{
    GrammarOptions, LiteralKind, PredefinedRules, QueryGrammar, Rule, SyntaxElement, SyntaxKind,
    TokenSource, parse_rule,
};
use rstest::rstest;

const GUID: &str = "6f1c6a4e-2b9c-4c1e-8e7a-1f2a3b4c5d6e";

// ============================================================================
// Literals
// ============================================================================

#[rstest]
#[case(Rule::GuidLiteral, "guid(6f1c6a4e-2b9c-4c1e-8e7a-1f2a3b4c5d6e)", LiteralKind::Guid, GUID)]
#[case(Rule::RawGuidLiteral, GUID, LiteralKind::Guid, GUID)]
#[case(Rule::StringLiteral, "'storm'", LiteralKind::String, "storm")]
#[case(Rule::StringLiteral, r#"@"c:\temp""#, LiteralKind::String, r"c:\temp")]
#[case(Rule::AnyGuidLiteralOrString, "\"x\"", LiteralKind::String, "x")]
#[case(Rule::AnyGuidLiteralOrString, GUID, LiteralKind::Guid, GUID)]
#[case(Rule::Value, "42", LiteralKind::Long, "42")]
#[case(Rule::Value, "1.5", LiteralKind::Real, "1.5")]
#[case(Rule::Value, "true", LiteralKind::Boolean, "true")]
#[case(Rule::BracketedStringLiteral, "[a.b]", LiteralKind::String, "a.b")]
fn test_literals(
    #[case] rule: Rule,
    #[case] input: &str,
    #[case] kind: LiteralKind,
    #[case] value: &str,
) {
    let tree = parse_all(&RULES, rule, input);
    let literal = tree.as_literal().unwrap();
    assert_eq!(literal.kind, kind);
    assert_eq!(literal.value(), value);
}

#[test]
fn test_type_rule() {
    let tree = parse_all(&RULES, Rule::Type, "timespan");
    assert_eq!(tree.kind(), SyntaxKind::PRIMITIVE_TYPE_EXPRESSION);
    assert!(parse_prefix(Rule::Type, "Events").is_none());
}

// ============================================================================
// Bracketed strings
// ============================================================================

#[test]
fn test_bracketed_string_consumes_closing_bracket() {
    let (tree, end) = parse_prefix(Rule::BracketedStringLiteral, "[a.b]").unwrap();
    let literal = tree.as_literal().unwrap();

    assert_eq!(end, 5);
    assert_eq!(literal.token.text(), "[a.b]");
    assert_eq!(literal.value(), "a.b");
}

#[test]
fn test_bracketed_string_without_closing_bracket() {
    let (tree, end) = parse_prefix(Rule::BracketedStringLiteral, "[a.b").unwrap();
    assert_eq!(end, 4);
    assert_eq!(tree.as_literal().unwrap().value(), "a.b");
}

#[test]
fn test_bracketed_string_stops_at_line_break() {
    let (tree, end) = parse_prefix(Rule::BracketedStringLiteral, "[a\n.b]").unwrap();
    assert_eq!(end, 2);
    assert_eq!(tree.as_literal().unwrap().value(), "a");
}

#[test]
fn test_multiline_bracketed_string_option() {
    let grammar = QueryGrammar::standard();
    let rules = PredefinedRules::with_options(
        &grammar,
        grammar.query_input.clone(),
        grammar.script_input.clone(),
        GrammarOptions::default().with_multiline_bracketed_strings(true),
    );

    let tree = parse_all(&rules, Rule::BracketedStringLiteral, "[a\n.b]");
    assert_eq!(tree.as_literal().unwrap().value(), "a\n.b");

    let name = parse_all(&rules, Rule::NameDeclaration, "[a\n.b]");
    assert_eq!(name.as_name_declaration().unwrap().simple_name(), "a\n.b");
}

// ============================================================================
// Raw text capture
// ============================================================================

#[rstest]
#[case("a")]
#[case("set x = 'y'")]
#[case("  leading  trivia kept   apart")]
#[case("a // comment\n  b ; c [x] {y}")]
#[case("tabs\tand\r\nnewlines")]
fn test_input_text_round_trip(#[case] input: &str) {
    let tree = parse_all(&RULES, Rule::InputText, input);
    let token = tree.as_token().unwrap();

    assert_eq!(token.kind(), SyntaxKind::INPUT_TEXT);
    assert_eq!(token.text(), input.trim_start());
    assert_eq!(tree.full_text(), input);
}

#[test]
fn test_input_text_concatenates_trivia_in_order() {
    let input = "  one  two// c\nthree";
    let source = TokenSource::from_text(input);
    let expected: String = source.tokens()[..3]
        .iter()
        .enumerate()
        .flat_map(|(i, t)| {
            let trivia = if i == 0 { "" } else { t.trivia.as_str() };
            [trivia, t.text.as_str()]
        })
        .collect();

    let (tree, _) = RULES.rule(Rule::InputText).parse(&source, 0).unwrap();
    assert_eq!(tree.text(), expected);
    assert_eq!(tree.as_token().unwrap().trivia(), "  ");
}

#[test]
fn test_input_text_leaves_trailing_trivia() {
    let tree = parse_all(&RULES, Rule::InputText, "a b   ");
    assert_eq!(tree.text(), "a b");
}

#[test]
fn test_empty_input_text_is_not_missing() {
    let tree = parse_rule(Rule::InputText, "").unwrap();
    assert_eq!(tree.text(), "");
    assert!(!tree.is_missing());
}

#[test]
fn test_bracketed_input_text_stops_before_bracket() {
    let (tree, end) = parse_prefix(Rule::BracketedInputText, "a.b]").unwrap();
    assert_eq!(tree.text(), "a.b");
    assert_eq!(end, 3);

    let (tree, end) = parse_prefix(Rule::BracketedInputText, "]").unwrap();
    assert_eq!(tree.text(), "");
    assert_eq!(end, 0);
}

#[test]
fn test_bracketed_input_text_runs_to_end() {
    let tree = parse_all(&RULES, Rule::BracketedInputText, "a . b");
    assert!(matches!(tree, SyntaxElement::Token(_)));
    assert_eq!(tree.text(), "a . b");
}
