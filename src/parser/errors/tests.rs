//! Integration tests for the errors module

use super::*;
use crate::parser::grammar::PredefinedRules;
use crate::parser::lexer::tokenize;
use crate::parser::token_source::TokenSource;
use crate::parser::{Rule, SyntaxElement};
use text_size::{TextRange, TextSize};

fn parse(rules: &PredefinedRules, rule: Rule, input: &str) -> SyntaxElement {
    let source = TokenSource::from_text(input);
    rules.rule(rule).parse(&source, 0).unwrap().0
}

#[test]
fn test_trailing_dot_reports_expected_name() {
    let rules = PredefinedRules::standard();
    let tree = parse(&rules, Rule::QualifiedNameDeclaration, "Foo.");
    let diagnostics = missing_diagnostics(&tree);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0301);
    assert_eq!(diagnostics[0].message, "expected <name>");
    assert_eq!(diagnostics[0].range, TextRange::empty(TextSize::new(4)));
}

#[test]
fn test_reference_placeholder_names_its_mask() {
    let rules = PredefinedRules::standard();
    let tree = parse(&rules, Rule::DatabaseTableNameReference, "Db .");
    let diagnostics = missing_diagnostics(&tree);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0302);
    assert_eq!(diagnostics[0].message, "expected <table>");
    assert_eq!(diagnostics[0].range.start(), TextSize::new(4));
}

#[test]
fn test_fixed_placeholders_use_default_messages() {
    let rules = PredefinedRules::standard();
    for (rule, code) in [
        (Rule::Type, ErrorCode::E0404),
        (Rule::StringLiteral, ErrorCode::E0403),
        (Rule::Value, ErrorCode::E0402),
        (Rule::FunctionBody, ErrorCode::E0702),
        (Rule::InputText, ErrorCode::E0405),
    ] {
        let diagnostics = missing_diagnostics(&rules.missing_node(rule));
        assert_eq!(diagnostics.len(), 1, "{rule:?}");
        assert_eq!(diagnostics[0].code, code, "{rule:?}");
        assert_eq!(diagnostics[0].message, code.default_message(), "{rule:?}");
    }
}

#[test]
fn test_complete_tree_has_no_diagnostics() {
    let rules = PredefinedRules::standard();
    let tree = parse(&rules, Rule::DatabaseTableColumnNameReference, "a.b.c");
    assert!(missing_diagnostics(&tree).is_empty());
}

#[test]
fn test_unclosed_function_body() {
    let rules = PredefinedRules::standard();
    let tree = parse(&rules, Rule::FunctionDeclaration, "(a: string) { x");
    let diagnostics = missing_diagnostics(&tree);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0201);
    assert_eq!(diagnostics[0].message, "expected '}'");
    assert_eq!(diagnostics[0].range.start(), TextSize::new(15));
}

#[test]
fn test_parameter_without_type() {
    let rules = PredefinedRules::standard();
    let tree = parse(&rules, Rule::FunctionDeclaration, "(a) {}");
    let diagnostics = missing_diagnostics(&tree);

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message, "expected ':'");
    assert_eq!(diagnostics[1].message, "expected <type>");
    assert!(diagnostics.iter().all(|d| d.range.start() == TextSize::new(2)));
}

#[test]
fn test_whole_placeholder_is_reported_once() {
    let rules = PredefinedRules::standard();
    let placeholder = rules.missing_node(Rule::FunctionDeclaration);
    let diagnostics = missing_diagnostics(&placeholder);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0701);
}

#[test]
fn test_lexical_diagnostics() {
    let diagnostics = lexical_diagnostics(&tokenize("a # b"));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0101);
    assert_eq!(
        diagnostics[0].range,
        TextRange::new(TextSize::new(2), TextSize::new(3))
    );
}

#[test]
fn test_error_code_exhaustiveness() {
    for code in ErrorCode::ALL {
        assert!(!code.default_message().is_empty(), "{code:?}");
        assert!(!code.category_description().is_empty(), "{code:?}");

        let s = code.as_str();
        assert!(s.starts_with('E'), "code {:?} doesn't start with E", code);
        assert_eq!(s.len(), 5, "code {:?} should be 5 chars", code);
    }
}
