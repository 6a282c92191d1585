//! Rule Tests - Qualified Paths
//!
//! Dotted chains fold to the left, keep their spelling, and end in a
//! placeholder when the element after a separator is absent.

mod helpers;

use helpers::{RULES, left_depth, parse_all, segment_names};
use kql_rules::parser::{
    PredefinedRules, Rule, SymbolMatch, SyntaxElement, SyntaxKind, TokenSource,
};
use rstest::rstest;

// ============================================================================
// Left association
// ============================================================================

#[rstest]
#[case(Rule::QualifiedNameDeclaration, "a.b", &["a", "b"])]
#[case(Rule::QualifiedNameDeclaration, "a.b.c", &["a", "b", "c"])]
#[case(Rule::QualifiedNameDeclaration, "a . b . c . d", &["a", "b", "c", "d"])]
#[case(Rule::DatabaseTableColumnNameReference, "Samples.StormEvents.State", &["Samples", "StormEvents", "State"])]
#[case(Rule::TableColumnNameReference, "T.['Col 1']", &["T", "Col 1"])]
#[case(Rule::DatabaseTableNameReference, "{Db}.Tab", &["Db", "Tab"])]
fn test_chain_is_left_nested(
    #[case] rule: Rule,
    #[case] input: &str,
    #[case] expected: &[&str],
) {
    let tree = parse_all(&RULES, rule, input);

    assert_eq!(left_depth(&tree), expected.len() - 1);
    assert_eq!(segment_names(&tree), expected);
    assert_eq!(tree.text(), input);
}

#[test]
fn test_single_element_is_not_wrapped() {
    let tree = parse_all(&RULES, Rule::DatabaseTableNameReference, "StormEvents");
    assert_eq!(tree.kind(), SyntaxKind::NAME_REFERENCE);
    assert_eq!(left_depth(&tree), 0);
}

#[test]
fn test_separators_are_hidden() {
    let tree = parse_all(&RULES, Rule::QualifiedNameDeclaration, "a.b.c");
    let dots: Vec<_> = tree
        .tokens()
        .into_iter()
        .filter(|t| t.kind() == SyntaxKind::DOT)
        .collect();
    assert_eq!(dots.len(), 2);
    assert!(dots.iter().all(|t| t.is_hidden()));
}

#[test]
fn test_long_chain_builds_and_drops() {
    let input = vec!["x"; 20_000].join(".");
    let tree = parse_all(&RULES, Rule::QualifiedNameDeclaration, &input);
    assert_eq!(left_depth(&tree), 19_999);
    assert_eq!(tree.tokens().len(), 39_999);
}

#[test]
fn test_long_chain_clones_and_compares() {
    let input = vec!["x"; 20_000].join(".");
    let tree = parse_all(&RULES, Rule::QualifiedNameDeclaration, &input);

    let copy = tree.clone();
    assert_eq!(left_depth(&copy), 19_999);
    assert!(copy == tree);

    let other = parse_all(&RULES, Rule::QualifiedNameDeclaration, &format!("{input}.y"));
    assert!(other != tree);
    assert!(format!("{copy:?}").starts_with("Path(PathExpression { segments: ["));
}

#[test]
fn test_path_clone_is_structurally_equal() {
    let tree = parse_all(&RULES, Rule::DatabaseTableColumnNameReference, "a.b.c");
    let copy = tree.clone();
    assert_eq!(copy, tree);
    assert_eq!(segment_names(&copy), ["a", "b", "c"]);
    assert_eq!(left_depth(&copy), 2);
}

// ============================================================================
// Masks along a chain
// ============================================================================

#[test]
fn test_database_table_narrows_continuation() {
    let tree = parse_all(&RULES, Rule::DatabaseTableNameReference, "Db.Tab");
    let path = tree.as_path().unwrap();

    let head = path.expression.as_name_reference().unwrap();
    let tail = path.selector.as_name_reference().unwrap();
    assert_eq!(head.symbols, SymbolMatch::DATABASE | SymbolMatch::TABLE);
    assert_eq!(tail.symbols, SymbolMatch::TABLE);
}

#[test]
fn test_union_chain_keeps_broad_mask_everywhere() {
    let tree = parse_all(&RULES, Rule::DatabaseTableColumnNameReference, "a.b.c");
    let broad = SymbolMatch::DATABASE | SymbolMatch::TABLE | SymbolMatch::COLUMN;
    for segment in tree.as_path().unwrap().segments() {
        assert_eq!(segment.as_name_reference().unwrap().symbols, broad);
    }
}

// ============================================================================
// Trailing separators
// ============================================================================

#[test]
fn test_trailing_dot_yields_missing_declaration() {
    let tree = parse_all(&RULES, Rule::QualifiedNameDeclaration, "Foo.");
    let path = tree.as_path().unwrap();

    assert_eq!(
        path.expression.as_name_declaration().unwrap().simple_name(),
        "Foo"
    );
    assert_eq!(path.dot.text(), ".");
    assert_eq!(path.selector.kind(), SyntaxKind::NAME_DECLARATION);
    assert!(path.selector.is_missing());
    assert_eq!(path.selector.text(), "");
    assert_eq!(path.selector.range(), None);
    assert!(!tree.is_missing());
}

#[rstest]
#[case(Rule::DatabaseTableNameReference, SymbolMatch::TABLE)]
#[case(Rule::TableColumnNameReference, SymbolMatch::TABLE.union(SymbolMatch::COLUMN))]
fn test_trailing_dot_placeholder_carries_continuation_mask(
    #[case] rule: Rule,
    #[case] expected: SymbolMatch,
) {
    let tree = parse_all(&RULES, rule, "X.");
    let selector = &tree.as_path().unwrap().selector;
    assert!(selector.is_missing());
    assert_eq!(selector.as_name_reference().unwrap().symbols, expected);
}

#[test]
fn test_missing_middle_segment_continues_the_fold() {
    let tree = parse_all(&RULES, Rule::QualifiedNameDeclaration, "a..b");
    let path = tree.as_path().unwrap();

    assert_eq!(left_depth(&tree), 2);
    assert!(!path.selector.is_missing());
    assert!(path.expression.as_path().unwrap().selector.is_missing());
}

// ============================================================================
// Separator option
// ============================================================================

fn colon_rules() -> PredefinedRules {
    let options = kql_rules::GrammarOptions::default().with_path_separator(":");
    let grammar = kql_rules::parser::QueryGrammar::standard();
    PredefinedRules::with_options(
        &grammar,
        grammar.query_input.clone(),
        grammar.script_input.clone(),
        options,
    )
}

#[test]
fn test_custom_separator() {
    let rules = colon_rules();
    let tree = parse_all(&rules, Rule::TableColumnNameReference, "T:c");
    assert_eq!(segment_names(&tree), ["T", "c"]);
    assert_eq!(rules.options().path_separator, ":");
}

#[test]
fn test_custom_separator_ignores_dots() {
    let rules = colon_rules();
    let source = TokenSource::from_text("a.b");
    let (tree, end) = rules
        .rule(Rule::QualifiedNameDeclaration)
        .parse(&source, 0)
        .unwrap();
    assert!(matches!(tree, SyntaxElement::NameDeclaration(_)));
    assert_eq!(end, 1);
}
