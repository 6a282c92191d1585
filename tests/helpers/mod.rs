//! Shared rule instance and parse helpers for the integration tests.

#![allow(dead_code)]

use kql_rules::parser::{PredefinedRules, Rule, SyntaxElement, TokenSource};
use once_cell::sync::Lazy;

/// One rule set for every test in the binary.
pub static RULES: Lazy<PredefinedRules> = Lazy::new(PredefinedRules::standard);

/// Run `rule` at the start of `input`, returning the node and end position.
pub fn parse_prefix(rule: Rule, input: &str) -> Option<(SyntaxElement, usize)> {
    let source = TokenSource::from_text(input);
    RULES.rule(rule).parse(&source, 0)
}

/// Run `rule` over `input`, asserting it consumes every token.
pub fn parse_all(rules: &PredefinedRules, rule: Rule, input: &str) -> SyntaxElement {
    let source = TokenSource::from_text(input);
    let Some((element, end)) = rules.rule(rule).parse(&source, 0) else {
        panic!("{rule:?} did not match {input:?}");
    };
    assert!(
        source.is_end(end),
        "{rule:?} stopped at token {end} of {input:?}"
    );
    element
}

/// Simple names of the leaf segments of a dotted chain, leftmost first.
pub fn segment_names(element: &SyntaxElement) -> Vec<String> {
    let segments = match element.as_path() {
        Some(path) => path.segments(),
        None => vec![element],
    };
    segments
        .into_iter()
        .map(|segment| match segment {
            SyntaxElement::NameDeclaration(d) => d.simple_name(),
            SyntaxElement::NameReference(r) => r.simple_name(),
            other => panic!("unexpected segment {:?}", other.kind()),
        })
        .collect()
}

/// Number of path nodes along the left spine of `element`.
pub fn left_depth(element: &SyntaxElement) -> usize {
    let mut depth = 0;
    let mut current = element;
    while let SyntaxElement::Path(path) = current {
        assert!(
            path.selector.as_path().is_none(),
            "path nested on the right"
        );
        depth += 1;
        current = &path.expression;
    }
    depth
}
