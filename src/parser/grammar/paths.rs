//! Dotted chains.
//!
//! `a.b.c` is `first (sep element)*` folded into `((a.b).c)`. The element
//! after a separator is required: when it is absent the chain ends in a
//! placeholder, so a trailing separator still yields a complete path.

use crate::parser::combinators::{Parser, hide, left_fold, required, rule2, text};
use crate::parser::syntax::SyntaxElement;

/// Fold `first (separator continuation)*` into left-nested paths.
///
/// `continuation` may be narrower than `first`, e.g. a table after a
/// database-or-table. The separator is hidden.
pub fn qualified_path(
    first: Parser<SyntaxElement>,
    continuation: Parser<SyntaxElement>,
    separator: &str,
    missing: impl Fn() -> SyntaxElement + Send + Sync + 'static,
) -> Parser<SyntaxElement> {
    let tail = rule2(
        hide(text(separator)),
        required(continuation, missing),
        |dot, selector| (dot, selector),
    );
    left_fold(first, tail, |expression, (dot, selector)| {
        SyntaxElement::path(expression, dot, selector)
    })
}
