//! Completion hints attached to grammar rules.
//!
//! A hint tells an editor which symbol categories to offer when the cursor
//! sits where a rule would start. Hints are advisory: they never change
//! whether a rule matches.

use std::fmt;
use std::ops::BitOr;

use crate::parser::{PredefinedRules, Rule, SymbolMatch};

/// Set of symbol categories an editor should suggest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompletionHint(u16);

impl CompletionHint {
    /// No suggestion; the default for untagged rules.
    pub const NONE: CompletionHint = CompletionHint(0);
    pub const COLUMN: CompletionHint = CompletionHint(1 << 0);
    pub const TABLE: CompletionHint = CompletionHint(1 << 1);
    pub const EXTERNAL_TABLE: CompletionHint = CompletionHint(1 << 2);
    pub const MATERIALIZED_VIEW: CompletionHint = CompletionHint(1 << 3);
    pub const DATABASE: CompletionHint = CompletionHint(1 << 4);
    pub const CLUSTER: CompletionHint = CompletionHint(1 << 5);
    pub const DATABASE_FUNCTION: CompletionHint = CompletionHint(1 << 6);
    pub const ENTITY_GROUP: CompletionHint = CompletionHint(1 << 7);

    #[inline]
    pub const fn union(self, other: CompletionHint) -> CompletionHint {
        CompletionHint(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, other: CompletionHint) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The symbol categories this hint asks for.
    ///
    /// Hints and masks share a vocabulary bit for bit.
    pub fn symbols(self) -> SymbolMatch {
        [
            (Self::COLUMN, SymbolMatch::COLUMN),
            (Self::TABLE, SymbolMatch::TABLE),
            (Self::EXTERNAL_TABLE, SymbolMatch::EXTERNAL_TABLE),
            (Self::MATERIALIZED_VIEW, SymbolMatch::MATERIALIZED_VIEW),
            (Self::DATABASE, SymbolMatch::DATABASE),
            (Self::CLUSTER, SymbolMatch::CLUSTER),
            (Self::DATABASE_FUNCTION, SymbolMatch::DATABASE_FUNCTION),
            (Self::ENTITY_GROUP, SymbolMatch::ENTITY_GROUP),
        ]
        .into_iter()
        .filter(|(hint, _)| self.contains(*hint))
        .fold(SymbolMatch::NONE, |acc, (_, symbol)| acc | symbol)
    }
}

/// Symbol categories to suggest where any of `candidates` could start.
///
/// Untagged rules contribute nothing. The result does not depend on whether
/// any candidate would match at the cursor.
pub fn completion_symbols(rules: &PredefinedRules, candidates: &[Rule]) -> SymbolMatch {
    candidates
        .iter()
        .map(|rule| rules.rule(*rule).completion_hint())
        .fold(CompletionHint::NONE, CompletionHint::union)
        .symbols()
}

impl BitOr for CompletionHint {
    type Output = CompletionHint;

    fn bitor(self, rhs: CompletionHint) -> CompletionHint {
        self.union(rhs)
    }
}

impl From<SymbolMatch> for CompletionHint {
    fn from(mask: SymbolMatch) -> Self {
        CompletionHint(mask.bits() & SymbolMatch::ANY.bits())
    }
}

impl fmt::Debug for CompletionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("None");
        }
        f.debug_set().entries(self.symbols().names()).finish()
    }
}
