//! Admissible-kind masks carried by name references.
//!
//! A reference rule cannot always tell, at parse time, whether `Foo` in
//! `Foo.Bar` names a database or a table. It records the set of symbol
//! categories the name may bind to and leaves the choice to the binder.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of symbol categories a reference may bind to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymbolMatch(u16);

impl SymbolMatch {
    pub const NONE: SymbolMatch = SymbolMatch(0);
    pub const COLUMN: SymbolMatch = SymbolMatch(1 << 0);
    pub const TABLE: SymbolMatch = SymbolMatch(1 << 1);
    pub const EXTERNAL_TABLE: SymbolMatch = SymbolMatch(1 << 2);
    pub const MATERIALIZED_VIEW: SymbolMatch = SymbolMatch(1 << 3);
    pub const DATABASE: SymbolMatch = SymbolMatch(1 << 4);
    pub const CLUSTER: SymbolMatch = SymbolMatch(1 << 5);
    pub const DATABASE_FUNCTION: SymbolMatch = SymbolMatch(1 << 6);
    pub const ENTITY_GROUP: SymbolMatch = SymbolMatch(1 << 7);

    /// Every category; used by references synthesized without a rule context.
    pub const ANY: SymbolMatch = SymbolMatch((1 << 8) - 1);

    const NAMED: [(SymbolMatch, &'static str); 8] = [
        (Self::COLUMN, "Column"),
        (Self::TABLE, "Table"),
        (Self::EXTERNAL_TABLE, "ExternalTable"),
        (Self::MATERIALIZED_VIEW, "MaterializedView"),
        (Self::DATABASE, "Database"),
        (Self::CLUSTER, "Cluster"),
        (Self::DATABASE_FUNCTION, "DatabaseFunction"),
        (Self::ENTITY_GROUP, "EntityGroup"),
    ];

    #[inline]
    pub const fn union(self, other: SymbolMatch) -> SymbolMatch {
        SymbolMatch(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, other: SymbolMatch) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: SymbolMatch) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Names of the single categories in this mask, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }

    /// Diagnostic label of the reference rule that produces this mask,
    /// e.g. `<database_or_table>`.
    pub fn tag_label(self) -> String {
        if self == Self::ANY || self.is_empty() {
            return "<name>".to_string();
        }
        let parts: Vec<&str> = Self::NAMED
            .into_iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(flag, _)| match flag {
                f if f == Self::COLUMN => "column",
                f if f == Self::TABLE => "table",
                f if f == Self::EXTERNAL_TABLE => "externaltable",
                f if f == Self::MATERIALIZED_VIEW => "materializedview",
                f if f == Self::DATABASE => "database",
                f if f == Self::CLUSTER => "cluster",
                f if f == Self::DATABASE_FUNCTION => "function",
                _ => "entitygroup",
            })
            .collect();

        // Union rules are spelled broadest-first: database, table, column.
        const BROAD_FIRST: [&str; 3] = ["database", "table", "column"];
        let ordered: Vec<&str> = BROAD_FIRST
            .into_iter()
            .filter(|p| parts.contains(p))
            .chain(parts.iter().copied().filter(|p| !BROAD_FIRST.contains(p)))
            .collect();
        format!("<{}>", ordered.join("_or_"))
    }
}

impl BitOr for SymbolMatch {
    type Output = SymbolMatch;

    fn bitor(self, rhs: SymbolMatch) -> SymbolMatch {
        self.union(rhs)
    }
}

impl BitOrAssign for SymbolMatch {
    fn bitor_assign(&mut self, rhs: SymbolMatch) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for SymbolMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
