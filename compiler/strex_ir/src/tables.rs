//! Fixed lookup data consumed by the pattern parser.
//!
//! Two collaborators are kept here rather than in the parser so callers can
//! replace them: the named-escape table (`\n`, `\t`, ...) and the printable
//! universe that `[^...]` classes subtract from.

use std::ops::RangeInclusive;

use rustc_hash::FxHashMap;

use crate::OrderedCharSet;

/// Built-in named escapes: escaped character to its literal replacement.
///
/// The parser consults this table before the numeric escapes, so none of
/// `x`, `o`, `u` or `U` may appear here.
pub const BUILTIN_ESCAPES: &[(char, char)] = &[
    ('a', '\u{07}'),
    ('b', '\u{08}'),
    ('f', '\u{0C}'),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
    ('v', '\u{0B}'),
    ('0', '\0'),
];

/// Built-in printable universe: space through tilde, in code-point order.
pub const PRINTABLE_ASCII: RangeInclusive<char> = ' '..='~';

/// Escape table and printable universe used while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharTables {
    escapes: FxHashMap<char, char>,
    printable: OrderedCharSet,
}

impl CharTables {
    /// Tables built from [`BUILTIN_ESCAPES`] and [`PRINTABLE_ASCII`].
    pub fn builtin() -> Self {
        CharTables {
            escapes: BUILTIN_ESCAPES.iter().copied().collect(),
            printable: PRINTABLE_ASCII.collect(),
        }
    }

    /// Tables from explicit data.
    pub fn new(
        escapes: impl IntoIterator<Item = (char, char)>,
        printable: impl IntoIterator<Item = char>,
    ) -> Self {
        CharTables {
            escapes: escapes.into_iter().collect(),
            printable: printable.into_iter().collect(),
        }
    }

    /// Replace the printable universe.
    #[must_use]
    pub fn with_printable(mut self, printable: impl IntoIterator<Item = char>) -> Self {
        self.printable = printable.into_iter().collect();
        self
    }

    /// Add or replace a named escape.
    #[must_use]
    pub fn with_escape(mut self, escaped: char, replacement: char) -> Self {
        self.escapes.insert(escaped, replacement);
        self
    }

    /// Look up a named escape.
    #[inline]
    pub fn escape(&self, escaped: char) -> Option<char> {
        self.escapes.get(&escaped).copied()
    }

    /// The universe a negated class starts from.
    #[inline]
    pub fn printable(&self) -> &OrderedCharSet {
        &self.printable
    }
}

impl Default for CharTables {
    fn default() -> Self {
        Self::builtin()
    }
}
