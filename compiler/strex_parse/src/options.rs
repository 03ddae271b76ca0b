//! Parser configuration.

use strex_ir::CharTables;

/// Default bound on a single `{}` maximum.
pub const DEFAULT_MAX_REPETITION: usize = 65_536;

/// Parser configuration, built in the builder style.
///
/// ```
/// use strex_ir::CharTables;
/// use strex_parse::ParseOptions;
///
/// let options = ParseOptions::new()
///     .with_max_repetition(100)
///     .with_tables(CharTables::builtin().with_printable('a'..='z'));
/// assert_eq!(options.max_repetition(), 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    tables: CharTables,
    max_repetition: usize,
}

impl ParseOptions {
    /// Built-in tables and the default repetition limit.
    pub fn new() -> Self {
        ParseOptions {
            tables: CharTables::builtin(),
            max_repetition: DEFAULT_MAX_REPETITION,
        }
    }

    /// Replace the escape table and printable universe.
    #[must_use]
    pub fn with_tables(mut self, tables: CharTables) -> Self {
        self.tables = tables;
        self
    }

    /// Bound the maximum of any single `{}` count.
    #[must_use]
    pub fn with_max_repetition(mut self, max_repetition: usize) -> Self {
        self.max_repetition = max_repetition;
        self
    }

    #[inline]
    pub fn tables(&self) -> &CharTables {
        &self.tables
    }

    #[inline]
    pub fn max_repetition(&self) -> usize {
        self.max_repetition
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
