//! Pattern parser for strex.
//!
//! Turns a bounded regex-like pattern into the `Literal` / `Sequence` /
//! `Choice` IR from `strex_ir`. The parser is a single left-to-right scan
//! driven by a stack of [`Mode`]s; groups and alternations recurse into a
//! nested scan that stops at their terminator.
//!
//! ```
//! let ir = strex_parse::parse("(ab|cd)e").unwrap();
//! assert_eq!(ir.count(), Some(2));
//! ```
//!
//! Failures are reported as a [`PatternError`]. Non-fatal findings (a
//! dangling `?`, an ignored anchor) are collected in
//! [`ParseOutput::warnings`] and logged through `tracing`.

mod cursor;
mod error;
mod grammar;
mod mode;
mod options;
mod warning;

pub use error::{CountProblem, EscapeProblem, PatternError, PatternErrorKind};
pub use mode::Mode;
pub use options::{ParseOptions, DEFAULT_MAX_REPETITION};
pub use warning::ParseWarning;

use cursor::Cursor;
use mode::ModeStack;
use strex_diagnostic::Diagnostic;
use strex_ir::Node;
use tracing::{debug, warn};

/// Result of a successful parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    /// Root of the IR: `Literal("")` for an empty pattern, a `Sequence`
    /// otherwise.
    pub ir: Node,
    /// Non-fatal findings, in pattern order.
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutput {
    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Warnings converted to diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.warnings.iter().map(ParseWarning::to_diagnostic).collect()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    modes: ModeStack,
    options: ParseOptions,
    warnings: Vec<ParseWarning>,
}

impl<'a> Parser<'a> {
    /// Create a parser with the built-in tables and limits.
    pub fn new(pattern: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(pattern),
            modes: ModeStack::new(),
            options: ParseOptions::default(),
            warnings: Vec::new(),
        }
    }

    /// Replace the parser configuration.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse the whole pattern.
    pub fn parse(mut self) -> Result<ParseOutput, PatternError> {
        debug!(pattern = self.cursor.source(), "parse");

        let elements = self.parse_scope()?;
        debug_assert!(self.cursor.is_at_end(), "top-level scope stopped early");
        debug_assert_eq!(self.modes.depth(), 1, "mode stack not unwound");

        let ir = Node::sequence_or_empty(elements);
        debug!(elements = ir_len(&ir), warnings = self.warnings.len(), "parsed");
        Ok(ParseOutput {
            ir,
            warnings: self.warnings,
        })
    }

    /// Error at character `index`, underlining that character.
    #[cold]
    fn error_at(&self, kind: PatternErrorKind, index: usize) -> PatternError {
        PatternError::new(kind, index, self.cursor.span_of(index))
    }

    /// Error at character `start`, underlining everything up to the cursor.
    #[cold]
    fn error_from(&self, kind: PatternErrorKind, start: usize) -> PatternError {
        PatternError::new(kind, start, self.cursor.span_from(start))
    }

    /// Input ended inside `mode`.
    #[cold]
    fn unterminated(&self, mode: Mode) -> PatternError {
        self.error_at(
            PatternErrorKind::UnterminatedConstruct { mode },
            self.cursor.position(),
        )
    }

    fn warn(&mut self, warning: ParseWarning) {
        warn!(code = %warning.code(), span = ?warning.span(), "{}", warning.message());
        self.warnings.push(warning);
    }
}

/// Number of top-level elements, for logging.
fn ir_len(ir: &Node) -> usize {
    match ir {
        Node::Sequence(items) => items.len(),
        Node::Literal(_) | Node::Choice(_) => 0,
    }
}

/// Parse `pattern` with the built-in tables and limits.
///
/// Warnings are logged and otherwise dropped; use [`Parser`] to collect them.
pub fn parse(pattern: &str) -> Result<Node, PatternError> {
    Parser::new(pattern).parse().map(|output| output.ir)
}

/// Parse `pattern` with explicit options, keeping the warnings.
pub fn parse_with(pattern: &str, options: ParseOptions) -> Result<ParseOutput, PatternError> {
    Parser::new(pattern).with_options(options).parse()
}

#[cfg(test)]
mod tests;
