//! Parse warnings (non-fatal diagnostics).

use strex_diagnostic::{Diagnostic, ErrorCode};
use strex_ir::Span;

/// A parse warning. The pattern still compiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseWarning {
    /// A `?` with no element before it in its scope.
    DanglingOptional { span: Span },
    /// A `^` or `$` outside a set.
    IgnoredAnchor { span: Span, anchor: char },
    /// A valid `{}` count with no element before it in its scope.
    DanglingCount { span: Span },
}

impl ParseWarning {
    /// Get the span of the warning.
    pub fn span(&self) -> Span {
        match self {
            ParseWarning::DanglingOptional { span }
            | ParseWarning::IgnoredAnchor { span, .. }
            | ParseWarning::DanglingCount { span } => *span,
        }
    }

    /// Get the warning message.
    pub fn message(&self) -> String {
        match self {
            ParseWarning::DanglingOptional { .. } => {
                "`?` has nothing to apply to and is ignored".to_string()
            }
            ParseWarning::IgnoredAnchor { anchor, .. } => {
                format!("anchor `{anchor}` has no effect and is ignored")
            }
            ParseWarning::DanglingCount { .. } => {
                "repetition count has nothing to apply to and is ignored".to_string()
            }
        }
    }

    /// The diagnostic code for this warning.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseWarning::DanglingOptional { .. } => ErrorCode::W1001,
            ParseWarning::IgnoredAnchor { .. } => ErrorCode::W1002,
            ParseWarning::DanglingCount { .. } => ErrorCode::W1003,
        }
    }

    /// Convert to a diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::warning(self.code()).with_message(self.message());
        match self {
            ParseWarning::DanglingOptional { span } => diag
                .with_label(*span, "nothing before this `?`")
                .with_suggestion("write `\\?` for a literal `?`"),
            ParseWarning::IgnoredAnchor { span, anchor } => diag
                .with_label(*span, "every generated string is a full match")
                .with_suggestion(format!("write `\\{anchor}` for a literal `{anchor}`")),
            ParseWarning::DanglingCount { span } => diag
                .with_label(*span, "nothing before this count")
                .with_suggestion("write `\\{` for a literal `{`"),
        }
    }
}
