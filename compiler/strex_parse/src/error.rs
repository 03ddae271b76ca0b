//! Parse error types.
//!
//! Every malformed construct aborts the whole parse with one
//! [`PatternError`]: the problem, the character index it was found at, and
//! the byte span a diagnostic should underline.

use strex_diagnostic::{Diagnostic, ErrorCode};
use strex_ir::Span;

use crate::Mode;

/// What is wrong with a numeric escape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EscapeProblem {
    #[error("`{0}` is not a hex digit")]
    InvalidHexDigit(char),
    #[error("`{0}` is not an octal digit")]
    InvalidOctalDigit(char),
    #[error("octal value {0:#o} is larger than 0o377")]
    OctalOutOfRange(u32),
    #[error("U+{0:X} is not a valid character")]
    InvalidCodePoint(u32),
}

/// What is wrong with a `{}` repetition count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CountProblem {
    #[error("`{0}` is not a digit")]
    NonDigit(char),
    #[error("more than two arguments")]
    TooManyArguments,
    #[error("missing argument")]
    MissingArgument,
    #[error("minimum {min} is larger than maximum {max}")]
    MinExceedsMax { min: usize, max: usize },
    #[error("no upper bound")]
    Unbounded,
    #[error("number too large")]
    TooLarge,
    #[error("maximum {max} exceeds the repetition limit of {limit}")]
    ExceedsLimit { max: usize, limit: usize },
}

/// The kind of parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PatternErrorKind {
    /// Input ended inside an escape, set, count, or group.
    #[error("unterminated {mode}")]
    UnterminatedConstruct { mode: Mode },
    /// Malformed hex/octal digits or an out-of-range value.
    #[error("invalid escape: {0}")]
    InvalidEscape(EscapeProblem),
    /// Malformed `{}` count.
    #[error("invalid repetition count: {0}")]
    InvalidCount(CountProblem),
    /// `*` or `+`.
    #[error("unbounded quantifier `{0}`")]
    UnboundedQuantifier(char),
    /// `)` without an open `(`.
    #[error("unmatched `)`")]
    UnmatchedGroupClose,
    /// `[^...]` lists a character that is not (or no longer) in the universe.
    #[error("{0:?} cannot be removed from the negated set")]
    SetMemberNotFound(char),
}

impl PatternErrorKind {
    /// The diagnostic code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            PatternErrorKind::UnterminatedConstruct { .. } => ErrorCode::E1001,
            PatternErrorKind::InvalidEscape(_) => ErrorCode::E1002,
            PatternErrorKind::InvalidCount(_) => ErrorCode::E1003,
            PatternErrorKind::UnboundedQuantifier(_) => ErrorCode::E1004,
            PatternErrorKind::UnmatchedGroupClose => ErrorCode::E1005,
            PatternErrorKind::SetMemberNotFound(_) => ErrorCode::E1006,
        }
    }
}

/// A parse failure at a specific place in the pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at index {index}")]
pub struct PatternError {
    pub kind: PatternErrorKind,
    /// Character index of the offending character (pattern length at end of
    /// input).
    pub index: usize,
    /// Byte span to underline.
    pub span: Span,
}

impl PatternError {
    #[cold]
    pub fn new(kind: PatternErrorKind, index: usize, span: Span) -> Self {
        PatternError { kind, index, span }
    }

    /// The pattern with a `^` under the offending character.
    ///
    /// ```text
    /// a{2,}
    ///  ^
    /// ```
    pub fn pointer(&self, pattern: &str) -> String {
        let mut start = (self.span.start as usize).min(pattern.len());
        while !pattern.is_char_boundary(start) {
            start -= 1;
        }
        let (before, after) = pattern.split_at(start);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line_end = after.find('\n').map_or(pattern.len(), |i| start + i);
        let column = before[line_start..].chars().count();
        format!("{}\n{:column$}^", &pattern[line_start..line_end], "")
    }

    /// Convert to a diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.code()).with_message(self.kind.to_string());

        match &self.kind {
            PatternErrorKind::UnterminatedConstruct { mode } => {
                let diag = diag.with_label(self.span, format!("pattern ends inside this {mode}"));
                match mode.terminator() {
                    Some(close) => diag.with_suggestion(format!("add the missing `{close}`")),
                    None => diag.with_suggestion(
                        "complete the escape sequence, or write `\\\\` for a literal backslash",
                    ),
                }
            }
            PatternErrorKind::InvalidEscape(problem) => {
                let diag = diag.with_label(self.span, problem.to_string());
                match problem {
                    EscapeProblem::InvalidHexDigit(_) => diag
                        .with_note("`\\x`, `\\u` and `\\U` take exactly 2, 4 and 8 hex digits"),
                    EscapeProblem::InvalidOctalDigit(_) | EscapeProblem::OctalOutOfRange(_) => {
                        diag.with_note("`\\o` takes exactly 3 octal digits, at most `\\o377`")
                    }
                    EscapeProblem::InvalidCodePoint(_) => {
                        diag.with_note("surrogates and values above U+10FFFF are not characters")
                    }
                }
            }
            PatternErrorKind::InvalidCount(problem) => {
                let diag = diag.with_label(self.span, problem.to_string());
                match problem {
                    CountProblem::Unbounded => diag
                        .with_note("every pattern must match finitely many strings")
                        .with_suggestion("give the count an upper bound, like `{2,5}`"),
                    CountProblem::ExceedsLimit { .. } => {
                        diag.with_suggestion("lower the maximum, or raise the repetition limit")
                    }
                    _ => diag.with_note("accepted forms are `{m}`, `{m,n}` and `{,n}`"),
                }
            }
            PatternErrorKind::UnboundedQuantifier(c) => diag
                .with_label(self.span, "not allowed in a finite pattern")
                .with_suggestion(match c {
                    '*' => "use a bounded count such as `{0,3}`, or `\\*` for a literal `*`",
                    _ => "use a bounded count such as `{1,3}`, or `\\+` for a literal `+`",
                }),
            PatternErrorKind::UnmatchedGroupClose => diag
                .with_label(self.span, "no group is open here")
                .with_suggestion("remove it, or write `\\)` for a literal `)`"),
            PatternErrorKind::SetMemberNotFound(_) => diag
                .with_label(self.span, "not in the remaining universe")
                .with_note("negated sets start from printable ASCII; each member is removed once"),
        }
    }
}
