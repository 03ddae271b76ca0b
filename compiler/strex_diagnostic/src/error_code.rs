//! Error codes for all pattern diagnostics.
//!
//! Each code is a stable identifier (e.g. `E1003`) used for `strex explain`
//! lookups and in rendered output.

use std::fmt;

/// Error codes for all pattern diagnostics.
///
/// - `E1xxx`: pattern syntax errors (the pattern is rejected)
/// - `W1xxx`: pattern warnings (the pattern still compiles)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Input ended while a construct was still open
    E1001,
    /// Malformed hex/octal escape
    E1002,
    /// Malformed `{}` repetition count
    E1003,
    /// Unbounded quantifier `*` or `+`
    E1004,
    /// `)` without an open group
    E1005,
    /// Negated-set member not in the universe
    E1006,

    /// `?` with nothing to apply to
    W1001,
    /// Anchor `^` or `$` has no effect
    W1002,
    /// `{}` count with nothing to apply to
    W1003,
}

impl ErrorCode {
    /// All error code variants.
    ///
    /// When adding a variant: add it to the enum, `as_str()`, `description()`
    /// and here.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::W1001,
        ErrorCode::W1002,
        ErrorCode::W1003,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::W1001 => "W1001",
            ErrorCode::W1002 => "W1002",
            ErrorCode::W1003 => "W1003",
        }
    }

    /// One-line summary of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unterminated construct",
            ErrorCode::E1002 => "invalid escape sequence",
            ErrorCode::E1003 => "invalid repetition count",
            ErrorCode::E1004 => "unbounded quantifier",
            ErrorCode::E1005 => "unmatched group close",
            ErrorCode::E1006 => "negated set member not found",
            ErrorCode::W1001 => "optional marker with nothing to apply to",
            ErrorCode::W1002 => "anchor has no effect",
            ErrorCode::W1003 => "repetition count with nothing to apply to",
        }
    }

    /// Check if this is a pattern syntax error (E1xxx range).
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
        )
    }

    /// Check if this is a warning code (W-prefix).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001 | ErrorCode::W1002 | ErrorCode::W1003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1003"` or `"w1002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
