//! Parse modes and the mode stack.
//!
//! The stack mirrors the constructs currently open. Scope-level modes
//! (`Normal`, `Group`, `Alternation`) decide where a nested scan stops;
//! construct-level modes (`Escape`, `Set`, `Count`) are pushed only while
//! their construct is being read, so an unterminated error can name them.

use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

/// What the parser is currently inside.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Top level of the pattern.
    Normal,
    /// After a `\`.
    Escape,
    /// Between `[` and `]`.
    Set,
    /// Between `{` and `}`.
    Count,
    /// Reading the branches of a `|`.
    Alternation,
    /// Between `(` and `)`.
    Group,
}

impl Mode {
    /// Name used in "unterminated ..." messages.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Normal => "pattern",
            Mode::Escape => "escape sequence",
            Mode::Set => "character set",
            Mode::Count => "repetition count",
            Mode::Alternation => "alternation",
            Mode::Group => "group",
        }
    }

    /// The character that closes this construct, if it has one.
    pub fn terminator(self) -> Option<char> {
        match self {
            Mode::Set => Some(']'),
            Mode::Count => Some('}'),
            Mode::Group => Some(')'),
            Mode::Normal | Mode::Escape | Mode::Alternation => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack of open modes. The bottom entry is always [`Mode::Normal`].
#[derive(Clone, Debug)]
pub struct ModeStack {
    modes: SmallVec<[Mode; 8]>,
}

impl ModeStack {
    /// A stack holding only `Normal`.
    pub fn new() -> Self {
        let mut modes = SmallVec::new();
        modes.push(Mode::Normal);
        ModeStack { modes }
    }

    /// Enter `mode`.
    pub fn push(&mut self, mode: Mode) {
        trace!(?mode, depth = self.modes.len(), "enter");
        self.modes.push(mode);
    }

    /// Leave `mode`, which must be on top.
    pub fn pop(&mut self, mode: Mode) {
        debug_assert_eq!(self.top(), mode, "mode stack out of balance");
        if self.modes.len() > 1 {
            self.modes.pop();
        }
        trace!(?mode, depth = self.modes.len(), "leave");
    }

    /// The innermost open mode.
    pub fn top(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Normal)
    }

    /// Check if a `)` would close a group: the innermost scope below any
    /// open alternations is a `Group`.
    pub fn in_group(&self) -> bool {
        self.modes
            .iter()
            .rev()
            .find(|&&mode| mode != Mode::Alternation)
            .is_some_and(|&mode| mode == Mode::Group)
    }

    /// Number of open modes, including the bottom `Normal`.
    pub fn depth(&self) -> usize {
        self.modes.len()
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}
