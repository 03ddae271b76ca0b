//! Escape sequences.
//!
//! Resolution order after the backslash:
//! 1. the named-escape table (`\n`, `\t`, ...)
//! 2. `\xHH`, `\uHHHH`, `\UHHHHHHHH`: exactly 2/4/8 hex digits
//! 3. `\oNNN`: exactly 3 octal digits, at most `\o377`
//! 4. anything else stands for itself (`\*`, `\(`, `\\`)

use tracing::trace;

use crate::{EscapeProblem, Mode, Parser, PatternError, PatternErrorKind};

impl Parser<'_> {
    /// Parse a `\` sequence and return the character it stands for.
    pub(crate) fn parse_escape(&mut self) -> Result<char, PatternError> {
        let start = self.cursor.position();
        self.modes.push(Mode::Escape);
        self.cursor.advance();

        let Some(c) = self.cursor.current() else {
            return Err(self.unterminated(Mode::Escape));
        };

        let resolved = if let Some(named) = self.options.tables().escape(c) {
            self.cursor.advance();
            named
        } else {
            match c {
                'x' => self.parse_hex_escape(start, 2)?,
                'u' => self.parse_hex_escape(start, 4)?,
                'U' => self.parse_hex_escape(start, 8)?,
                'o' => self.parse_octal_escape(start)?,
                _ => {
                    self.cursor.advance();
                    c
                }
            }
        };

        self.modes.pop(Mode::Escape);
        trace!(?resolved, "escape");
        Ok(resolved)
    }

    fn parse_hex_escape(&mut self, start: usize, digits: usize) -> Result<char, PatternError> {
        let value = self.read_digits(digits, 16, EscapeProblem::InvalidHexDigit)?;
        char::from_u32(value).ok_or_else(|| {
            self.error_from(
                PatternErrorKind::InvalidEscape(EscapeProblem::InvalidCodePoint(value)),
                start,
            )
        })
    }

    fn parse_octal_escape(&mut self, start: usize) -> Result<char, PatternError> {
        let value = self.read_digits(3, 8, EscapeProblem::InvalidOctalDigit)?;
        u8::try_from(value).map(char::from).map_err(|_| {
            self.error_from(
                PatternErrorKind::InvalidEscape(EscapeProblem::OctalOutOfRange(value)),
                start,
            )
        })
    }

    /// Skip the escape letter and read exactly `count` digits in `radix`.
    fn read_digits(
        &mut self,
        count: usize,
        radix: u32,
        problem: fn(char) -> EscapeProblem,
    ) -> Result<u32, PatternError> {
        self.cursor.advance();

        let mut value: u32 = 0;
        for _ in 0..count {
            let index = self.cursor.position();
            let Some(c) = self.cursor.current() else {
                return Err(self.unterminated(Mode::Escape));
            };
            let Some(digit) = c.to_digit(radix) else {
                return Err(self.error_at(PatternErrorKind::InvalidEscape(problem(c)), index));
            };
            // At most 8 hex digits, so this never overflows.
            value = value * radix + digit;
            self.cursor.advance();
        }
        Ok(value)
    }
}
