//! Character cursor over the pattern text.
//!
//! Positions are character indices (what error messages report); spans are
//! byte ranges into the pattern (what the diagnostic renderer consumes).

use strex_ir::Span;

/// Cursor for navigating pattern characters.
pub struct Cursor<'a> {
    source: &'a str,
    /// `(byte offset, char)` for every character, in order.
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the pattern.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
        }
    }

    /// The pattern being scanned.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current character index.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The character under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    /// Check if the current character is `c`.
    #[inline]
    pub fn check(&self, c: char) -> bool {
        self.current() == Some(c)
    }

    /// Move past the current character.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Consume the current character if it is `c`.
    pub fn eat(&mut self, c: char) -> bool {
        if self.check(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Check if the whole pattern has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Byte offset of character index `index` (pattern length past the end).
    fn byte_offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    /// Byte span of the character at `index`; a point span at end of input.
    pub fn span_of(&self, index: usize) -> Span {
        let start = self.byte_offset(index);
        let end = if index < self.chars.len() {
            self.byte_offset(index + 1)
        } else {
            start
        };
        Span::saturating_from_range(start..end)
    }

    /// Byte span from character index `start` up to the cursor.
    pub fn span_from(&self, start: usize) -> Span {
        Span::saturating_from_range(self.byte_offset(start)..self.byte_offset(self.pos))
    }

    /// Byte span of the character under the cursor.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.span_of(self.pos)
    }
}
