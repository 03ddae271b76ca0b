//! Character sets.
//!
//! `[abc]` collects members in the order written. `[^abc]` starts from the
//! printable universe and removes each member. There is no range syntax:
//! `-` is an ordinary member. A `]` right after `[` or `[^` closes the set.

use strex_ir::{Node, NotFoundError, OrderedCharSet};
use tracing::trace;

use crate::{Mode, Parser, PatternError, PatternErrorKind};

impl Parser<'_> {
    /// Parse `[...]`. Returns `None` when the resulting set is empty.
    pub(crate) fn parse_set(&mut self) -> Result<Option<Node>, PatternError> {
        self.modes.push(Mode::Set);
        self.cursor.advance();

        let negated = self.cursor.eat('^');
        let mut set = if negated {
            self.options.tables().printable().clone()
        } else {
            OrderedCharSet::new()
        };

        loop {
            let index = self.cursor.position();
            let member = match self.cursor.current() {
                None => return Err(self.unterminated(Mode::Set)),
                Some(']') => {
                    self.cursor.advance();
                    break;
                }
                Some('\\') => self.parse_escape()?,
                Some(c) => {
                    self.cursor.advance();
                    c
                }
            };

            if negated {
                set.remove(member).map_err(|NotFoundError(missing)| {
                    self.error_from(PatternErrorKind::SetMemberNotFound(missing), index)
                })?;
            } else {
                set.add(member);
            }
        }

        self.modes.pop(Mode::Set);
        trace!(negated, members = set.len(), "set");
        Ok(Node::from_set(&set))
    }
}
