//! Scopes: the element sequence of the whole pattern, a group, or one
//! alternation branch.

use std::sync::Arc;

use strex_ir::Node;
use strex_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{Mode, ParseWarning, Parser, PatternError, PatternErrorKind};

impl Parser<'_> {
    /// Parse elements until end of input or the terminator of the innermost
    /// scope. The terminator (`)` or `|`) is left for the caller.
    pub(crate) fn parse_scope(&mut self) -> Result<Vec<Arc<Node>>, PatternError> {
        let mut elements: Vec<Arc<Node>> = Vec::new();

        while let Some(c) = self.cursor.current() {
            let index = self.cursor.position();
            match c {
                '\\' => {
                    let resolved = self.parse_escape()?;
                    elements.push(Arc::new(Node::single(resolved)));
                }
                '[' => {
                    // An empty set contributes nothing.
                    if let Some(set) = self.parse_set()? {
                        elements.push(Arc::new(set));
                    }
                }
                '(' => {
                    let group = self.parse_group()?;
                    elements.push(Arc::new(group));
                }
                ')' => {
                    if self.modes.in_group() {
                        break;
                    }
                    return Err(self.error_at(PatternErrorKind::UnmatchedGroupClose, index));
                }
                '|' => {
                    if self.modes.top() == Mode::Alternation {
                        break;
                    }
                    let first = std::mem::take(&mut elements);
                    let alternation = self.parse_alternation(first)?;
                    elements.push(Arc::new(alternation));
                }
                '?' => {
                    let span = self.cursor.current_span();
                    self.cursor.advance();
                    let dangling = ParseWarning::DanglingOptional { span };
                    self.apply_repetition(&mut elements, 0, 1, dangling);
                }
                '{' => {
                    let (min, max) = self.parse_count()?;
                    let span = self.cursor.span_from(index);
                    let dangling = ParseWarning::DanglingCount { span };
                    self.apply_repetition(&mut elements, min, max, dangling);
                }
                '*' | '+' => {
                    return Err(self.error_at(PatternErrorKind::UnboundedQuantifier(c), index));
                }
                '^' | '$' => {
                    let span = self.cursor.current_span();
                    self.cursor.advance();
                    self.warn(ParseWarning::IgnoredAnchor { span, anchor: c });
                }
                _ => {
                    self.cursor.advance();
                    elements.push(Arc::new(Node::single(c)));
                }
            }
        }

        Ok(elements)
    }

    /// `(...)`: one alternative holding the nested sequence.
    fn parse_group(&mut self) -> Result<Node, PatternError> {
        self.cursor.advance();
        self.modes.push(Mode::Group);

        let inner = ensure_sufficient_stack(|| self.parse_scope())?;
        if !self.cursor.eat(')') {
            return Err(self.unterminated(Mode::Group));
        }

        self.modes.pop(Mode::Group);
        trace!(elements = inner.len(), depth = self.modes.depth(), "group");
        Ok(Node::Choice(vec![Arc::new(Node::sequence_or_empty(inner))]))
    }

    /// `first|...|...`: the cursor is on the first `|`. Branches run to the
    /// next `|`, the enclosing `)`, or end of input.
    fn parse_alternation(&mut self, first: Vec<Arc<Node>>) -> Result<Node, PatternError> {
        self.modes.push(Mode::Alternation);

        let mut branches = vec![Arc::new(Node::sequence_or_empty(first))];
        while self.cursor.eat('|') {
            let branch = ensure_sufficient_stack(|| self.parse_scope())?;
            branches.push(Arc::new(Node::sequence_or_empty(branch)));
        }

        self.modes.pop(Mode::Alternation);
        trace!(branches = branches.len(), "alternation");
        Ok(Node::Choice(branches))
    }

    /// Repeat the last element `min..=max` times. With no element before it
    /// in this scope the quantifier is dropped with `dangling`.
    fn apply_repetition(
        &mut self,
        elements: &mut Vec<Arc<Node>>,
        min: usize,
        max: usize,
        dangling: ParseWarning,
    ) {
        let Some(element) = elements.pop() else {
            self.warn(dangling);
            return;
        };
        trace!(min, max, "repetition");
        // `max == 0` drops the element.
        if let Some(repeated) = Node::repeat(element, min, max) {
            elements.push(Arc::new(repeated));
        }
    }
}
