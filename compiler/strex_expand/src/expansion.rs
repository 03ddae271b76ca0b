//! The backtracking iterator.
//!
//! State is an output buffer, a stack of partially walked sequences (the
//! continuation), and a stack of choice points. Entering a `Choice` with more
//! than one alternative snapshots the buffer length and the continuation;
//! when a string is complete or a branch dies, the most recent choice point
//! is restored and its next alternative entered. Nothing recurses on the
//! native stack, however deep the IR.

use std::iter::FusedIterator;
use std::sync::Arc;

use strex_ir::Node;
use tracing::{debug, trace};

/// A partially walked sequence: the items still to emit start at `next`.
#[derive(Clone, Debug)]
struct Frame<'a> {
    items: &'a [Arc<Node>],
    next: usize,
}

/// Where to resume once the current alternative is exhausted.
#[derive(Debug)]
struct ChoicePoint<'a> {
    alternatives: &'a [Arc<Node>],
    next: usize,
    buf_len: usize,
    frames: Vec<Frame<'a>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

enum Step<'a> {
    Enter(&'a Node),
    Continue,
    Backtrack,
}

/// Lazy sequence of the strings an IR matches.
///
/// Created by [`generate`](crate::generate), [`expand_choice`](crate::expand_choice)
/// and [`expand_sequence`](crate::expand_sequence). Stopping early is just
/// dropping the iterator.
#[derive(Debug)]
pub struct Expansion<'a> {
    root: Option<&'a Node>,
    buf: String,
    frames: Vec<Frame<'a>>,
    choices: Vec<ChoicePoint<'a>>,
    state: State,
    yielded: u64,
}

impl<'a> Expansion<'a> {
    pub(crate) fn new(root: &'a Node, prefix: &str) -> Self {
        Expansion {
            root: Some(root),
            buf: prefix.to_owned(),
            frames: Vec::new(),
            choices: Vec::new(),
            state: State::Fresh,
            yielded: 0,
        }
    }

    /// Start in the middle of a sequence. `items` must not be empty.
    pub(crate) fn from_items(items: &'a [Arc<Node>], next: usize, prefix: &str) -> Self {
        debug_assert!(!items.is_empty(), "expansion of an empty sequence");
        Expansion {
            root: None,
            buf: prefix.to_owned(),
            frames: vec![Frame { items, next }],
            choices: Vec::new(),
            state: State::Fresh,
            yielded: 0,
        }
    }

    /// Number of strings yielded so far.
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    fn enter(&mut self, node: &'a Node) -> Step<'a> {
        match node {
            Node::Literal(text) => {
                self.buf.push_str(text);
                Step::Continue
            }
            Node::Sequence(items) => {
                if items.is_empty() {
                    return Step::Backtrack;
                }
                self.frames.push(Frame { items, next: 0 });
                Step::Continue
            }
            Node::Choice(alternatives) => {
                let Some((first, rest)) = alternatives.split_first() else {
                    panic!("empty Choice in IR");
                };
                if !rest.is_empty() {
                    trace!(
                        depth = self.choices.len(),
                        width = alternatives.len(),
                        "choice point"
                    );
                    self.choices.push(ChoicePoint {
                        alternatives,
                        next: 1,
                        buf_len: self.buf.len(),
                        frames: self.frames.clone(),
                    });
                }
                Step::Enter(&**first)
            }
        }
    }

    /// Next item of the innermost unfinished sequence, popping finished ones.
    fn pending(&mut self) -> Option<&'a Node> {
        while let Some(frame) = self.frames.last_mut() {
            let items = frame.items;
            if let Some(item) = items.get(frame.next) {
                frame.next += 1;
                return Some(&**item);
            }
            self.frames.pop();
        }
        None
    }

    /// Restore the most recent choice point and take its next alternative.
    fn backtrack(&mut self) -> Option<&'a Node> {
        let mut point = self.choices.pop()?;
        let alternatives = point.alternatives;
        let alternative = &*alternatives[point.next];
        point.next += 1;
        self.buf.truncate(point.buf_len);
        if point.next < point.alternatives.len() {
            self.frames.clone_from(&point.frames);
            self.choices.push(point);
        } else {
            self.frames = point.frames;
        }
        Some(alternative)
    }

    fn finish(&mut self) {
        self.state = State::Done;
        self.buf.clear();
        self.frames.clear();
        debug!(yielded = self.yielded, "expansion exhausted");
    }
}

impl Iterator for Expansion<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut step = match self.state {
            State::Fresh => {
                self.state = State::Running;
                match self.root {
                    Some(root) => Step::Enter(root),
                    None => Step::Continue,
                }
            }
            State::Running => Step::Backtrack,
            State::Done => return None,
        };

        loop {
            step = match step {
                Step::Enter(node) => self.enter(node),
                Step::Continue => match self.pending() {
                    Some(node) => Step::Enter(node),
                    None => {
                        self.yielded += 1;
                        return Some(self.buf.clone());
                    }
                },
                Step::Backtrack => match self.backtrack() {
                    Some(node) => Step::Enter(node),
                    None => {
                        self.finish();
                        return None;
                    }
                },
            };
        }
    }
}

impl FusedIterator for Expansion<'_> {}
