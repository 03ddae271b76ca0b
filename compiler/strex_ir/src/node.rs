//! The pattern IR.
//!
//! A pattern compiles to a tree of three node kinds:
//!
//! | Node | Matches |
//! |------|---------|
//! | `Literal(text)` | exactly `text` (`""` is the epsilon option) |
//! | `Sequence(items)` | the concatenation of one match of each item, in order |
//! | `Choice(alternatives)` | one match of any single alternative |
//!
//! Every element the parser produces is a `Choice`, even a lone literal
//! character, so quantifiers can uniformly extend it with an empty
//! alternative.
//!
//! # Invariants
//!
//! - A `Choice` is never empty. Constructs that would produce one (an empty
//!   class, a `{0}` repetition) are dropped from their parent instead.
//! - A `Sequence` reached by the expansion engine has at least one item;
//!   empty scopes are represented as `Literal("")`.

use std::fmt::{self, Write};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use strex_stack::ensure_sufficient_stack;

use crate::OrderedCharSet;

/// A node of the pattern IR.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Node {
    /// A fixed, already-resolved fragment.
    Literal(String),
    /// Ordered concatenation.
    Sequence(Vec<Arc<Node>>),
    /// Mutually exclusive alternatives, in generation order.
    Choice(Vec<Arc<Node>>),
}

impl Node {
    /// The epsilon literal, matching only the empty string.
    #[inline]
    pub fn empty() -> Self {
        Node::Literal(String::new())
    }

    /// A literal fragment.
    #[inline]
    pub fn literal(text: impl Into<String>) -> Self {
        Node::Literal(text.into())
    }

    /// A one-alternative choice holding the literal `c`.
    ///
    /// This is the shape of every plain or escaped character in a pattern.
    pub fn single(c: char) -> Self {
        Node::Choice(vec![Arc::new(Node::Literal(c.to_string()))])
    }

    /// One alternative per member, in insertion order.
    ///
    /// Returns `None` for an empty set: an empty `Choice` must never be built.
    pub fn from_set(set: &OrderedCharSet) -> Option<Self> {
        if set.is_empty() {
            return None;
        }
        Some(Node::Choice(
            set.iter()
                .map(|c| Arc::new(Node::Literal(c.to_string())))
                .collect(),
        ))
    }

    /// Wrap a scope's elements: `Literal("")` when nothing is left, a
    /// `Sequence` otherwise.
    pub fn sequence_or_empty(items: Vec<Arc<Node>>) -> Self {
        if items.is_empty() {
            Node::empty()
        } else {
            Node::Sequence(items)
        }
    }

    /// Check if this is the epsilon literal.
    #[inline]
    pub fn is_empty_literal(&self) -> bool {
        matches!(self, Node::Literal(text) if text.is_empty())
    }

    /// Make this node skippable by offering the empty string first.
    ///
    /// A `Choice` gains a leading `Literal("")` alternative; any other node is
    /// wrapped as `Choice([Literal(""), self])`.
    pub fn add_empty_alternative(&mut self) {
        match self {
            Node::Choice(alternatives) => alternatives.insert(0, Arc::new(Node::empty())),
            other => {
                let inner = std::mem::replace(other, Node::empty());
                *other = Node::Choice(vec![Arc::new(Node::empty()), Arc::new(inner)]);
            }
        }
    }

    /// Bounded repetition of `element`, `min..=max` times.
    ///
    /// Builds `Choice([Sequence(copies)])` with exactly `max` copies: the first
    /// `min` are the shared `element`; the remaining `max - min` share a single
    /// optional instance carrying an extra empty alternative. The optional
    /// instance is made with `Arc::make_mut`, so it is a fresh copy whenever a
    /// mandatory copy still points at `element`.
    ///
    /// Returns `None` when `max == 0`: the element matches only the empty
    /// string and is dropped from its parent.
    pub fn repeat(element: Arc<Node>, min: usize, max: usize) -> Option<Self> {
        debug_assert!(min <= max, "repetition bounds out of order: {min} > {max}");
        if max == 0 {
            return None;
        }

        let mut copies = Vec::with_capacity(max);
        copies.extend(std::iter::repeat_with(|| Arc::clone(&element)).take(min));

        if max > min {
            let mut optional = element;
            Arc::make_mut(&mut optional).add_empty_alternative();
            copies.extend(std::iter::repeat_with(|| Arc::clone(&optional)).take(max - min));
        }

        Some(Node::Choice(vec![Arc::new(Node::Sequence(copies))]))
    }

    /// Check the IR invariants: no empty `Choice`, no empty `Sequence`.
    pub fn is_well_formed(&self) -> bool {
        ensure_sufficient_stack(|| match self {
            Node::Literal(_) => true,
            Node::Sequence(children) | Node::Choice(children) => {
                !children.is_empty() && children.iter().all(|child| child.is_well_formed())
            }
        })
    }

    /// Number of strings the expansion engine yields for this node.
    ///
    /// A sequence multiplies its items (and yields nothing when empty), a
    /// choice adds up its alternatives. Duplicates are counted, matching the
    /// engine. Returns `None` if the count does not fit in a `u128`.
    pub fn count(&self) -> Option<u128> {
        let mut memo = FxHashMap::default();
        self.count_memo(&mut memo)
    }

    /// Shared sub-trees (repetition copies) are counted once per address.
    fn count_memo(&self, memo: &mut FxHashMap<usize, Option<u128>>) -> Option<u128> {
        ensure_sufficient_stack(|| match self {
            Node::Literal(_) => Some(1),
            Node::Sequence(items) => {
                if items.is_empty() {
                    return Some(0);
                }
                let mut total: u128 = 1;
                for item in items {
                    total = total.checked_mul(Self::count_child(item, memo)?)?;
                }
                Some(total)
            }
            Node::Choice(alternatives) => {
                let mut total: u128 = 0;
                for alternative in alternatives {
                    total = total.checked_add(Self::count_child(alternative, memo)?)?;
                }
                Some(total)
            }
        })
    }

    fn count_child(child: &Arc<Node>, memo: &mut FxHashMap<usize, Option<u128>>) -> Option<u128> {
        let key = Arc::as_ptr(child) as usize;
        if let Some(&cached) = memo.get(&key) {
            return cached;
        }
        let count = child.count_memo(memo);
        memo.insert(key, count);
        count
    }

    /// The single character of a one-character literal.
    fn as_single_char(&self) -> Option<char> {
        match self {
            Node::Literal(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Frees nested children from a heap worklist instead of the call stack.
///
/// A child is only descended into when this was its last reference; shared
/// repetition copies just lose a count.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = match self {
            Node::Literal(_) => return,
            Node::Sequence(children) | Node::Choice(children) => std::mem::take(children),
        };
        while let Some(child) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(child) {
                if let Node::Sequence(children) | Node::Choice(children) = &mut node {
                    pending.append(children);
                }
            }
        }
    }
}

/// Characters that need a backslash outside a class.
fn is_special(c: char) -> bool {
    matches!(
        c,
        '\\' | '[' | ']' | '(' | ')' | '{' | '}' | '|' | '?' | '*' | '+' | '^' | '$'
    )
}

/// Write `c` so the parser reads it back as the same character.
fn write_char(f: &mut fmt::Formatter<'_>, c: char, in_class: bool) -> fmt::Result {
    match c {
        '\n' => f.write_str("\\n"),
        '\t' => f.write_str("\\t"),
        '\r' => f.write_str("\\r"),
        c if c.is_control() => {
            let value = u32::from(c);
            if value <= 0xFF {
                write!(f, "\\x{value:02X}")
            } else if value <= 0xFFFF {
                write!(f, "\\u{value:04X}")
            } else {
                write!(f, "\\U{value:08X}")
            }
        }
        c if in_class && matches!(c, '\\' | ']' | '^') => write!(f, "\\{c}"),
        c if !in_class && is_special(c) => write!(f, "\\{c}"),
        c => f.write_char(c),
    }
}

/// Pattern-syntax dump of the IR.
///
/// Reparsing the output yields an IR that generates the same strings in the
/// same order. One-character alternatives print as a class (`[abc]`), other
/// choices as a group (`(ab|)`), and repetition appears unrolled.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::Literal(text) => text.chars().try_for_each(|c| write_char(f, c, false)),
            Node::Sequence(items) => {
                if items.is_empty() {
                    return f.write_str("()");
                }
                items.iter().try_for_each(|item| write!(f, "{item}"))
            }
            Node::Choice(alternatives) => match alternatives.as_slice() {
                [] => f.write_str("[]"),
                [only] => write!(f, "{only}"),
                _ => {
                    // A class only round-trips when its members are distinct.
                    let chars: Option<OrderedCharSet> =
                        alternatives.iter().map(|a| a.as_single_char()).collect();
                    if let Some(chars) = chars.filter(|set| set.len() == alternatives.len()) {
                        f.write_char('[')?;
                        for c in &chars {
                            write_char(f, c, true)?;
                        }
                        return f.write_char(']');
                    }
                    f.write_char('(')?;
                    for (i, alternative) in alternatives.iter().enumerate() {
                        if i > 0 {
                            f.write_char('|')?;
                        }
                        write!(f, "{alternative}")?;
                    }
                    f.write_char(')')
                }
            },
        })
    }
}
