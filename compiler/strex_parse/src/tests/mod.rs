//! Parser tests.

mod errors;
mod warnings;

use std::sync::Arc;

use strex_ir::Node;

pub(super) fn lit(text: &str) -> Arc<Node> {
    Arc::new(Node::literal(text))
}

pub(super) fn ch(c: char) -> Arc<Node> {
    Arc::new(Node::single(c))
}

pub(super) fn seq(items: Vec<Arc<Node>>) -> Arc<Node> {
    Arc::new(Node::Sequence(items))
}

pub(super) fn choice(alternatives: Vec<Arc<Node>>) -> Arc<Node> {
    Arc::new(Node::Choice(alternatives))
}

/// A root sequence.
pub(super) fn root(items: Vec<Arc<Node>>) -> Node {
    Node::Sequence(items)
}
