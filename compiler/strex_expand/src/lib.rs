//! Expansion engine for strex.
//!
//! Walks a pattern IR and yields every string it matches, one at a time.
//! The walk is a depth-first, left-to-right Cartesian product over the
//! `Choice` nodes: within a choice the alternatives are tried in declared
//! order, and the leftmost choice varies slowest.
//!
//! ```
//! let ir = strex_parse::parse("(ab|cd)e").unwrap();
//! let words: Vec<String> = strex_expand::generate(&ir).collect();
//! assert_eq!(words, ["abe", "cde"]);
//! ```
//!
//! Nothing is deduplicated: `a|a` yields `"a"` twice. The engine never
//! mutates the IR, so one parse can back any number of expansions, on any
//! number of threads.

mod expansion;

pub use expansion::Expansion;

use strex_ir::Node;
use tracing::debug;

/// Every string matched by `ir`, lazily.
///
/// Each call starts a fresh traversal.
///
/// # Panics
///
/// Iteration panics on reaching an empty `Choice`, which the parser never
/// builds.
pub fn generate(ir: &Node) -> Expansion<'_> {
    debug!(count = ?ir.count(), "expansion started");
    Expansion::new(ir, "")
}

/// `prefix` followed by each expansion of `node` taken as a choice.
///
/// A `Literal` yields `prefix + text` once. A `Choice` yields, alternative by
/// alternative, everything [`expand_sequence`] yields for that alternative.
pub fn expand_choice<'a>(node: &'a Node, prefix: &str) -> Expansion<'a> {
    Expansion::new(node, prefix)
}

/// `prefix` followed by each expansion of `node`'s items from `position` on.
///
/// A position past the last item yields `prefix` once. An empty `Sequence`
/// yields nothing, whatever the position. Any other node behaves like
/// [`expand_choice`].
pub fn expand_sequence<'a>(node: &'a Node, position: usize, prefix: &str) -> Expansion<'a> {
    match node {
        Node::Sequence(items) if !items.is_empty() => {
            Expansion::from_items(items, position.min(items.len()), prefix)
        }
        _ => Expansion::new(node, prefix),
    }
}
