//! strex IR - pattern intermediate representation.
//!
//! This crate contains the data structures shared by the pattern parser and
//! the expansion engine:
//! - [`Span`] for locations inside a pattern
//! - [`Node`], the `Literal` / `Sequence` / `Choice` tree a pattern compiles to
//! - [`OrderedCharSet`], the insertion-ordered accumulator for character classes
//! - [`CharTables`], the named-escape table and the printable universe that
//!   negated classes are carved out of
//!
//! # Sharing
//!
//! Children are held behind [`Arc`](std::sync::Arc). Bounded repetition
//! reuses one sub-tree for every mandatory copy; the optional copy is made
//! with copy-on-write (`Arc::make_mut`) so its extra empty alternative is
//! never visible through the mandatory copies. A finished IR is immutable and
//! `Send + Sync`, so one parse can feed any number of expansions.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod charset;
mod node;
mod span;
mod tables;

pub use charset::{NotFoundError, OrderedCharSet};
pub use node::Node;
pub use span::Span;
pub use tables::{CharTables, BUILTIN_ESCAPES, PRINTABLE_ASCII};
