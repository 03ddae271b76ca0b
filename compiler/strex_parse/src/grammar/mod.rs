//! Grammar productions, one file per construct.
//!
//! - `scope`: element sequences, groups, alternation, quantifiers
//! - `escape`: `\` sequences
//! - `set`: `[...]` and `[^...]`
//! - `count`: `{m}`, `{m,n}`, `{,n}`

mod count;
mod escape;
mod scope;
mod set;
