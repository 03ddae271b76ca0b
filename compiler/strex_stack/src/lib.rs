//! Stack safety for nested pattern constructs.
//!
//! Group and alternation parsing recurse once per nesting level, and IR
//! walks such as `Node::count` recurse once per IR level. A pattern like
//! `((((...))))` with a few hundred thousand parentheses would otherwise
//! overflow the native stack. Wrap such recursive calls in
//! [`ensure_sufficient_stack`] to grow the stack on demand.
//!
//! - **Native targets**: `stacker` grows the stack when the red zone is hit.
//! - **WASM targets**: no-op passthrough.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone, a fresh segment is
/// allocated before calling `f`.
///
/// ```text
/// fn parse_group(&mut self) -> Result<Elements, PatternError> {
///     ensure_sufficient_stack(|| self.parse_scope())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
