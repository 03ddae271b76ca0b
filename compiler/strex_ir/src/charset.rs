//! Insertion-ordered character set.
//!
//! Character classes generate their members in the order they were written,
//! so the accumulator has to remember insertion order while still answering
//! membership in O(1). Order lives in a `Vec`, membership in an `FxHashSet`.

use std::fmt;

use rustc_hash::FxHashSet;

/// Removal of a character that is not a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("character {0:?} is not a member of the set")]
pub struct NotFoundError(pub char);

/// A mutable, insertion-ordered collection of unique characters.
///
/// # Invariant
///
/// `order` and `members` always hold the same characters, and `order` never
/// contains duplicates. Re-adding a member does not move it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OrderedCharSet {
    order: Vec<char>,
    members: FxHashSet<char>,
}

impl OrderedCharSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `c` at the end of the iteration order.
    ///
    /// Returns `false` (and leaves the order untouched) if `c` was already
    /// a member.
    pub fn add(&mut self, c: char) -> bool {
        if self.members.insert(c) {
            self.order.push(c);
            true
        } else {
            false
        }
    }

    /// Remove `c`, keeping the relative order of the remaining members.
    pub fn remove(&mut self, c: char) -> Result<(), NotFoundError> {
        if !self.members.remove(&c) {
            return Err(NotFoundError(c));
        }
        if let Some(idx) = self.order.iter().position(|&m| m == c) {
            self.order.remove(idx);
        }
        Ok(())
    }

    /// Check whether `c` is a member.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, char>> {
        self.order.iter().copied()
    }

    /// Members in insertion order as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.order
    }
}

impl Extend<char> for OrderedCharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.add(c);
        }
    }
}

impl FromIterator<char> for OrderedCharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = OrderedCharSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a OrderedCharSet {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for OrderedCharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, c) in self.order.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c:?}")?;
        }
        f.write_str(">")
    }
}
