//! Position types for the document.
//!
//! Offsets are character (not byte) indices into a block's text, matching
//! the units `ropey` uses for its char APIs.

/// A position in the document: a block index and a character offset within it.
///
/// Both `block` and `offset` are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub block: usize,
    pub offset: usize,
}

impl Point {
    /// Create a new point.
    pub fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }

    /// Create a point at the start of the document.
    pub fn zero() -> Self {
        Self {
            block: 0,
            offset: 0,
        }
    }

    /// Shift this point to account for `start..end` being removed from `block`.
    ///
    /// Points before the range don't move, points inside collapse to `start`,
    /// and points after slide left by the length of the range.
    pub fn update_after_delete(&mut self, block: usize, start: usize, end: usize) {
        if self.block != block || self.offset <= start {
            return;
        }
        if self.offset < end {
            self.offset = start;
        } else {
            self.offset -= end - start;
        }
    }

    /// Shift this point to account for `len` characters inserted at `at` in `block`.
    pub fn update_after_insert(&mut self, block: usize, at: usize, len: usize) {
        if self.block == block && self.offset >= at {
            self.offset += len;
        }
    }

    /// Shift this point to account for `block` being split in two at `at`.
    pub fn update_after_split(&mut self, block: usize, at: usize) {
        if self.block > block {
            self.block += 1;
        } else if self.block == block && self.offset >= at {
            self.block += 1;
            self.offset -= at;
        }
    }
}
