//! The document selection: an anchor and a focus point.
//!
//! Both points follow edits the same way, so a collapsed selection stays
//! collapsed through deletions and insertions.

use crate::position::Point;

/// A selection in the document. Collapsed when `anchor == focus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Point,
    pub focus: Point,
}

impl Default for Selection {
    fn default() -> Self {
        Self::collapsed(Point::zero())
    }
}

impl Selection {
    pub fn new(anchor: Point, focus: Point) -> Self {
        Self { anchor, focus }
    }

    /// A cursor with no selected range.
    pub fn collapsed(at: Point) -> Self {
        Self {
            anchor: at,
            focus: at,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// The earlier of the two points.
    pub fn start(&self) -> Point {
        self.anchor.min(self.focus)
    }

    /// The later of the two points.
    pub fn end(&self) -> Point {
        self.anchor.max(self.focus)
    }

    pub fn update_after_delete(&mut self, block: usize, start: usize, end: usize) {
        self.anchor.update_after_delete(block, start, end);
        self.focus.update_after_delete(block, start, end);
    }

    pub fn update_after_insert(&mut self, block: usize, at: usize, len: usize) {
        self.anchor.update_after_insert(block, at, len);
        self.focus.update_after_insert(block, at, len);
    }

    pub fn update_after_split(&mut self, block: usize, at: usize) {
        self.anchor.update_after_split(block, at);
        self.focus.update_after_split(block, at);
    }
}
