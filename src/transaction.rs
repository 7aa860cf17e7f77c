//! Builder-style edits against a [`Document`].
//!
//! Every method consumes the transaction and returns it, so a sequence of
//! edits reads as a chain: `tx.delete_range(0, 2).collapse_to(0).insert_text("x")`.

use crate::change::Change;
use crate::document::{Block, Document};
use crate::position::Point;
use crate::selection::Selection;

/// A pending sequence of edits over an owned [`Document`].
#[derive(Debug, Clone)]
pub struct Transaction {
    document: Document,
}

impl Transaction {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Finish the transaction and hand back the edited document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Replace the selection (clamped to existing text).
    pub fn select(mut self, selection: Selection) -> Self {
        self.document.select(selection);
        self
    }

    /// Insert text at the cursor, replacing any selected range first.
    ///
    /// The cursor ends up after the inserted text.
    pub fn insert_text(self, text: &str) -> Self {
        let mut tx = self.delete_selection();
        if text.is_empty() {
            return tx;
        }
        let at = tx.document.selection.start();
        let len = text.chars().count();
        tx.document.blocks[at.block].text.insert(at.offset, text);
        tx.document
            .selection
            .update_after_insert(at.block, at.offset, len);
        tx
    }

    /// Delete up to `count` characters before the cursor, within its block.
    ///
    /// A non-collapsed selection is deleted instead.
    pub fn delete_backward(self, count: usize) -> Self {
        if !self.document.selection.is_collapsed() {
            return self.delete_selection();
        }
        let at = self.document.selection.start();
        self.delete_range(at.offset.saturating_sub(count), at.offset)
    }

    /// Move the collapsed cursor by `delta` characters within its block.
    pub fn move_by(self, delta: isize) -> Self {
        let offset = self.cursor_offset().saturating_add_signed(delta);
        self.collapse_to(offset)
    }

    /// Change the type label of the cursor's block.
    pub fn set_block_kind(mut self, kind: &str) -> Self {
        self.document.current_block_mut().set_kind(kind);
        self
    }

    /// Split the cursor's block in two at the cursor.
    ///
    /// The new block keeps the original kind and receives the text after the
    /// cursor; the cursor moves to its start.
    pub fn split_block(self) -> Self {
        let mut tx = self.delete_selection();
        let at = tx.document.selection.start();
        let block = &mut tx.document.blocks[at.block];
        let tail = block.text.slice(at.offset..).to_string();
        block.text.remove(at.offset..);
        let next = Block::new(block.kind(), &tail);
        tx.document.blocks.insert(at.block + 1, next);
        tx.document.selection.update_after_split(at.block, at.offset);
        tx
    }

    fn delete_selection(mut self) -> Self {
        let selection = self.document.selection;
        if selection.is_collapsed() {
            return self;
        }
        let (start, end) = (selection.start(), selection.end());
        if start.block == end.block {
            return self.delete_range(start.offset, end.offset);
        }
        // Ranges spanning blocks join the two ends and drop everything in between.
        let tail = self.document.blocks[end.block]
            .text
            .slice(end.offset..)
            .to_string();
        self.document.blocks.drain(start.block + 1..=end.block);
        let block = &mut self.document.blocks[start.block];
        block.text.remove(start.offset..);
        block.text.insert(start.offset, &tail);
        self.document.selection = Selection::collapsed(start);
        self
    }
}

impl Change for Transaction {
    fn is_collapsed(&self) -> bool {
        self.document.selection.is_collapsed()
    }

    fn block_kind(&self) -> &str {
        self.document.current_block().kind()
    }

    fn block_text(&self) -> String {
        self.document.current_block().text()
    }

    fn cursor_offset(&self) -> usize {
        self.document.selection.start().offset
    }

    /// Positions are clamped to the block's text; an empty range is a no-op.
    fn delete_range(mut self, start: usize, end: usize) -> Self {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        let block_index = self.document.current_block_index();
        let block = self.document.current_block_mut();
        let len = block.len_chars();
        let (start, end) = (start.min(len), end.min(len));
        if start == end {
            return self;
        }
        block.text.remove(start..end);
        self.document
            .selection
            .update_after_delete(block_index, start, end);
        self
    }

    fn collapse_to(mut self, offset: usize) -> Self {
        let block = self.document.current_block_index();
        self.document.set_cursor(Point::new(block, offset));
        self
    }
}
