//! A minimal block document: a list of typed, rope-backed blocks and a selection.

use std::fmt;

use itertools::Itertools;
use ropey::Rope;

use crate::position::Point;
use crate::selection::Selection;

/// A single block of text with a type label such as `"paragraph"`.
#[derive(Debug, Clone)]
pub struct Block {
    kind: String,
    pub(crate) text: Rope,
}

impl Block {
    pub fn new(kind: impl Into<String>, text: &str) -> Self {
        Self {
            kind: kind.into(),
            text: Rope::from_str(text),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    /// Length of the block's text in characters.
    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    pub fn text(&self) -> String {
        self.text.to_string()
    }
}

/// An ordered list of blocks with a single selection.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) blocks: Vec<Block>,
    pub(crate) selection: Selection,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("paragraph")
    }
}

// Constructors
impl Document {
    /// Create a document holding one empty block of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::from_blocks(vec![Block::new(kind, "")])
    }

    /// Create a document from blocks, with the cursor at the very start.
    ///
    /// An empty list yields a single empty paragraph so there is always a
    /// block to hold the cursor.
    pub fn from_blocks(mut blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            blocks.push(Block::new("paragraph", ""));
        }
        Self {
            blocks,
            selection: Selection::default(),
        }
    }
}

impl Document {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the selection, clamping both points to existing text.
    pub fn select(&mut self, selection: Selection) {
        self.selection = Selection::new(
            self.clamp_point(selection.anchor),
            self.clamp_point(selection.focus),
        );
    }

    /// Collapse the selection to a single point, clamped to existing text.
    pub fn set_cursor(&mut self, at: Point) {
        self.select(Selection::collapsed(at));
    }

    /// Index of the block holding the start of the selection.
    pub fn current_block_index(&self) -> usize {
        self.selection.start().block
    }

    pub fn current_block(&self) -> &Block {
        &self.blocks[self.current_block_index()]
    }

    pub(crate) fn current_block_mut(&mut self) -> &mut Block {
        let index = self.current_block_index();
        &mut self.blocks[index]
    }

    fn clamp_point(&self, point: Point) -> Point {
        let block = point.block.min(self.blocks.len().saturating_sub(1));
        let offset = point.offset.min(self.blocks[block].len_chars());
        Point::new(block, offset)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .blocks
            .iter()
            .map(|block| format!("{}: {}", block.kind, block.text));
        write!(f, "{}", lines.format("\n"))
    }
}
