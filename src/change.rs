//! The contract an editor must satisfy to host auto-replace.
//!
//! A [`Change`] is a transaction handle threaded by value through every
//! mutation, so each call returns the updated handle and no state is shared
//! behind the engine's back.

/// A pending edit against the host document.
///
/// Offsets are character offsets within the block that holds the start of the
/// selection.
pub trait Change: Sized {
    /// Whether the selection is a bare cursor (no range selected).
    fn is_collapsed(&self) -> bool;

    /// Type label of the block holding the cursor, e.g. `"paragraph"`.
    fn block_kind(&self) -> &str;

    /// Plain text of the block holding the cursor.
    fn block_text(&self) -> String;

    /// Cursor offset within [`Change::block_text`].
    fn cursor_offset(&self) -> usize;

    /// Delete `start..end` from the cursor's block.
    fn delete_range(self, start: usize, end: usize) -> Self;

    /// Collapse the selection to `offset` within the cursor's block.
    fn collapse_to(self, offset: usize) -> Self;
}
