//! Translate capture groups into absolute delete ranges.
//!
//! Ranges are emitted in the order they must be applied: every before-side
//! range first, then every after-side range. Each range's offsets already
//! account for the text removed by the ranges emitted ahead of it, so
//! applying them out of order corrupts the document.

use super::matcher::{MatchRecord, MatchResult};

/// A contiguous character range to delete from the cursor's block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRange {
    pub start: usize,
    pub end: usize,
    /// How far this deletion moves the cursor left. Zero for after-side ranges.
    pub removed: usize,
}

/// Compute the delete ranges for `matches` around a cursor at `cursor`.
///
/// Only capture groups are deleted; the rest of the full match stays put.
/// Unset groups are skipped and leave the arithmetic for later groups alone.
pub fn delete_ranges(matches: &MatchResult, cursor: usize) -> Vec<DeleteRange> {
    let mut ranges = Vec::new();
    let mut total_removed = 0usize;

    if let Some(before) = &matches.before {
        // Offsets use the untrimmed match: it is what actually ends at the cursor.
        let match_len = before.raw.chars().count();
        for (position, len) in capture_positions(before) {
            let Some(start) = (cursor + position).checked_sub(total_removed + match_len) else {
                continue;
            };
            ranges.push(DeleteRange {
                start,
                end: start + len,
                removed: len,
            });
            total_removed += len;
        }
    }

    if let Some(after) = &matches.after {
        for (position, len) in capture_positions(after) {
            let Some(start) = (cursor + position).checked_sub(total_removed) else {
                continue;
            };
            ranges.push(DeleteRange {
                start,
                end: start + len,
                removed: 0,
            });
            total_removed += len;
        }
    }

    ranges
}

/// Character position and length of each set capture within the raw match.
///
/// Each capture is searched for starting just after the previous one ended,
/// so repeated substrings resolve to successive occurrences. Captures that
/// can't be found that way (nested groups) are skipped.
fn capture_positions(record: &MatchRecord) -> Vec<(usize, usize)> {
    let mut positions = Vec::new();
    let mut search_from = 0;
    for capture in record.captures.iter().flatten() {
        let Some(found) = record.raw[search_from..].find(capture.as_str()) else {
            continue;
        };
        let byte_pos = search_from + found;
        positions.push((
            record.raw[..byte_pos].chars().count(),
            capture.chars().count(),
        ));
        search_from = byte_pos + capture.len();
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(raw: &str, captures: &[Option<&str>]) -> MatchRecord {
        MatchRecord {
            text: raw.to_string(),
            raw: raw.to_string(),
            captures: captures.iter().map(|c| c.map(str::to_string)).collect(),
        }
    }

    fn range(start: usize, end: usize, removed: usize) -> DeleteRange {
        DeleteRange {
            start,
            end,
            removed,
        }
    }

    #[test]
    fn test_before_captures() {
        // "A B " with the cursor at the end.
        let matches = MatchResult {
            before: Some(record("A B ", &[Some("A"), Some("B")])),
            after: None,
        };
        assert_eq!(
            delete_ranges(&matches, 4),
            vec![range(0, 1, 1), range(1, 2, 1)]
        );
    }

    #[test]
    fn test_before_match_not_at_block_start() {
        let matches = MatchResult {
            before: Some(record("--", &[Some("--")])),
            after: None,
        };
        assert_eq!(delete_ranges(&matches, 5), vec![range(3, 5, 2)]);
    }

    #[test]
    fn test_repeated_substrings() {
        let matches = MatchResult {
            before: Some(record("aXa", &[Some("a"), Some("a")])),
            after: None,
        };
        assert_eq!(
            delete_ranges(&matches, 3),
            vec![range(0, 1, 1), range(1, 2, 1)]
        );
    }

    #[test]
    fn test_no_captures_no_ranges() {
        let matches = MatchResult {
            before: Some(record("--", &[])),
            after: Some(record("!!", &[])),
        };
        assert!(delete_ranges(&matches, 2).is_empty());
    }

    #[test]
    fn test_unset_capture_is_skipped() {
        let with_gap = MatchResult {
            before: Some(record("## ", &[None, Some("##"), Some(" ")])),
            after: None,
        };
        let without_gap = MatchResult {
            before: Some(record("## ", &[Some("##"), Some(" ")])),
            after: None,
        };
        assert_eq!(delete_ranges(&with_gap, 3), delete_ranges(&without_gap, 3));
        assert_eq!(
            delete_ranges(&with_gap, 3),
            vec![range(0, 2, 2), range(0, 1, 1)]
        );
    }

    #[test]
    fn test_after_ranges_do_not_move_cursor() {
        let matches = MatchResult {
            before: None,
            after: Some(record("x!y!", &[Some("!"), Some("!")])),
        };
        assert_eq!(
            delete_ranges(&matches, 2),
            vec![range(3, 4, 0), range(4, 5, 0)]
        );
    }

    #[test]
    fn test_before_and_after() {
        // "**bo|ld**"
        let matches = MatchResult {
            before: Some(record("**bo", &[Some("**")])),
            after: Some(record("ld**", &[Some("**")])),
        };
        assert_eq!(
            delete_ranges(&matches, 4),
            vec![range(0, 2, 2), range(4, 6, 0)]
        );
    }

    #[test]
    fn test_trimmed_text_does_not_shift_ranges() {
        let mut before = record(":smile:  ", &[Some(":"), Some(":")]);
        before.text = ":smile:".to_string();
        let matches = MatchResult {
            before: Some(before),
            after: None,
        };
        // "x :smile:  " with the cursor at the end.
        assert_eq!(
            delete_ranges(&matches, 11),
            vec![range(2, 3, 1), range(7, 8, 1)]
        );
    }

    #[test]
    fn test_multibyte_positions() {
        let matches = MatchResult {
            before: Some(record("\u{e9}\u{e9}(x)", &[Some("x")])),
            after: None,
        };
        assert_eq!(delete_ranges(&matches, 5), vec![range(3, 4, 1)]);
    }
}
