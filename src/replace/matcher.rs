//! Match the before/after patterns against the text around the cursor.

use std::iter;

use regex::{Captures, Regex};

/// One side's regular-expression match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// The full match with boundary whitespace trimmed.
    pub text: String,
    /// The full match exactly as the pattern matched it.
    pub raw: String,
    /// Capture groups in order; `None` when a group did not participate.
    pub captures: Vec<Option<String>>,
}

impl MatchRecord {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let raw = caps.get(0).map_or("", |m| m.as_str()).to_string();
        Self {
            text: raw.clone(),
            raw,
            captures: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        }
    }

    /// Capture group `n`, numbered as in the pattern (`0` is the trimmed full match).
    pub fn group(&self, n: usize) -> Option<&str> {
        match n {
            0 => Some(&self.text),
            n => self.captures.get(n - 1)?.as_deref(),
        }
    }

    /// Strip trailing whitespace from [`MatchRecord::text`].
    pub fn trim_end(&mut self) {
        let len = self.text.trim_end().len();
        self.text.truncate(len);
    }

    /// Strip leading whitespace from [`MatchRecord::text`].
    pub fn trim_start(&mut self) {
        let skip = self.text.len() - self.text.trim_start().len();
        self.text.replace_range(..skip, "");
    }
}

/// The matches on either side of the cursor. At least one side is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub before: Option<MatchRecord>,
    pub after: Option<MatchRecord>,
}

/// Match `before` against the text ending at `cursor` and `after` against the
/// text starting there.
///
/// `cursor` is a character offset. A before-match must end exactly at the
/// cursor and an after-match must start exactly there; anything else counts
/// as no match. When both patterns are given both must match. Returns `None`
/// when nothing matched.
pub fn find_matches(
    text: &str,
    cursor: usize,
    before: Option<&Regex>,
    after: Option<&Regex>,
) -> Option<MatchResult> {
    let split = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(idx, _)| idx);
    let (text_before, text_after) = text.split_at(split);

    let mut before_match = before.and_then(|re| before_captures(re, text_before));
    let mut after_match = after.and_then(|re| {
        re.captures(text_after)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0))
            .map(|caps| MatchRecord::from_captures(&caps))
    });

    if before.is_some() && after.is_some() && (before_match.is_none() || after_match.is_none()) {
        before_match = None;
        after_match = None;
    }
    if before_match.is_none() && after_match.is_none() {
        return None;
    }

    if let Some(record) = before_match.as_mut() {
        record.trim_end();
    }
    if let Some(record) = after_match.as_mut() {
        record.trim_start();
    }
    Some(MatchResult {
        before: before_match,
        after: after_match,
    })
}

/// The leftmost match of `re` that ends exactly at the end of `text`.
///
/// An earlier occurrence that stops short doesn't hide one touching the end.
fn before_captures(re: &Regex, text: &str) -> Option<MatchRecord> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(iter::once(text.len()))
        .filter_map(|start| re.captures_at(text, start))
        .find(|caps| caps.get(0).is_some_and(|m| m.end() == text.len()))
        .map(|caps| MatchRecord::from_captures(&caps))
}
