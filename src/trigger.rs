//! Trigger gate: decides whether an input event warrants a replace attempt.

use std::fmt;

use regex::Regex;

use crate::input::{InputData, InputEvent};

/// Predicate signature shared by every trigger shape.
pub type TriggerFn = dyn Fn(&InputEvent, &InputData) -> bool;

/// The shapes a trigger can be configured as.
pub enum TriggerSpec {
    /// Matches the inserted text, or the key name on key-down events.
    Text(String),
    /// Matches when the inserted text is non-empty and contains a match.
    Pattern(Regex),
    /// Full delegation to a caller predicate.
    Predicate(Box<TriggerFn>),
}

impl fmt::Debug for TriggerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for TriggerSpec {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TriggerSpec {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Regex> for TriggerSpec {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

/// A trigger resolved once into a single predicate.
pub struct Trigger {
    predicate: Box<TriggerFn>,
    observes_key_down: bool,
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("observes_key_down", &self.observes_key_down)
            .finish_non_exhaustive()
    }
}

impl Trigger {
    pub fn new(spec: TriggerSpec) -> Self {
        match spec {
            TriggerSpec::Text(text) => {
                // Single characters arrive reliably as text insertions.
                let observes_key_down = text.chars().count() != 1;
                Self {
                    predicate: Box::new(move |event: &InputEvent, data: &InputData| match &data.key {
                        Some(key) => *key == text,
                        None => event.data.as_deref() == Some(text.as_str()),
                    }),
                    observes_key_down,
                }
            }
            TriggerSpec::Pattern(re) => Self {
                predicate: Box::new(move |event: &InputEvent, _: &InputData| {
                    event
                        .data
                        .as_deref()
                        .is_some_and(|data| !data.is_empty() && re.is_match(data))
                }),
                observes_key_down: false,
            },
            TriggerSpec::Predicate(predicate) => Self {
                predicate,
                observes_key_down: true,
            },
        }
    }

    /// Whether the trigger accepts this event.
    pub fn fires(&self, event: &InputEvent, data: &InputData) -> bool {
        (self.predicate)(event, data)
    }

    /// Whether key-down events should be offered to this trigger at all.
    ///
    /// Regex and single-character triggers are observed through text
    /// insertion only, so they never fire twice for the same keystroke.
    pub fn observes_key_down(&self) -> bool {
        self.observes_key_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> InputData {
        InputData {
            key: Some(name.to_string()),
        }
    }

    #[test]
    fn test_text_matches_inserted_text() {
        let trigger = Trigger::new("-- ".into());
        assert!(trigger.fires(&InputEvent::text("-- "), &InputData::default()));
        assert!(!trigger.fires(&InputEvent::text("--"), &InputData::default()));
        assert!(!trigger.fires(&InputEvent::key(), &InputData::default()));
    }

    #[test]
    fn test_text_matches_key_name_when_key_is_set() {
        let trigger = Trigger::new("Enter".into());
        assert!(trigger.fires(&InputEvent::key(), &key("Enter")));
        assert!(!trigger.fires(&InputEvent::key(), &key("Tab")));
        // The inserted text is ignored once a key name is present.
        assert!(!trigger.fires(&InputEvent::text("Enter"), &key("Tab")));
    }

    #[test]
    fn test_pattern_matches_anywhere() {
        let trigger = Trigger::new(Regex::new("[.!?]").unwrap().into());
        assert!(trigger.fires(&InputEvent::text("!"), &InputData::default()));
        assert!(trigger.fires(&InputEvent::text("ok."), &InputData::default()));
        assert!(!trigger.fires(&InputEvent::text("a"), &InputData::default()));
    }

    #[test]
    fn test_pattern_needs_nonempty_text() {
        let trigger = Trigger::new(Regex::new("^$").unwrap().into());
        assert!(!trigger.fires(&InputEvent::text(""), &InputData::default()));
        assert!(!trigger.fires(&InputEvent::key(), &key("Enter")));
    }

    #[test]
    fn test_predicate_is_delegated() {
        let trigger = Trigger::new(TriggerSpec::Predicate(Box::new(|_: &InputEvent, data: &InputData| {
            data.key.as_deref() == Some("Tab")
        })));
        assert!(trigger.fires(&InputEvent::key(), &key("Tab")));
        assert!(!trigger.fires(&InputEvent::text("\t"), &InputData::default()));
        assert!(trigger.observes_key_down());
    }

    #[test]
    fn test_key_down_short_circuit() {
        assert!(!Trigger::new(" ".into()).observes_key_down());
        assert!(!Trigger::new(Regex::new("x").unwrap().into()).observes_key_down());
        assert!(Trigger::new("Enter".into()).observes_key_down());
        assert!(Trigger::new("-- ".into()).observes_key_down());
    }
}
