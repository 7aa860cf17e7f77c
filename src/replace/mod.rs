//! Auto-replace: watch typing for a trigger, then swap the matched text out.
//!
//! A rule is built from [`Options`] and exposes two hooks for the host to
//! call, [`AutoReplace::on_before_input`] and [`AutoReplace::on_key_down`].
//! When a rule fires it
//!
//! 1. matches its `before`/`after` patterns around the cursor,
//! 2. deletes every captured group (before-side first),
//! 3. collapses the cursor to where the before-side text used to end, and
//! 4. hands the cleaned-up change to the caller's transform.
//!
//! Declined attempts leave both the change and the event untouched.

pub mod matcher;
pub mod offsets;

use std::fmt;

use regex::Regex;
use tracing::{debug, trace};

use crate::change::Change;
use crate::context::{ContextFilter, ContextMatcher};
use crate::error::ConfigError;
use crate::input::{InputData, InputEvent};
use crate::trigger::{Trigger, TriggerSpec};

pub use matcher::{MatchRecord, MatchResult, find_matches};
pub use offsets::{DeleteRange, delete_ranges};

/// The caller's replacement step, run after the matched captures are gone.
pub type TransformFn<C> = dyn Fn(C, &InputEvent, &InputData, &MatchResult) -> C;

/// Construction options for an [`AutoReplace`] rule.
pub struct Options<C> {
    pub trigger: Option<TriggerSpec>,
    pub before: Option<Regex>,
    pub after: Option<Regex>,
    pub transform: Option<Box<TransformFn<C>>>,
    pub only_in: Option<ContextMatcher>,
    pub ignore_in: Option<ContextMatcher>,
}

impl<C> Default for Options<C> {
    fn default() -> Self {
        Self {
            trigger: None,
            before: None,
            after: None,
            transform: None,
            only_in: None,
            ignore_in: None,
        }
    }
}

impl<C> Options<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(mut self, trigger: impl Into<TriggerSpec>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    /// Pattern matched against the text before the cursor. Should end with `$`.
    pub fn before(mut self, pattern: Regex) -> Self {
        self.before = Some(pattern);
        self
    }

    /// Pattern matched against the text after the cursor. Should start with `^`.
    pub fn after(mut self, pattern: Regex) -> Self {
        self.after = Some(pattern);
        self
    }

    pub fn transform(
        mut self,
        transform: impl Fn(C, &InputEvent, &InputData, &MatchResult) -> C + 'static,
    ) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn only_in(mut self, matcher: impl Into<ContextMatcher>) -> Self {
        self.only_in = Some(matcher.into());
        self
    }

    pub fn ignore_in(mut self, matcher: impl Into<ContextMatcher>) -> Self {
        self.ignore_in = Some(matcher.into());
        self
    }
}

/// One auto-replace rule.
pub struct AutoReplace<C> {
    trigger: Trigger,
    before: Option<Regex>,
    after: Option<Regex>,
    transform: Box<TransformFn<C>>,
    context: ContextFilter,
}

impl<C> fmt::Debug for AutoReplace<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoReplace")
            .field("trigger", &self.trigger)
            .field("before", &self.before)
            .field("after", &self.after)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<C: Change> AutoReplace<C> {
    /// Build a rule, failing fast when `transform` or `trigger` is missing.
    pub fn new(options: Options<C>) -> Result<Self, ConfigError> {
        let transform = options.transform.ok_or(ConfigError::MissingTransform)?;
        let trigger = options.trigger.ok_or(ConfigError::MissingTrigger)?;
        Ok(Self {
            trigger: Trigger::new(trigger),
            before: options.before,
            after: options.after,
            transform,
            context: ContextFilter {
                only_in: options.only_in,
                ignore_in: options.ignore_in,
            },
        })
    }

    /// Hook for text about to be inserted.
    pub fn on_before_input(&self, event: &mut InputEvent, data: &InputData, change: C) -> C {
        if !self.trigger.fires(event, data) {
            return change;
        }
        self.replace(event, data, change)
    }

    /// Hook for key presses.
    ///
    /// Regex and single-character triggers are left to
    /// [`AutoReplace::on_before_input`].
    pub fn on_key_down(&self, event: &mut InputEvent, data: &InputData, change: C) -> C {
        if !self.trigger.observes_key_down() || !self.trigger.fires(event, data) {
            return change;
        }
        self.replace(event, data, change)
    }

    fn replace(&self, event: &mut InputEvent, data: &InputData, change: C) -> C {
        if !change.is_collapsed() {
            trace!("auto-replace declined: selection is expanded");
            return change;
        }
        let kind = change.block_kind();
        if !self.context.allows(kind) {
            trace!(kind, "auto-replace declined: block kind filtered out");
            return change;
        }

        let cursor = change.cursor_offset();
        let text = change.block_text();
        let Some(matches) = find_matches(&text, cursor, self.before.as_ref(), self.after.as_ref())
        else {
            trace!(cursor, "auto-replace declined: no match");
            return change;
        };

        event.prevent_default();
        let ranges = delete_ranges(&matches, cursor);
        debug!(cursor, ?ranges, "auto-replace fired");

        let mut change = change;
        let mut removed = 0;
        for range in &ranges {
            change = change.delete_range(range.start, range.end);
            removed += range.removed;
        }
        let change = change.collapse_to(cursor.saturating_sub(removed));
        (self.transform)(change, event, data, &matches)
    }
}

/// An ordered stack of rules; the first rule to fire handles the event.
pub struct RuleSet<C> {
    rules: Vec<AutoReplace<C>>,
}

impl<C> Default for RuleSet<C> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<C> fmt::Debug for RuleSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.rules).finish()
    }
}

impl<C: Change> RuleSet<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: AutoReplace<C>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn on_before_input(&self, event: &mut InputEvent, data: &InputData, change: C) -> C {
        let mut change = change;
        for rule in &self.rules {
            change = rule.on_before_input(event, data, change);
            if event.is_default_prevented() {
                break;
            }
        }
        change
    }

    pub fn on_key_down(&self, event: &mut InputEvent, data: &InputData, change: C) -> C {
        let mut change = change;
        for rule in &self.rules {
            change = rule.on_key_down(event, data, change);
            if event.is_default_prevented() {
                break;
            }
        }
        change
    }
}

impl<C: Change> FromIterator<AutoReplace<C>> for RuleSet<C> {
    fn from_iter<I: IntoIterator<Item = AutoReplace<C>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
