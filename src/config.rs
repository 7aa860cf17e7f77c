//! Declarative rules files.
//!
//! ```toml
//! [[rule]]
//! trigger = " "
//! before = '^(-)$'
//! only_in = "paragraph"
//! set_kind = "bulleted-list-item"
//!
//! [[rule]]
//! trigger = " "
//! before = '(--)$'
//! insert = "—"
//! insert_input = true
//! ```
//!
//! Each rule becomes an [`AutoReplace`] over a [`Transaction`] whose transform
//! inserts `insert` at the cursor (followed by the triggering text when
//! `insert_input` is set) and then retypes the block to `set_kind`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

use crate::context::ContextMatcher;
use crate::error::ConfigError;
use crate::input::InputEvent;
use crate::replace::{AutoReplace, Options, RuleSet};
use crate::transaction::Transaction;
use crate::trigger::TriggerSpec;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    #[serde(default, rename = "rule")]
    rules: Vec<RuleConfig>,
}

/// One `[[rule]]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Exact text (or key name) that triggers the rule.
    pub trigger: Option<String>,
    /// Regular expression tested against inserted text.
    pub trigger_regex: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub only_in: Option<KindList>,
    pub ignore_in: Option<KindList>,
    /// Text inserted in place of the removed captures.
    #[serde(default)]
    pub insert: String,
    /// Also insert the text that triggered the rule, after `insert`.
    #[serde(default)]
    pub insert_input: bool,
    /// New type label for the cursor's block.
    pub set_kind: Option<String>,
}

/// A single block kind or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KindList {
    One(String),
    Many(Vec<String>),
}

impl From<KindList> for ContextMatcher {
    fn from(kinds: KindList) -> Self {
        match kinds {
            KindList::One(kind) => kind.into(),
            KindList::Many(kinds) => kinds.into(),
        }
    }
}

impl RuleConfig {
    /// Compile this rule.
    pub fn build(self) -> Result<AutoReplace<Transaction>, ConfigError> {
        let trigger = match (self.trigger, self.trigger_regex) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingTrigger),
            (Some(text), None) => TriggerSpec::Text(text),
            (None, Some(pattern)) => TriggerSpec::Pattern(compile("trigger_regex", &pattern)?),
            (None, None) => return Err(ConfigError::MissingTrigger),
        };

        let insert = self.insert;
        let insert_input = self.insert_input;
        let set_kind = self.set_kind;
        let mut options = Options::new()
            .trigger(trigger)
            .transform(move |change: Transaction, event: &InputEvent, _, _| {
                let mut change = change.insert_text(&insert);
                if insert_input && let Some(data) = &event.data {
                    change = change.insert_text(data);
                }
                match &set_kind {
                    Some(kind) => change.set_block_kind(kind),
                    None => change,
                }
            });
        if let Some(pattern) = &self.before {
            options = options.before(compile("before", pattern)?);
        }
        if let Some(pattern) = &self.after {
            options = options.after(compile("after", pattern)?);
        }
        if let Some(kinds) = self.only_in {
            options = options.only_in(kinds);
        }
        if let Some(kinds) = self.ignore_in {
            options = options.ignore_in(kinds);
        }
        AutoReplace::new(options)
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern { field, source })
}

/// Parse a rules file's contents into a rule stack, in file order.
pub fn parse_rules(source: &str) -> Result<RuleSet<Transaction>> {
    let file: RulesFile = toml::from_str(source).context("failed to parse rules")?;
    file.rules
        .into_iter()
        .enumerate()
        .map(|(index, rule)| rule.build().with_context(|| format!("rule {}", index + 1)))
        .collect()
}

/// Read and parse a rules file.
pub fn load_rules(path: &Path) -> Result<RuleSet<Transaction>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_rules(&source).with_context(|| format!("in {}", path.display()))
}
