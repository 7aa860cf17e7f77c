//! Auto-replace for block-based text editors.
//!
//! A rule watches for a trigger (a typed string, a regex over the typed text,
//! or a custom predicate), matches patterns against the text before and after
//! the cursor, deletes the captured groups and hands the result to a
//! transform.
//!
//! # Example
//!
//! ```rust
//! use autoreplace::{
//!     AutoReplace, Block, Document, InputData, InputEvent, Options, Point, Transaction,
//! };
//! use regex::Regex;
//!
//! let rule = AutoReplace::new(
//!     Options::new()
//!         .trigger(" ")
//!         .before(Regex::new(r"^(-)$").unwrap())
//!         .only_in("paragraph")
//!         .transform(|change: Transaction, _, _, _| change.set_block_kind("bulleted-list-item")),
//! )
//! .unwrap();
//!
//! let mut doc = Document::from_blocks(vec![Block::new("paragraph", "-")]);
//! doc.set_cursor(Point::new(0, 1));
//!
//! // The host is about to insert a space.
//! let mut event = InputEvent::text(" ");
//! let doc = rule
//!     .on_before_input(&mut event, &InputData::default(), Transaction::new(doc))
//!     .into_document();
//!
//! assert!(event.is_default_prevented());
//! assert_eq!(doc.to_string(), "bulleted-list-item: ");
//! ```

mod change;
pub mod config;
mod context;
mod document;
mod error;
mod input;
mod position;
pub mod replace;
pub mod script;
mod selection;
mod transaction;
mod trigger;

pub use change::Change;
pub use config::{load_rules, parse_rules};
pub use context::{ContextFilter, ContextMatcher};
pub use document::{Block, Document};
pub use error::ConfigError;
pub use input::{InputData, InputEvent, key_code_from_name, key_name};
pub use position::Point;
pub use replace::{
    AutoReplace, DeleteRange, MatchRecord, MatchResult, Options, RuleSet, delete_ranges,
    find_matches,
};
pub use selection::Selection;
pub use transaction::Transaction;
pub use trigger::{Trigger, TriggerSpec};
