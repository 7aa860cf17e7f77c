//! Keystroke scripts: replay typing against a document with rules attached.
//!
//! A script is plain text typed one character at a time. `{Name}` types a
//! named key (`{Enter}`, `{Backspace}`, `{Left}`, ...) and `{{` types a
//! literal `{`.

use anyhow::{Result, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use crate::change::Change;
use crate::document::Document;
use crate::input::{InputData, InputEvent, key_code_from_name};
use crate::replace::RuleSet;
use crate::transaction::Transaction;

/// One step of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// A printable character: a key press followed by a text insertion.
    Char(char),
    /// A named key with no text of its own.
    Key(KeyCode),
}

/// Parse a script into keystrokes.
pub fn parse_script(script: &str) -> Result<Vec<Keystroke>> {
    let mut keys = Vec::new();
    let mut chars = script.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            keys.push(Keystroke::Char(ch));
            continue;
        }
        if chars.peek() == Some(&'{') {
            chars.next();
            keys.push(Keystroke::Char('{'));
            continue;
        }
        let mut name = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) => name.push(c),
                None => bail!("Unterminated key name: {{{}", name),
            }
        }
        match key_code_from_name(&name) {
            Some(KeyCode::Char(c)) => keys.push(Keystroke::Char(c)),
            Some(code) => keys.push(Keystroke::Key(code)),
            None => bail!("Unknown key name: {{{}}}", name),
        }
    }
    Ok(keys)
}

/// Type `keys` into `document`, offering each one to `rules` first.
///
/// Every keystroke is offered to the key-down hook; printable characters are
/// then offered to the before-input hook. Anything no rule handled gets the
/// default behaviour: characters are inserted, `Enter` splits the block,
/// `Backspace` and `Delete` remove a character, arrows move the cursor.
pub fn type_keys(rules: &RuleSet<Transaction>, document: Document, keys: &[Keystroke]) -> Document {
    keys.iter()
        .fold(Transaction::new(document), |tx, key| type_key(rules, tx, *key))
        .into_document()
}

fn type_key(rules: &RuleSet<Transaction>, tx: Transaction, key: Keystroke) -> Transaction {
    let code = match key {
        Keystroke::Char(ch) => KeyCode::Char(ch),
        Keystroke::Key(code) => code,
    };
    let mut event = InputEvent::key();
    let data = InputData::from_key(KeyEvent::new(code, KeyModifiers::NONE));
    let tx = rules.on_key_down(&mut event, &data, tx);
    if event.is_default_prevented() {
        trace!(?key, "handled on key down");
        return tx;
    }

    match key {
        Keystroke::Char(ch) => {
            let text = ch.to_string();
            let mut event = InputEvent::text(text.as_str());
            let tx = rules.on_before_input(&mut event, &InputData::default(), tx);
            if event.is_default_prevented() {
                trace!(?key, "handled before input");
                tx
            } else {
                tx.insert_text(&text)
            }
        }
        Keystroke::Key(KeyCode::Enter) => tx.split_block(),
        Keystroke::Key(KeyCode::Tab) => tx.insert_text("\t"),
        Keystroke::Key(KeyCode::Backspace) => tx.delete_backward(1),
        Keystroke::Key(KeyCode::Delete) => {
            let at = tx.cursor_offset();
            tx.delete_range(at, at + 1)
        }
        Keystroke::Key(KeyCode::Left) => tx.move_by(-1),
        Keystroke::Key(KeyCode::Right) => tx.move_by(1),
        Keystroke::Key(KeyCode::Home) => tx.collapse_to(0),
        Keystroke::Key(KeyCode::End) => tx.collapse_to(usize::MAX),
        Keystroke::Key(_) => tx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_rules;

    #[test]
    fn test_parse_script() {
        assert_eq!(
            parse_script("a{Enter}{{b{ }").unwrap(),
            vec![
                Keystroke::Char('a'),
                Keystroke::Key(KeyCode::Enter),
                Keystroke::Char('{'),
                Keystroke::Char('b'),
                Keystroke::Char(' '),
            ]
        );
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = parse_script("{Hyper}").unwrap_err();
        assert_eq!(err.to_string(), "Unknown key name: {Hyper}");
    }

    #[test]
    fn test_parse_unterminated_key() {
        let err = parse_script("ab{x").unwrap_err();
        assert_eq!(err.to_string(), "Unterminated key name: {x");
        assert!(parse_script("{Enter").is_err());
    }

    #[test]
    fn test_plain_typing_without_rules() {
        let keys = parse_script("helo{Left}l{End}!{Enter}x{Backspace}y").unwrap();
        let doc = type_keys(&RuleSet::new(), Document::default(), &keys);
        assert_eq!(doc.to_string(), "paragraph: hello!\nparagraph: y");
    }

    #[test]
    fn test_delete_and_home() {
        let keys = parse_script("abc{Home}{Delete}").unwrap();
        let doc = type_keys(&RuleSet::new(), Document::default(), &keys);
        assert_eq!(doc.to_string(), "paragraph: bc");
    }

    #[test]
    fn test_rules_fire_while_typing() {
        let rules = parse_rules(
            r#"
            [[rule]]
            trigger = " "
            before = '^(-)$'
            only_in = "paragraph"
            set_kind = "bulleted-list-item"

            [[rule]]
            trigger = "Enter"
            before = '^(```)$'
            set_kind = "code"
            "#,
        )
        .unwrap();
        let keys = parse_script("- milk{Enter}```{Enter}- x").unwrap();
        let doc = type_keys(&rules, Document::default(), &keys);
        // The space is swallowed by the rule, and the list kind carries over on Enter.
        assert_eq!(doc.to_string(), "bulleted-list-item: milk\ncode: - x");
    }
}
