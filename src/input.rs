//! Input events delivered to the auto-replace hooks.
//!
//! Key names follow the DOM `KeyboardEvent.key` convention: printable keys
//! are the character itself, others are names such as `"Enter"` or `"Tab"`.

use crossterm::event::{KeyCode, KeyEvent};
use phf::{Map, phf_map};

/// A raw input event: the text about to be inserted, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEvent {
    /// Text the host is about to insert. `None` for pure key presses.
    pub data: Option<String>,
    default_prevented: bool,
}

impl InputEvent {
    /// An event for text about to be inserted.
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            default_prevented: false,
        }
    }

    /// An event with no inserted text, e.g. a key press.
    pub fn key() -> Self {
        Self::default()
    }

    /// Ask the host to skip its default handling of this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Auxiliary data accompanying an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputData {
    /// Name of the pressed key, set only for key-down events.
    pub key: Option<String>,
}

impl InputData {
    pub fn from_key(key: KeyEvent) -> Self {
        Self {
            key: Some(key_name(key.code)),
        }
    }
}

/// Key names that don't correspond to a single printable character.
///
/// Please keep names sorted alphabetically.
const NAME_TO_KEY_CODE: Map<&'static str, KeyCode> = phf_map! {
    "ArrowDown" => KeyCode::Down,
    "ArrowLeft" => KeyCode::Left,
    "ArrowRight" => KeyCode::Right,
    "ArrowUp" => KeyCode::Up,
    "Backspace" => KeyCode::Backspace,
    "Delete" => KeyCode::Delete,
    "End" => KeyCode::End,
    "Enter" => KeyCode::Enter,
    "Escape" => KeyCode::Esc,
    "Home" => KeyCode::Home,
    "Insert" => KeyCode::Insert,
    "PageDown" => KeyCode::PageDown,
    "PageUp" => KeyCode::PageUp,
    "Tab" => KeyCode::Tab,
};

/// Resolve a key name to a key code.
///
/// A single character resolves to itself and `F1`, `F2`, ... to function
/// keys. Named keys are case sensitive; the short arrow names `Left`,
/// `Right`, `Up` and `Down` are accepted too.
pub fn key_code_from_name(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(ch));
    }
    if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok())
        && n > 0
    {
        return Some(KeyCode::F(n));
    }
    match name {
        "Left" | "Right" | "Up" | "Down" => {
            NAME_TO_KEY_CODE.get(format!("Arrow{name}").as_str()).cloned()
        }
        _ => NAME_TO_KEY_CODE.get(name).cloned(),
    }
}

/// Name of a key code, the inverse of [`key_code_from_name`].
pub fn key_name(code: KeyCode) -> String {
    if let KeyCode::Char(ch) = code {
        return ch.to_string();
    }
    if let KeyCode::F(n) = code {
        return format!("F{n}");
    }
    NAME_TO_KEY_CODE
        .entries()
        .find(|(_, c)| **c == code)
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "Unidentified".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_prevent_default() {
        let mut event = InputEvent::text("a");
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_key_event_has_no_data() {
        assert_eq!(InputEvent::key().data, None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(key_name(KeyCode::Enter), "Enter");
        assert_eq!(key_name(KeyCode::Char(' ')), " ");
        assert_eq!(key_name(KeyCode::Left), "ArrowLeft");
        assert_eq!(key_name(KeyCode::F(5)), "F5");
        assert_eq!(key_name(KeyCode::Null), "Unidentified");
    }

    #[test]
    fn test_key_code_from_name() {
        assert_eq!(key_code_from_name("Enter"), Some(KeyCode::Enter));
        assert_eq!(key_code_from_name("x"), Some(KeyCode::Char('x')));
        assert_eq!(key_code_from_name("Left"), Some(KeyCode::Left));
        assert_eq!(key_code_from_name("ArrowUp"), Some(KeyCode::Up));
        assert_eq!(key_code_from_name("enter"), None);
        assert_eq!(key_code_from_name(""), None);
    }

    #[test]
    fn test_function_key_names() {
        assert_eq!(key_code_from_name("F5"), Some(KeyCode::F(5)));
        assert_eq!(key_code_from_name("F12"), Some(KeyCode::F(12)));
        assert_eq!(key_code_from_name("F0"), None);
        assert_eq!(key_code_from_name("Fx"), None);
        for code in [KeyCode::F(5), KeyCode::Enter, KeyCode::Up, KeyCode::Char('q')] {
            assert_eq!(key_code_from_name(&key_name(code)), Some(code));
        }
    }

    #[test]
    fn test_data_from_key() {
        let data = InputData::from_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(data.key.as_deref(), Some("Tab"));
    }
}
