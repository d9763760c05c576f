//! Key bindings
//!
//! Input reaches the engine as key strings (`"q"`, `"esc"`, `"ctrl+c"`).
//! A [`KeyMap`] binds navigation actions to one or more of those strings.

use crate::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keys that always close an overlay, regardless of the keymap
pub const DISMISS_KEYS: [&str; 2] = ["q", "esc"];

/// Keys that page an open popup, regardless of the keymap
pub const POPUP_PAGE_KEYS: [(&str, Action); 2] = [("n", Action::NextPage), ("p", Action::PrevPage)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct KeyMap {
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub next_page: Vec<String>,
    pub prev_page: Vec<String>,
    pub scroll_left: Vec<String>,
    pub scroll_right: Vec<String>,
    pub filter: Vec<String>,
}

fn keys(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            move_up: keys(&["up", "k"]),
            move_down: keys(&["down", "j"]),
            next_page: keys(&["n"]),
            prev_page: keys(&["p"]),
            scroll_left: keys(&["left", "h"]),
            scroll_right: keys(&["right", "l"]),
            filter: keys(&["/"]),
        }
    }
}

impl KeyMap {
    /// Use the supplied keymap, or the built-in bindings when there is none
    pub fn or_fallback(keymap: Option<KeyMap>) -> KeyMap {
        keymap.unwrap_or_default()
    }

    /// Resolve a navigation key to its action
    pub fn resolve(&self, key: &str) -> Option<Action> {
        let bindings: [(&[String], Action); 7] = [
            (self.move_up.as_slice(), Action::MoveUp),
            (self.move_down.as_slice(), Action::MoveDown),
            (self.next_page.as_slice(), Action::NextPage),
            (self.prev_page.as_slice(), Action::PrevPage),
            (self.scroll_left.as_slice(), Action::ScrollLeft),
            (self.scroll_right.as_slice(), Action::ScrollRight),
            (self.filter.as_slice(), Action::Filter),
        ];

        bindings
            .into_iter()
            .find(|(bound, _)| bound.iter().any(|k| k == key))
            .map(|(_, action)| action)
    }

    pub fn is_dismiss(key: &str) -> bool {
        DISMISS_KEYS.contains(&key)
    }

    /// Paging action for a key pressed while a popup is open
    pub fn popup_page(key: &str) -> Option<Action> {
        POPUP_PAGE_KEYS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| action.clone())
    }

    /// Hint text for popup pagination: `  n/p: page  q/esc: close`
    pub fn page_hints() -> String {
        let page_keys: Vec<&str> = POPUP_PAGE_KEYS.iter().map(|(key, _)| *key).collect();
        format!(
            "  {}: page  {}: close",
            page_keys.join("/"),
            DISMISS_KEYS.join("/")
        )
    }
}

/// Name a terminal key event the way the keymap spells it
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            format!("ctrl+{}", c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_bindings() {
        let keymap = KeyMap::or_fallback(None);
        assert_eq!(keymap.resolve("j"), Some(Action::MoveDown));
        assert_eq!(keymap.resolve("up"), Some(Action::MoveUp));
        assert_eq!(keymap.resolve("n"), Some(Action::NextPage));
        assert_eq!(keymap.resolve("p"), Some(Action::PrevPage));
        assert_eq!(keymap.resolve("/"), Some(Action::Filter));
        assert_eq!(keymap.resolve("x"), None);
    }

    #[test]
    fn test_custom_bindings_override() {
        let keymap: KeyMap = serde_json::from_str(r#"{"next-page": ["ctrl+f"]}"#).unwrap();
        assert_eq!(keymap.resolve("ctrl+f"), Some(Action::NextPage));
        assert_eq!(keymap.resolve("n"), None);
        assert_eq!(keymap.resolve("k"), Some(Action::MoveUp));
    }

    #[test]
    fn test_dismiss_keys() {
        assert!(KeyMap::is_dismiss("q"));
        assert!(KeyMap::is_dismiss("esc"));
        assert!(!KeyMap::is_dismiss("x"));
    }

    #[test]
    fn test_page_hints() {
        assert_eq!(KeyMap::page_hints(), "  n/p: page  q/esc: close");
    }

    #[test]
    fn test_popup_page_keys_ignore_keymap() {
        assert_eq!(KeyMap::popup_page("n"), Some(Action::NextPage));
        assert_eq!(KeyMap::popup_page("p"), Some(Action::PrevPage));
        assert_eq!(KeyMap::popup_page("j"), None);
        assert_eq!(KeyMap::popup_page("ctrl+f"), None);
    }

    #[test]
    fn test_key_name() {
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(key_name(&plain).as_deref(), Some("q"));
        assert_eq!(key_name(&ctrl).as_deref(), Some("ctrl+c"));
        assert_eq!(key_name(&esc).as_deref(), Some("esc"));
        assert_eq!(key_name(&f1), None);
    }
}
