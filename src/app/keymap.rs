use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Single-character key -> action name ("quit", "next", "prev", "reload").
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    // Active while an error alert is on screen
    pub alert_mode: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut alert_mode = HashMap::new();

        global.insert(key('q'), Action::Quit);
        global.insert(key(KeyCode::Down), Action::SelectNext);
        global.insert(key(KeyCode::Up), Action::SelectPrev);
        global.insert(key(KeyCode::Enter), Action::Reload);
        global.insert(key('r'), Action::Reload);
        if config.profile == "vim" {
            global.insert(key('j'), Action::SelectNext);
            global.insert(key('k'), Action::SelectPrev);
        }

        if let Some(custom) = &config.custom {
            for (k, name) in custom {
                let mut chars = k.chars();
                match (chars.next(), chars.next(), action_by_name(name)) {
                    (Some(c), None, Some(action)) => {
                        global.insert(key(c), action);
                    }
                    _ => tracing::warn!(key = %k, action = %name, "ignoring invalid key binding"),
                }
            }
        }

        alert_mode.insert(key(KeyCode::Esc), Action::DismissAlert);
        alert_mode.insert(key(KeyCode::Enter), Action::DismissAlert);
        alert_mode.insert(key('q'), Action::Quit);

        Self { global, alert_mode }
    }

    pub fn get_action(&self, event: KeyEvent, alert_open: bool) -> Option<Action> {
        let map = if alert_open {
            &self.alert_mode
        } else {
            &self.global
        };
        // Terminals report shifted letters with SHIFT set; bindings are stored without it.
        map.get(&event)
            .or_else(|| {
                (event.modifiers == KeyModifiers::SHIFT)
                    .then(|| KeyEvent::new(event.code, KeyModifiers::empty()))
                    .and_then(|plain| map.get(&plain))
            })
            .cloned()
    }
}

fn action_by_name(name: &str) -> Option<Action> {
    match name {
        "quit" => Some(Action::Quit),
        "next" => Some(Action::SelectNext),
        "prev" => Some(Action::SelectPrev),
        "reload" => Some(Action::Reload),
        _ => None,
    }
}

// crossterm 0.28 has no `From<char> for KeyCode`, so `key` takes this local conversion trait.
trait IntoKeyCode {
    fn into_key_code(self) -> KeyCode;
}

impl IntoKeyCode for KeyCode {
    fn into_key_code(self) -> KeyCode {
        self
    }
}

impl IntoKeyCode for char {
    fn into_key_code(self) -> KeyCode {
        KeyCode::Char(self)
    }
}

fn key(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(key('j'), false), Some(Action::SelectNext));
        assert_eq!(map.get_action(key(KeyCode::Up), false), Some(Action::SelectPrev));
        assert_eq!(map.get_action(key(KeyCode::Enter), false), Some(Action::Reload));
        assert_eq!(map.get_action(key('x'), false), None);
    }

    #[test]
    fn test_alert_mode_overrides_enter() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(key(KeyCode::Enter), true), Some(Action::DismissAlert));
        assert_eq!(map.get_action(key(KeyCode::Esc), true), Some(Action::DismissAlert));
        assert_eq!(map.get_action(key('j'), true), None);
    }

    #[test]
    fn test_custom_bindings() {
        let config = KeyConfig {
            profile: "arrows".to_string(),
            custom: Some(HashMap::from([
                ("n".to_string(), "next".to_string()),
                ("xx".to_string(), "quit".to_string()),
                ("z".to_string(), "explode".to_string()),
            ])),
        };
        let map = KeyMap::from_config(&config);
        assert_eq!(map.get_action(key('j'), false), None);
        assert_eq!(map.get_action(key('n'), false), Some(Action::SelectNext));
        assert_eq!(map.get_action(key('z'), false), None);
    }
}
