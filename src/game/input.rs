use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use super::goalkeeper::DiveDirection;
use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Dive(DiveDirection),
    Shoot,
    Replay,
    Menu,
    Quit,
}

/// Parse a key name from the config file ("Left", "Space", "Q", ...)
pub fn parse_key(name: &str) -> Option<KeyCode> {
    match name.trim().to_ascii_lowercase().as_str() {
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "enter" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

/// Resolved key bindings: key code → action
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyCode, InputAction)>,
}

impl KeyMap {
    pub fn from_config(keys: &KeyBindings) -> Self {
        let groups: [(&Vec<String>, InputAction); 12] = [
            (&keys.move_left, InputAction::MoveLeft),
            (&keys.move_right, InputAction::MoveRight),
            (&keys.move_up, InputAction::MoveUp),
            (&keys.move_down, InputAction::MoveDown),
            (&keys.dive_up_left, InputAction::Dive(DiveDirection::UpLeft)),
            (&keys.dive_up_right, InputAction::Dive(DiveDirection::UpRight)),
            (&keys.dive_down_left, InputAction::Dive(DiveDirection::DownLeft)),
            (&keys.dive_down_right, InputAction::Dive(DiveDirection::DownRight)),
            (&keys.shoot, InputAction::Shoot),
            (&keys.replay, InputAction::Replay),
            (&keys.menu, InputAction::Menu),
            (&keys.quit, InputAction::Quit),
        ];

        let mut bindings = Vec::new();
        for (names, action) in groups {
            for name in names {
                match parse_key(name) {
                    Some(code) => bindings.push((code, action)),
                    None => tracing::warn!(key = %name, ?action, "ignoring unknown key binding"),
                }
            }
        }

        Self { bindings }
    }

    /// Letters match regardless of case
    pub fn action_for(&self, code: KeyCode) -> Option<InputAction> {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| *action)
    }
}

/// Drain pending key presses and map them to actions. Never blocks.
pub fn poll_input(keymap: &KeyMap) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(action) = keymap.action_for(key.code) {
                    actions.push(action);
                }
            }
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("Left"), Some(KeyCode::Left));
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("Q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("Esc"), Some(KeyCode::Esc));
        assert_eq!(parse_key("PageUp"), None);
    }

    #[test]
    fn test_default_keymap() {
        let keymap = KeyMap::from_config(&KeyBindings::default());

        assert_eq!(keymap.action_for(KeyCode::Left), Some(InputAction::MoveLeft));
        assert_eq!(keymap.action_for(KeyCode::Char('a')), Some(InputAction::MoveLeft));
        assert_eq!(keymap.action_for(KeyCode::Char('W')), Some(InputAction::MoveUp));
        assert_eq!(
            keymap.action_for(KeyCode::Char('c')),
            Some(InputAction::Dive(DiveDirection::DownRight))
        );
        assert_eq!(keymap.action_for(KeyCode::Char(' ')), Some(InputAction::Shoot));
        assert_eq!(keymap.action_for(KeyCode::Esc), Some(InputAction::Quit));
        assert_eq!(keymap.action_for(KeyCode::Char('x')), None);
    }
}
