//! Default keybindings for the detail screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::ScreenCommand;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(event: &KeyEvent) -> Self {
        // Shifted characters arrive with SHIFT set; the character already
        // carries the case, so match on it alone.
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self::new(event.code, modifiers)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, ScreenCommand>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            bindings: HashMap::new(),
        };

        for code in [
            KeyCode::Esc,
            KeyCode::Backspace,
            KeyCode::Left,
            KeyCode::Char('b'),
        ] {
            config.bind(KeyCombo::plain(code), ScreenCommand::Back);
        }
        config.bind(KeyCombo::plain(KeyCode::Char('f')), ScreenCommand::ToggleFavorite);
        config.bind(KeyCombo::plain(KeyCode::Enter), ScreenCommand::ToggleFavorite);

        config.bind(KeyCombo::plain(KeyCode::Up), ScreenCommand::ScrollUp);
        config.bind(KeyCombo::plain(KeyCode::Char('k')), ScreenCommand::ScrollUp);
        config.bind(KeyCombo::plain(KeyCode::Down), ScreenCommand::ScrollDown);
        config.bind(KeyCombo::plain(KeyCode::Char('j')), ScreenCommand::ScrollDown);
        config.bind(KeyCombo::plain(KeyCode::PageUp), ScreenCommand::PageUp);
        config.bind(KeyCombo::plain(KeyCode::PageDown), ScreenCommand::PageDown);
        config.bind(KeyCombo::plain(KeyCode::Home), ScreenCommand::ScrollToTop);
        config.bind(KeyCombo::plain(KeyCode::End), ScreenCommand::ScrollToBottom);

        config.bind(KeyCombo::plain(KeyCode::Char('q')), ScreenCommand::Quit);
        config.bind(KeyCombo::ctrl(KeyCode::Char('c')), ScreenCommand::Quit);

        config
    }

    pub fn bind(&mut self, combo: KeyCombo, command: ScreenCommand) {
        self.bindings.insert(combo, command);
    }

    pub fn resolve(&self, event: &KeyEvent) -> Option<ScreenCommand> {
        self.bindings.get(&KeyCombo::from(event)).copied()
    }
}
