//! Keyboard and mouse input for the detail screen.
//!
//! Raw crossterm events are resolved to a [`ScreenCommand`] through a
//! [`KeybindingConfig`]; the `App` decides what each command does.

mod keybindings;

pub use keybindings::{KeyCombo, KeybindingConfig};

use crossterm::event::{MouseEvent, MouseEventKind};

/// Commands the detail screen understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenCommand {
    Back,
    ToggleFavorite,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    Quit,
}

/// Mouse wheel events map to scroll commands; clicks are resolved through
/// hit areas instead.
pub fn mouse_command(event: &MouseEvent) -> Option<ScreenCommand> {
    match event.kind {
        MouseEventKind::ScrollUp => Some(ScreenCommand::ScrollUp),
        MouseEventKind::ScrollDown => Some(ScreenCommand::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_wheel_scrolls() {
        assert_eq!(
            mouse_command(&mouse(MouseEventKind::ScrollUp)),
            Some(ScreenCommand::ScrollUp)
        );
        assert_eq!(
            mouse_command(&mouse(MouseEventKind::ScrollDown)),
            Some(ScreenCommand::ScrollDown)
        );
    }

    #[test]
    fn test_click_is_not_a_command() {
        assert_eq!(
            mouse_command(&mouse(MouseEventKind::Down(MouseButton::Left))),
            None
        );
    }
}
