//! Key and mouse mapping tests.

use bookpedia::input::{mouse_command, KeyCombo, KeybindingConfig, ScreenCommand};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_back_keys() {
    let config = KeybindingConfig::default();
    for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Left, KeyCode::Char('b')] {
        assert_eq!(config.resolve(&press(code)), Some(ScreenCommand::Back));
    }
}

#[test]
fn test_favorite_keys() {
    let config = KeybindingConfig::default();
    assert_eq!(
        config.resolve(&press(KeyCode::Char('f'))),
        Some(ScreenCommand::ToggleFavorite)
    );
    assert_eq!(
        config.resolve(&press(KeyCode::Enter)),
        Some(ScreenCommand::ToggleFavorite)
    );
}

#[test]
fn test_ctrl_c_quits_but_plain_c_does_nothing() {
    let config = KeybindingConfig::default();
    assert_eq!(
        config.resolve(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(ScreenCommand::Quit)
    );
    assert_eq!(config.resolve(&press(KeyCode::Char('c'))), None);
}

#[test]
fn test_custom_binding_overrides_default() {
    let mut config = KeybindingConfig::default();
    config.bind(KeyCombo::plain(KeyCode::Char('q')), ScreenCommand::Back);
    assert_eq!(
        config.resolve(&press(KeyCode::Char('q'))),
        Some(ScreenCommand::Back)
    );
}

#[test]
fn test_wheel_scrolls() {
    assert_eq!(
        mouse_command(&mouse(MouseEventKind::ScrollDown)),
        Some(ScreenCommand::ScrollDown)
    );
    assert_eq!(
        mouse_command(&mouse(MouseEventKind::ScrollUp)),
        Some(ScreenCommand::ScrollUp)
    );
    assert_eq!(
        mouse_command(&mouse(MouseEventKind::Down(MouseButton::Left))),
        None
    );
}
