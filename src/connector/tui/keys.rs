use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::application::Message;

/// What a key press means to the interactive view.
#[derive(Debug)]
pub enum KeyAction {
    Dispatch(Message),
    Quit,
    Ignore,
}

pub fn key_action(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('t') if ctrl => KeyAction::Dispatch(Message::ToggleTheme),
        KeyCode::Char('u') if ctrl => KeyAction::Dispatch(Message::ClearInput),
        KeyCode::Char(_) if ctrl || alt => KeyAction::Ignore,
        KeyCode::Char(c) => KeyAction::Dispatch(Message::Insert(c)),
        KeyCode::Backspace => KeyAction::Dispatch(Message::Backspace),
        KeyCode::Enter => KeyAction::Dispatch(Message::Submit),
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        key_action(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_enter_submits() {
        assert!(matches!(
            press(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Dispatch(Message::Submit)
        ));
    }

    #[test]
    fn test_typing_inserts_including_shifted_chars() {
        assert!(matches!(
            press(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Dispatch(Message::Insert('q'))
        ));
        assert!(matches!(
            press(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            KeyAction::Dispatch(Message::Insert('Q'))
        ));
    }

    #[test]
    fn test_control_chords() {
        assert!(matches!(
            press(KeyCode::Char('t'), KeyModifiers::CONTROL),
            KeyAction::Dispatch(Message::ToggleTheme)
        ));
        assert!(matches!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit
        ));
        assert!(matches!(
            press(KeyCode::Char('x'), KeyModifiers::CONTROL),
            KeyAction::Ignore
        ));
        assert!(matches!(press(KeyCode::Esc, KeyModifiers::NONE), KeyAction::Quit));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(key_action(key), KeyAction::Ignore));
    }
}
