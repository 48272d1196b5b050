//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextSection,
    PrevSection,
    /// Jump to the section at this index.
    Select(usize),
    ToggleModel,
    OpenImages,
    ToggleLogs,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::NextSection,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::PrevSection,
        KeyCode::Char(c @ '1'..='9') => KeyAction::Select(c as usize - '1' as usize),
        KeyCode::Tab | KeyCode::Char('m') => KeyAction::ToggleModel,
        KeyCode::Char('o') | KeyCode::Enter => KeyAction::OpenImages,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyAction {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(key(KeyCode::Esc), KeyAction::Quit);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn plain_c_does_nothing() {
        assert_eq!(key(KeyCode::Char('c')), KeyAction::None);
    }

    #[test]
    fn section_navigation() {
        assert_eq!(key(KeyCode::Down), KeyAction::NextSection);
        assert_eq!(key(KeyCode::Char('j')), KeyAction::NextSection);
        assert_eq!(key(KeyCode::Up), KeyAction::PrevSection);
        assert_eq!(key(KeyCode::Char('k')), KeyAction::PrevSection);
    }

    #[test]
    fn digit_keys_select() {
        assert_eq!(key(KeyCode::Char('1')), KeyAction::Select(0));
        assert_eq!(key(KeyCode::Char('5')), KeyAction::Select(4));
        assert_eq!(key(KeyCode::Char('9')), KeyAction::Select(8));
        assert_eq!(key(KeyCode::Char('0')), KeyAction::None);
    }

    #[test]
    fn model_and_open_keys() {
        assert_eq!(key(KeyCode::Tab), KeyAction::ToggleModel);
        assert_eq!(key(KeyCode::Char('m')), KeyAction::ToggleModel);
        assert_eq!(key(KeyCode::Char('o')), KeyAction::OpenImages);
        assert_eq!(key(KeyCode::Enter), KeyAction::OpenImages);
    }

    #[test]
    fn log_keys() {
        assert_eq!(key(KeyCode::Char('l')), KeyAction::ToggleLogs);
        assert_eq!(key(KeyCode::PageUp), KeyAction::PageUp);
        assert_eq!(key(KeyCode::PageDown), KeyAction::PageDown);
        assert_eq!(key(KeyCode::Home), KeyAction::Home);
        assert_eq!(key(KeyCode::End), KeyAction::End);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(key(KeyCode::Char('z')), KeyAction::None);
    }
}
