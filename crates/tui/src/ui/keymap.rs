use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Edit-agnostic actions a key press can map to. Section switching and the
/// other single-letter commands stay plain `Input` so forms and search boxes
/// can consume them as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    ToggleSearch,
    Quit,
    Cancel,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => AppAction::Quit,
        KeyCode::Char('f') if ctrl => AppAction::ToggleSearch,
        KeyCode::Char(_) if ctrl => AppAction::None,
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chord(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn control_chords_beat_plain_input() {
        assert_eq!(map_key(chord('c')), AppAction::Quit);
        assert_eq!(map_key(chord('f')), AppAction::ToggleSearch);
        assert_eq!(map_key(chord('x')), AppAction::None);
    }

    #[test]
    fn printable_keys_stay_text() {
        assert_eq!(map_key(plain(KeyCode::Char('q'))), AppAction::Input('q'));
        assert_eq!(map_key(plain(KeyCode::Char('5'))), AppAction::Input('5'));
        assert_eq!(map_key(plain(KeyCode::Esc)), AppAction::Cancel);
        assert_eq!(map_key(plain(KeyCode::Enter)), AppAction::Submit);
    }
}
