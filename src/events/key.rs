use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal key presses, flattened into the handful of shapes the
/// components care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Backspace,
    Enter,
    Esc,
    Tab,
    Up,
    Down,
    /// No key; emitted on ticks so components can refresh
    Null,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        // Windows reports both press and release
        if event.kind == KeyEventKind::Release {
            return Key::Null;
        }

        match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Ctrl(c),
            KeyCode::Char(_) if event.modifiers.contains(KeyModifiers::ALT) => Key::Null,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => Key::Null,
        }
    }
}
