use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer activation of an element
    Click { target: Option<String> },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur {
        target: String,
        new_target: Option<String>,
    },
}

impl Event {
    /// Unmodified key press aimed at `target`.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    /// Translate a raw crossterm event into a key event aimed at the
    /// currently focused element. Releases and non-key events yield `None`.
    pub fn from_crossterm(raw: &CrosstermEvent, focused: Option<&str>) -> Option<Self> {
        let CrosstermEvent::Key(key_event) = raw else {
            return None;
        };
        // Only process key press events (not release/repeat on some terminals)
        if key_event.kind != KeyEventKind::Press {
            return None;
        }
        let Ok(key) = Key::try_from(key_event.code) else {
            log::trace!("Ignoring unsupported key {:?}", key_event.code);
            return None;
        };
        Some(Self::Key {
            target: focused.map(str::to_string),
            key,
            modifiers: key_event.modifiers.into(),
        })
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }
}

/// A crossterm key code with no counterpart in [`Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedKey;

// Conversion from crossterm types
impl TryFrom<crossterm::event::KeyCode> for Key {
    type Error = UnsupportedKey;

    fn try_from(code: crossterm::event::KeyCode) -> Result<Self, Self::Error> {
        use crossterm::event::KeyCode;
        Ok(match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => return Err(UnsupportedKey),
        })
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
