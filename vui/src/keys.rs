//! Key classification.
//!
//! Widgets never inspect raw keys. Every key press is first sorted into a
//! [`KeyAction`], and the state machines match on that.

use vuidom::{Key, Modifiers};

/// Direction of list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// What a key press means to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Up/Down arrow, with or without Alt
    Navigate(Direction),
    /// Enter
    Commit,
    /// Escape
    Dismiss,
    /// Backspace
    Erase,
    /// ASCII letter or digit typed without Ctrl/Alt
    Printable(char),
    /// Tab (`backwards` for Shift+Tab / BackTab)
    Cycle { backwards: bool },
    /// Anything else
    Other,
}

impl KeyAction {
    pub fn classify(key: Key, modifiers: Modifiers) -> Self {
        match key {
            Key::Up => Self::Navigate(Direction::Up),
            Key::Down => Self::Navigate(Direction::Down),
            Key::Enter => Self::Commit,
            Key::Escape => Self::Dismiss,
            Key::Backspace => Self::Erase,
            Key::Tab => Self::Cycle {
                backwards: modifiers.shift,
            },
            Key::BackTab => Self::Cycle { backwards: true },
            Key::Char(c) if is_alphanumeric(c) && !modifiers.ctrl && !modifiers.alt => {
                Self::Printable(c)
            }
            _ => Self::Other,
        }
    }
}

/// Letters and digits in the ASCII range: `0-9`, `A-Z`, `a-z`.
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
