//! Terminal-independent key events.
//!
//! Key handling in `handler::keys` matches on [`InputKey`] rather than on
//! crossterm types, so the whole update loop can be driven from tests and from
//! the headless commands without a terminal.

/// A key press, converted from `crossterm::event::KeyEvent` at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including Shift-modified ones
    Char(char),
    /// Character with Ctrl held (Ctrl+s, Ctrl+n, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    /// Jumps to the next list in the pick-list editor
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    /// Function key (F1-F12)
    F(u8),
}
