//! Terminal event polling
//!
//! Crossterm events become [`Message`]s here; nothing past this module sees a
//! crossterm type. Key presses map to [`InputKey`], pasted text is replayed as
//! typed characters, and a poll timeout produces a [`Message::Tick`] which
//! flushes the pick-list editor's pending rebuild.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use vmnotes_app::message::Message;
use vmnotes_app::InputKey;
use vmnotes_core::prelude::*;

/// Poll timeout, and so the tick interval (20 per second)
pub const TICK: Duration = Duration::from_millis(50);

/// Wait up to [`TICK`] for input.
///
/// Returns the messages for one terminal event, or a single tick when the
/// wait timed out. Resizes return nothing; the next frame picks up the size.
pub fn poll() -> Result<Vec<Message>> {
    if !event::poll(TICK)? {
        return Ok(vec![Message::Tick]);
    }

    let messages = match event::read()? {
        Event::Key(key) => key_to_input(key)
            .map(Message::Key)
            .into_iter()
            .collect(),
        Event::Paste(text) => paste_to_messages(&text),
        _ => Vec::new(),
    };
    Ok(messages)
}

/// Convert a crossterm key event, ignoring releases and unbound keys
pub fn key_to_input(key: KeyEvent) -> Option<InputKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = match key.code {
        // Ctrl+S and Ctrl+Shift+S are the same shortcut
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::PageDown => InputKey::PageDown,
        KeyCode::F(n) => InputKey::F(n),
        _ => return None,
    };
    Some(input)
}

/// Replay pasted text as typed characters.
///
/// Line breaks become spaces so a paste never submits a field.
fn paste_to_messages(text: &str) -> Vec<Message> {
    let messages: Vec<Message> = text
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .map(|c| Message::Key(InputKey::Char(c)))
        .collect();
    debug!("Pasted {} characters", messages.len());
    messages
}
