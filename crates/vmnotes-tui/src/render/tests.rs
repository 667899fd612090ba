//! Full-screen rendering tests

use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use vmnotes_app::handler::update;
use vmnotes_app::message::Message;
use vmnotes_app::state::{PreviewContent, PreviewState, PromptPurpose, StatusLevel};
use vmnotes_core::GlyphMap;

#[test]
fn test_notes_screen_renders() {
    let state = create_test_state();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("F1 Notes"));
    assert!(term.buffer_contains("Title"));
    assert!(term.buffer_contains("^G generate"));
}

#[test]
fn test_wide_notes_screen_shows_markdown_pane() {
    let mut state = create_test_state();
    state.notes.title = "web01".into();
    let _ = update(&mut state, Message::GenerateNotes);

    let mut term = TestTerminal::with_size(140, 40);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Markdown"));
    assert!(term.buffer_contains("Markdown generated."));
}

#[test]
fn test_vm_screen_renders() {
    let mut state = create_test_state();
    state.screen = Screen::Vm;
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Quick VM"));
    assert!(term.buffer_contains("VM name"));
}

#[test]
fn test_select_screen_shows_banner() {
    let mut state = create_test_state();
    state.screen = Screen::Select;
    state.editor.image_fqdn.clear();
    state.editor.refresh(&GlyphMap::default());

    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Validation errors"));
    assert!(term.buffer_contains("image fqdn"));
}

#[test]
fn test_status_message_rendered_on_last_line() {
    let mut state = create_test_state();
    state.set_status(StatusLevel::Success, "Saved web01.json.");

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.line_contains(23, "Saved web01.json."));
}

#[test]
fn test_preview_overlay_rendered() {
    let mut state = create_test_state();
    state.open_preview(PreviewState::new(
        "select.json",
        PreviewContent::Json("{\n  \"proxmox-notes\": {}\n}".into()),
    ));

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("select.json"));
    assert!(term.buffer_contains("\"proxmox-notes\""));
    assert!(term.buffer_contains("Esc close"));
}

#[test]
fn test_prompt_overlay_rendered() {
    let mut state = create_test_state();
    state.open_prompt(PromptPurpose::LoadNotes);

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Load notes file"));
    assert!(term.buffer_contains("Enter confirm"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = create_test_state();
    let mut term = TestTerminal::compact();
    for screen in Screen::ALL {
        state.screen = screen;
        term.draw_with(|frame| view(frame, &state));
    }
}
