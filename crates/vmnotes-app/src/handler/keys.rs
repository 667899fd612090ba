//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::pick_list::{EditorFocus, ListKind, RowColumn};
use crate::state::{AppState, Screen, UiMode};
use crate::vm_form::VmField;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::IconPicker => handle_key_icon_picker(key),
        UiMode::Preview => handle_key_preview(key),
        UiMode::Prompt => handle_key_prompt(key),
    }
}

/// Keys shared by every screen, then the screen's own bindings
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('q') => return Some(Message::Quit),
        InputKey::F(n) => {
            return Screen::ALL
                .into_iter()
                .find(|screen| screen.function_key() == n)
                .map(Message::SwitchScreen);
        }
        InputKey::CharCtrl('p') => return Some(Message::OpenPreview),
        InputKey::CharCtrl('y') => return Some(Message::CopyOutput),
        _ => {}
    }

    match state.screen {
        Screen::Notes => handle_key_notes(key),
        Screen::Vm => handle_key_vm(state, key),
        Screen::Select => handle_key_select(state, key),
    }
}

fn handle_key_notes(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),
        InputKey::Left => Some(Message::NotesCycleChoice { forward: false }),
        InputKey::Right => Some(Message::NotesCycleChoice { forward: true }),
        InputKey::Enter => Some(Message::NotesNewline),
        InputKey::Backspace => Some(Message::NotesBackspace),
        InputKey::Esc => Some(Message::DismissStatus),

        InputKey::CharCtrl('g') => Some(Message::GenerateNotes),
        InputKey::CharCtrl('s') => Some(Message::SaveNotes),
        InputKey::CharCtrl('o') => Some(Message::OpenPathPrompt { export: false }),
        InputKey::CharCtrl('t') => Some(Message::NotesSetToday),
        InputKey::CharCtrl('n') => Some(Message::NotesAddRow),
        InputKey::CharCtrl('d') => Some(Message::NotesRemoveRow),

        InputKey::Char(c) => Some(Message::NotesInput(c)),
        _ => None,
    }
}

fn handle_key_vm(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),
        InputKey::Enter if state.vm.focus == VmField::NewOs => Some(Message::AddOs),
        InputKey::Enter => Some(Message::FocusNext),
        InputKey::Backspace => Some(Message::VmBackspace),
        InputKey::Esc => Some(Message::DismissStatus),

        InputKey::CharCtrl('f') | InputKey::Right => Some(Message::VmCycleSuggestion),
        InputKey::CharCtrl('g') => Some(Message::GenerateVm),
        InputKey::CharCtrl('n') => Some(Message::VmAddRow),
        InputKey::CharCtrl('d') => Some(Message::VmRemoveRow),
        InputKey::CharCtrl('o') => Some(Message::OpenPathPrompt { export: false }),
        InputKey::CharCtrl('e') => Some(Message::OpenPathPrompt { export: true }),

        InputKey::Char(c) => Some(Message::VmInput(c)),
        _ => None,
    }
}

fn handle_key_select(state: &AppState, key: InputKey) -> Option<Message> {
    // A grabbed row only moves, drops or goes back
    if state.editor.is_dragging() {
        return match key {
            InputKey::Up => Some(Message::EditorDragStep { up: true }),
            InputKey::Down => Some(Message::EditorDragStep { up: false }),
            InputKey::Char(' ') | InputKey::Enter => Some(Message::EditorToggleDrag),
            InputKey::Esc => Some(Message::EditorCancelDrag),
            _ => None,
        };
    }

    let on_handle = matches!(
        state.editor.focus,
        EditorFocus::Row {
            column: RowColumn::Handle,
            ..
        }
    );
    let on_icon_row = matches!(
        state.editor.focus,
        EditorFocus::Row {
            list: ListKind::Icons,
            column: RowColumn::Value,
            ..
        }
    );

    match key {
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),
        InputKey::Left => Some(Message::EditorColumn { forward: false }),
        InputKey::Right => Some(Message::EditorColumn { forward: true }),
        InputKey::PageDown => Some(Message::EditorNextSection),
        InputKey::Enter if on_icon_row => Some(Message::OpenIconPicker),
        InputKey::Enter => Some(Message::FocusNext),
        InputKey::Char(' ') if on_handle => Some(Message::EditorToggleDrag),
        InputKey::Backspace => Some(Message::EditorBackspace),
        InputKey::Esc => Some(Message::DismissStatus),

        InputKey::CharCtrl('n') => Some(Message::EditorAddRow),
        InputKey::CharCtrl('d') => Some(Message::EditorRemoveRow),
        InputKey::CharCtrl('t') => Some(Message::EditorSortList),
        InputKey::CharCtrl('a') => Some(Message::EditorSortAll),
        InputKey::CharCtrl('s') => Some(Message::SaveSelectConfig),
        InputKey::CharCtrl('o') => Some(Message::OpenPathPrompt { export: false }),

        InputKey::Char(c) => Some(Message::EditorInput(c)),
        _ => None,
    }
}

fn handle_key_icon_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseOverlay),
        InputKey::Enter => Some(Message::PickerConfirm),
        InputKey::Up | InputKey::BackTab => Some(Message::PickerUp),
        InputKey::Down | InputKey::Tab => Some(Message::PickerDown),
        InputKey::Backspace => Some(Message::PickerBackspace),
        InputKey::Char(c) => Some(Message::PickerInput(c)),
        _ => None,
    }
}

fn handle_key_preview(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseOverlay),
        InputKey::Up | InputKey::Char('k') => Some(Message::PreviewScroll { up: true }),
        InputKey::Down | InputKey::Char('j') => Some(Message::PreviewScroll { up: false }),
        InputKey::CharCtrl('y') => Some(Message::CopyOutput),
        _ => None,
    }
}

fn handle_key_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseOverlay),
        InputKey::Enter => Some(Message::PromptSubmit),
        InputKey::Backspace => Some(Message::PromptBackspace),
        InputKey::Char(c) => Some(Message::PromptInput(c)),
        _ => None,
    }
}
