//! Pick-list editor and icon picker handlers

use crate::pick_list::{EditorFocus, ListKind};
use crate::state::{AppState, StatusLevel, UiMode};

use super::{UpdateAction, UpdateResult};

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.editor.input_char(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.editor.backspace();
    UpdateResult::none()
}

/// Append a row to the focused list (icons when a resource field is focused)
pub fn handle_add_row(state: &mut AppState) -> UpdateResult {
    let list = state.editor.focused_list().unwrap_or(ListKind::Icons);
    state.editor.add_row(list);
    UpdateResult::none()
}

pub fn handle_remove_row(state: &mut AppState) -> UpdateResult {
    if let EditorFocus::Row { list, row, .. } = state.editor.focus {
        state.editor.remove_row(list, row);
    }
    UpdateResult::none()
}

pub fn handle_sort_list(state: &mut AppState) -> UpdateResult {
    match state.editor.focused_list() {
        Some(list) => {
            state.editor.sort(list);
            state.set_status(StatusLevel::Info, format!("{} sorted.", list.title()));
        }
        None => state.set_status(StatusLevel::Notice, "Focus a list to sort it."),
    }
    UpdateResult::none()
}

pub fn handle_sort_all(state: &mut AppState) -> UpdateResult {
    state.editor.sort_all();
    state.set_status(StatusLevel::Info, "All lists sorted.");
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Drag
// ─────────────────────────────────────────────────────────

pub fn handle_toggle_drag(state: &mut AppState) -> UpdateResult {
    if state.editor.is_dragging() {
        state.editor.end_drag();
    } else if !state.editor.begin_drag() {
        state.set_status(StatusLevel::Notice, "Rows can only be moved by their handle.");
    }
    UpdateResult::none()
}

pub fn handle_drag_step(state: &mut AppState, up: bool) -> UpdateResult {
    state.editor.drag_step(up);
    UpdateResult::none()
}

pub fn handle_cancel_drag(state: &mut AppState) -> UpdateResult {
    state.editor.cancel_drag();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

pub fn handle_column(state: &mut AppState, forward: bool) -> UpdateResult {
    if forward {
        state.editor.column_next();
    } else {
        state.editor.column_prev();
    }
    UpdateResult::none()
}

pub fn handle_next_section(state: &mut AppState) -> UpdateResult {
    state.editor.focus_next_section();
    UpdateResult::none()
}

/// Save the exported JSON. Blocking errors stay visible in the banner but do
/// not prevent the write.
pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let content = state.editor.output(&state.glyphs).to_string();
    if state.editor.last_report().has_blocking() {
        tracing::warn!("Saving select configuration with validation errors");
    }

    UpdateResult::action(UpdateAction::SaveSelectConfig {
        path: state.settings.select_path(&state.project_path),
        content,
    })
}

// ─────────────────────────────────────────────────────────
// Icon Picker
// ─────────────────────────────────────────────────────────

pub fn handle_open_picker(state: &mut AppState) -> UpdateResult {
    if state.glyphs.is_empty() {
        state.set_status(
            StatusLevel::Error,
            "No icons available. Check the style sheet path in settings.",
        );
        return UpdateResult::none();
    }
    if state.editor.open_picker(&state.glyphs) {
        state.ui_mode = UiMode::IconPicker;
    }
    UpdateResult::none()
}

pub fn handle_picker_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(picker) = state.editor.picker.as_mut() {
        picker.input_char(c, &state.glyphs);
    }
    UpdateResult::none()
}

pub fn handle_picker_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(picker) = state.editor.picker.as_mut() {
        picker.backspace(&state.glyphs);
    }
    UpdateResult::none()
}

pub fn handle_picker_navigate(state: &mut AppState, up: bool) -> UpdateResult {
    if let Some(picker) = state.editor.picker.as_mut() {
        if up {
            picker.navigate_up();
        } else {
            picker.navigate_down();
        }
    }
    UpdateResult::none()
}

pub fn handle_picker_confirm(state: &mut AppState) -> UpdateResult {
    state.editor.confirm_picker();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}
