//! Preview, clipboard and path prompt handlers

use std::path::Path;

use crate::state::{
    AppState, PreviewContent, PreviewState, PromptPurpose, Screen, StatusLevel, UiMode,
};
use vmnotes_core::render_text;

use super::{notes, vm, UpdateAction, UpdateResult};

/// Show the active screen's output: rendered Markdown or the exported JSON
pub fn handle_open_preview(state: &mut AppState) -> UpdateResult {
    let preview = match state.screen {
        Screen::Notes => {
            notes::regenerate(state);
            PreviewState::new(
                "Notes preview",
                PreviewContent::Document(render_text(&state.notes.output)),
            )
        }
        Screen::Vm => {
            vm::regenerate(state);
            PreviewState::new(
                "VM preview",
                PreviewContent::Document(render_text(&state.vm.output)),
            )
        }
        Screen::Select => PreviewState::new(
            state.select_file_name(),
            PreviewContent::Json(state.editor.output(&state.glyphs).to_string()),
        ),
    };
    state.open_preview(preview);
    UpdateResult::none()
}

pub fn handle_preview_scroll(state: &mut AppState, up: bool) -> UpdateResult {
    if let Some(preview) = state.preview.as_mut() {
        if up {
            preview.scroll_up();
        } else {
            preview.scroll_down();
        }
    }
    UpdateResult::none()
}

/// Copy the active screen's output (always rebuilt first)
pub fn handle_copy(state: &mut AppState) -> UpdateResult {
    let (text, what) = match state.screen {
        Screen::Notes => {
            notes::regenerate(state);
            (state.notes.output.clone(), "Markdown")
        }
        Screen::Vm => {
            vm::regenerate(state);
            (state.vm.output.clone(), "Markdown")
        }
        Screen::Select => (state.editor.output(&state.glyphs).to_string(), "JSON"),
    };
    UpdateResult::action(UpdateAction::CopyToClipboard { text, what })
}

// ─────────────────────────────────────────────────────────
// Path Prompt
// ─────────────────────────────────────────────────────────

pub fn handle_open_prompt(state: &mut AppState, export: bool) -> UpdateResult {
    let purpose = match (state.screen, export) {
        (Screen::Notes, _) => PromptPurpose::LoadNotes,
        (Screen::Vm, false) => PromptPurpose::ImportSuggestions,
        (Screen::Vm, true) => PromptPurpose::ExportSuggestions,
        (Screen::Select, _) => PromptPurpose::ImportSelect,
    };
    state.open_prompt(purpose);
    UpdateResult::none()
}

pub fn handle_prompt_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(prompt) = state.prompt.as_mut() {
        prompt.input.push(c);
    }
    UpdateResult::none()
}

pub fn handle_prompt_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(prompt) = state.prompt.as_mut() {
        prompt.input.pop();
    }
    UpdateResult::none()
}

/// Close the prompt and start the read or write it was opened for
pub fn handle_prompt_submit(state: &mut AppState) -> UpdateResult {
    let Some(prompt) = state.prompt.as_ref() else {
        return UpdateResult::none();
    };
    let input = prompt.input.trim();
    if input.is_empty() {
        state.set_status(StatusLevel::Error, "Enter a file path.");
        return UpdateResult::none();
    }

    let purpose = prompt.purpose;
    let path = state.settings.resolve(&state.project_path, Path::new(input));
    state.prompt = None;
    state.ui_mode = UiMode::Normal;

    let action = match purpose {
        PromptPurpose::LoadNotes => UpdateAction::LoadNotes { path },
        PromptPurpose::ImportSelect => UpdateAction::ImportSelectConfig { path },
        PromptPurpose::ImportSuggestions => UpdateAction::ImportSuggestions { path },
        PromptPurpose::ExportSuggestions => UpdateAction::ExportSuggestions {
            path,
            store: state.suggestions.clone(),
        },
    };
    UpdateResult::action(action)
}
