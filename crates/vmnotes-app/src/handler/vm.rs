//! Quick VM form handlers

use crate::state::{AppState, StatusLevel};
use vmnotes_core::{render_vm_markdown, AddOutcome, SuggestionCategory};

use super::{UpdateAction, UpdateResult};

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.vm.input_char(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.vm.backspace();
    UpdateResult::none()
}

pub fn handle_cycle_suggestion(state: &mut AppState) -> UpdateResult {
    state.vm.cycle_suggestion(&state.suggestions);
    UpdateResult::none()
}

pub fn handle_add_row(state: &mut AppState) -> UpdateResult {
    state.vm.add_row();
    UpdateResult::none()
}

pub fn handle_remove_row(state: &mut AppState) -> UpdateResult {
    state.vm.remove_row();
    UpdateResult::none()
}

/// Regenerate the Markdown document from the current form
pub fn regenerate(state: &mut AppState) {
    state.vm.output = render_vm_markdown(&state.vm.to_record());
}

/// Generate the document and remember every non-empty value
pub fn handle_generate(state: &mut AppState) -> UpdateResult {
    regenerate(state);
    let added = state.suggestions.record(&state.vm.to_record());
    tracing::debug!("Remembered {} new suggestion(s)", added);

    state.set_status(StatusLevel::Success, "Markdown generated.");
    if added == 0 {
        return UpdateResult::none();
    }
    save_suggestions(state)
}

pub fn handle_add_os(state: &mut AppState) -> UpdateResult {
    let value = state.vm.new_os.trim().to_string();
    match state.suggestions.add(SuggestionCategory::OsList, &value) {
        AddOutcome::Added => {
            state.vm.new_os.clear();
            state.set_status(StatusLevel::Success, "OS added.");
            save_suggestions(state)
        }
        AddOutcome::AlreadyExists => {
            state.set_status(StatusLevel::Notice, "OS already exists.");
            UpdateResult::none()
        }
        AddOutcome::Blank => {
            state.set_status(StatusLevel::Error, "Enter an OS name first.");
            UpdateResult::none()
        }
    }
}

fn save_suggestions(state: &AppState) -> UpdateResult {
    UpdateResult::action(UpdateAction::SaveSuggestions {
        path: state.settings.suggestions_path(&state.project_path),
        store: state.suggestions.clone(),
    })
}
