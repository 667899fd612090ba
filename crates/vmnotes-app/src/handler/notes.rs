//! Notes form handlers

use crate::state::{AppState, StatusLevel};
use vmnotes_core::render_notes_markdown;

use super::{UpdateAction, UpdateResult};

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.notes.input_char(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.notes.backspace();
    UpdateResult::none()
}

/// Line break in the multi-line fields, otherwise move on
pub fn handle_newline(state: &mut AppState) -> UpdateResult {
    if !state.notes.newline() {
        state.notes.focus_next();
    }
    UpdateResult::none()
}

pub fn handle_cycle_choice(state: &mut AppState, forward: bool) -> UpdateResult {
    state.notes.cycle_choice(&state.form_config, forward);
    UpdateResult::none()
}

pub fn handle_set_today(state: &mut AppState) -> UpdateResult {
    let today = chrono::Local::now().date_naive();
    if !state.notes.set_date(today) {
        state.set_status(StatusLevel::Notice, "Focus a date row to fill in today's date.");
    }
    UpdateResult::none()
}

pub fn handle_add_row(state: &mut AppState) -> UpdateResult {
    state.notes.add_row();
    UpdateResult::none()
}

pub fn handle_remove_row(state: &mut AppState) -> UpdateResult {
    state.notes.remove_row();
    UpdateResult::none()
}

/// Regenerate the Markdown document from the current form
pub fn regenerate(state: &mut AppState) {
    let record = state.notes.to_record();
    state.notes.output = render_notes_markdown(&record, &state.form_config.resources);
}

pub fn handle_generate(state: &mut AppState) -> UpdateResult {
    regenerate(state);
    state.set_status(StatusLevel::Success, "Markdown generated.");
    UpdateResult::none()
}

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    UpdateResult::action(UpdateAction::SaveNotes {
        dir: state.settings.notes_dir(&state.project_path),
        record: Box::new(state.notes.to_record()),
    })
}
