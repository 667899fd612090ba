//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `notes`: Notes form
//! - `vm`: Quick VM form and suggestions
//! - `editor`: Pick-list editor and icon picker
//! - `output`: Preview, clipboard, path prompt

use crate::message::Message;
use crate::state::{AppState, Screen, StatusLevel, UiMode};
use tracing::{debug, info, warn};

use super::{editor, keys::handle_key, notes, output, vm, UpdateAction, UpdateResult};

/// Loads to run once the event loop is up
pub fn startup_actions(state: &AppState) -> Vec<UpdateAction> {
    let base = &state.project_path;
    let settings = &state.settings;
    vec![
        UpdateAction::LoadSelectConfig {
            primary: settings.select_path(base),
            example: settings.example_path(base),
        },
        UpdateAction::LoadGlyphs {
            path: settings.stylesheet_path(base),
        },
        UpdateAction::LoadSuggestions {
            path: settings.suggestions_path(base),
        },
    ]
}

/// Process a message and update state
/// Returns optional follow-up message and/or action
///
/// Without tick rebuilds the editor is flushed after every message, so the
/// banner and row marks never show a stale report.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);
    if !state.settings.editor.rebuild_on_tick {
        state.refresh_editor();
    }
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.settings.editor.rebuild_on_tick {
                state.refresh_editor();
            }
            UpdateResult::none()
        }

        Message::SwitchScreen(screen) => {
            if state.screen != screen {
                debug!("Switching to {:?} screen", screen);
                state.screen = screen;
                state.clear_status();
            }
            UpdateResult::none()
        }

        Message::FocusNext => {
            match state.screen {
                Screen::Notes => state.notes.focus_next(),
                Screen::Vm => state.vm.focus_next(),
                Screen::Select => state.editor.focus_next(),
            }
            UpdateResult::none()
        }

        Message::FocusPrev => {
            match state.screen {
                Screen::Notes => state.notes.focus_prev(),
                Screen::Vm => state.vm.focus_prev(),
                Screen::Select => state.editor.focus_prev(),
            }
            UpdateResult::none()
        }

        Message::CloseOverlay => {
            state.close_overlay();
            UpdateResult::none()
        }

        Message::DismissStatus => {
            state.clear_status();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Notes Form
        // ─────────────────────────────────────────────────────────
        Message::NotesInput(c) => notes::handle_input(state, c),
        Message::NotesBackspace => notes::handle_backspace(state),
        Message::NotesNewline => notes::handle_newline(state),
        Message::NotesCycleChoice { forward } => notes::handle_cycle_choice(state, forward),
        Message::NotesSetToday => notes::handle_set_today(state),
        Message::NotesAddRow => notes::handle_add_row(state),
        Message::NotesRemoveRow => notes::handle_remove_row(state),
        Message::GenerateNotes => notes::handle_generate(state),
        Message::SaveNotes => notes::handle_save(state),

        // ─────────────────────────────────────────────────────────
        // Quick VM Form
        // ─────────────────────────────────────────────────────────
        Message::VmInput(c) => vm::handle_input(state, c),
        Message::VmBackspace => vm::handle_backspace(state),
        Message::VmCycleSuggestion => vm::handle_cycle_suggestion(state),
        Message::VmAddRow => vm::handle_add_row(state),
        Message::VmRemoveRow => vm::handle_remove_row(state),
        Message::GenerateVm => vm::handle_generate(state),
        Message::AddOs => vm::handle_add_os(state),

        // ─────────────────────────────────────────────────────────
        // Pick-List Editor
        // ─────────────────────────────────────────────────────────
        Message::EditorInput(c) => editor::handle_input(state, c),
        Message::EditorBackspace => editor::handle_backspace(state),
        Message::EditorAddRow => editor::handle_add_row(state),
        Message::EditorRemoveRow => editor::handle_remove_row(state),
        Message::EditorSortList => editor::handle_sort_list(state),
        Message::EditorSortAll => editor::handle_sort_all(state),
        Message::EditorToggleDrag => editor::handle_toggle_drag(state),
        Message::EditorDragStep { up } => editor::handle_drag_step(state, up),
        Message::EditorCancelDrag => editor::handle_cancel_drag(state),
        Message::EditorColumn { forward } => editor::handle_column(state, forward),
        Message::EditorNextSection => editor::handle_next_section(state),
        Message::SaveSelectConfig => editor::handle_save(state),

        Message::OpenIconPicker => editor::handle_open_picker(state),
        Message::PickerInput(c) => editor::handle_picker_input(state, c),
        Message::PickerBackspace => editor::handle_picker_backspace(state),
        Message::PickerUp => editor::handle_picker_navigate(state, true),
        Message::PickerDown => editor::handle_picker_navigate(state, false),
        Message::PickerConfirm => editor::handle_picker_confirm(state),

        // ─────────────────────────────────────────────────────────
        // Output and Prompt
        // ─────────────────────────────────────────────────────────
        Message::OpenPreview => output::handle_open_preview(state),
        Message::PreviewScroll { up } => output::handle_preview_scroll(state, up),
        Message::CopyOutput => output::handle_copy(state),
        Message::OpenPathPrompt { export } => output::handle_open_prompt(state, export),
        Message::PromptInput(c) => output::handle_prompt_input(state, c),
        Message::PromptBackspace => output::handle_prompt_backspace(state),
        Message::PromptSubmit => output::handle_prompt_submit(state),

        // ─────────────────────────────────────────────────────────
        // Background Task Results
        // ─────────────────────────────────────────────────────────
        Message::SelectConfigLoaded { loaded } => {
            info!("Select configuration ready ({:?})", loaded.source);
            state.apply_loaded_select(*loaded);
            state.editor.refresh(&state.glyphs);
            UpdateResult::none()
        }

        Message::GlyphsLoaded { glyphs } => {
            let count = glyphs.len();
            state.glyphs = glyphs;
            // Icon display text depends on the glyphs
            state.editor.mark_dirty();
            state.set_status(
                StatusLevel::Info,
                format!("Loaded {count} Font Awesome icons."),
            );
            UpdateResult::none()
        }

        Message::GlyphsFailed { error } => {
            warn!("Glyph table unavailable: {}", error);
            state.set_status(
                StatusLevel::Error,
                format!(
                    "Could not parse {}. Check that the file exists and is accessible.",
                    state.settings.files.stylesheet.display()
                ),
            );
            UpdateResult::none()
        }

        Message::SuggestionsLoaded { store } => {
            state.suggestions = store;
            UpdateResult::none()
        }

        Message::SelectImported { config } => {
            state.editor.load_config(&config);
            state.editor.refresh(&state.glyphs);
            // Entered notes stay; only the offered choices change
            state.form_config = *config;
            state.set_status(StatusLevel::Success, "Configuration imported.");
            UpdateResult::none()
        }

        Message::NotesLoaded { record, path } => {
            state.notes.load_record(&record);
            state.set_status(
                StatusLevel::Success,
                format!("Loaded {}.", path.display()),
            );
            UpdateResult::none()
        }

        Message::SuggestionsImported { store } => {
            state.suggestions = store;
            state.set_status(StatusLevel::Success, "Suggestions imported.");
            UpdateResult::action(UpdateAction::SaveSuggestions {
                path: state.settings.suggestions_path(&state.project_path),
                store: state.suggestions.clone(),
            })
        }

        Message::ActionSucceeded { message } => {
            state.set_status(StatusLevel::Success, message);
            UpdateResult::none()
        }

        Message::ActionFailed { message } => {
            state.set_status(StatusLevel::Error, message);
            if state.ui_mode == UiMode::Prompt {
                state.close_overlay();
            }
            UpdateResult::none()
        }
    }
}
