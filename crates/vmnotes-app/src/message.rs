//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use crate::config::LoadedSelect;
use crate::input_key::InputKey;
use crate::state::Screen;
use vmnotes_core::{GlyphMap, NotesRecord, SelectConfig, SuggestionStore};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately
    Quit,

    /// Show another screen
    SwitchScreen(Screen),

    /// Move focus on the active screen
    FocusNext,
    FocusPrev,

    /// Close the topmost overlay (preview, prompt, icon picker)
    CloseOverlay,

    /// Dismiss the status line
    DismissStatus,

    // ─────────────────────────────────────────────────────────
    // Notes Form Messages
    // ─────────────────────────────────────────────────────────
    NotesInput(char),
    NotesBackspace,
    NotesNewline,
    NotesCycleChoice { forward: bool },
    /// Fill the focused date row with today's date
    NotesSetToday,
    NotesAddRow,
    NotesRemoveRow,
    GenerateNotes,
    SaveNotes,

    // ─────────────────────────────────────────────────────────
    // Quick VM Form Messages
    // ─────────────────────────────────────────────────────────
    VmInput(char),
    VmBackspace,
    VmCycleSuggestion,
    VmAddRow,
    VmRemoveRow,
    /// Generate the document and remember the entered values
    GenerateVm,
    /// Add the "Add OS" input to the stored OS list
    AddOs,

    // ─────────────────────────────────────────────────────────
    // Pick-List Editor Messages
    // ─────────────────────────────────────────────────────────
    EditorInput(char),
    EditorBackspace,
    EditorAddRow,
    EditorRemoveRow,
    EditorSortList,
    EditorSortAll,
    /// Grab the focused row by its handle, or drop the grabbed row
    EditorToggleDrag,
    EditorDragStep { up: bool },
    EditorCancelDrag,
    EditorColumn { forward: bool },
    EditorNextSection,
    SaveSelectConfig,

    // ─────────────────────────────────────────────────────────
    // Icon Picker Messages
    // ─────────────────────────────────────────────────────────
    OpenIconPicker,
    PickerInput(char),
    PickerBackspace,
    PickerUp,
    PickerDown,
    PickerConfirm,

    // ─────────────────────────────────────────────────────────
    // Output Messages (act on the active screen)
    // ─────────────────────────────────────────────────────────
    OpenPreview,
    PreviewScroll { up: bool },
    CopyOutput,

    // ─────────────────────────────────────────────────────────
    // Path Prompt Messages
    // ─────────────────────────────────────────────────────────
    /// Ask for a path; what it is used for depends on the active screen
    OpenPathPrompt { export: bool },
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,

    // ─────────────────────────────────────────────────────────
    // Background Task Results
    // ─────────────────────────────────────────────────────────
    SelectConfigLoaded { loaded: Box<LoadedSelect> },
    GlyphsLoaded { glyphs: GlyphMap },
    GlyphsFailed { error: String },
    SuggestionsLoaded { store: SuggestionStore },
    SelectImported { config: Box<SelectConfig> },
    NotesLoaded { record: Box<NotesRecord>, path: PathBuf },
    SuggestionsImported { store: SuggestionStore },
    /// A background write or copy finished
    ActionSucceeded { message: String },
    /// A background task failed; shown as a one-line alert
    ActionFailed { message: String },
}
