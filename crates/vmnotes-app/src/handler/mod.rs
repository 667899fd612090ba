//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `notes`: Notes form handlers
//! - `vm`: Quick VM form handlers
//! - `editor`: Pick-list editor and icon picker handlers
//! - `output`: Preview, clipboard and path prompt handlers

pub(crate) mod editor;
pub(crate) mod keys;
pub(crate) mod notes;
pub(crate) mod output;
pub(crate) mod update;
pub(crate) mod vm;


use std::path::PathBuf;

use crate::message::Message;
use vmnotes_core::{NotesRecord, SuggestionStore};

// Re-export main entry point
pub use keys::handle_key;
pub use update::{startup_actions, update};

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Load `select.json`, falling back to the example file and built-ins
    LoadSelectConfig { primary: PathBuf, example: PathBuf },

    /// Build the glyph table from the style sheet
    LoadGlyphs { path: PathBuf },

    /// Read the suggestion store
    LoadSuggestions { path: PathBuf },

    /// Persist the suggestion store
    SaveSuggestions {
        path: PathBuf,
        store: SuggestionStore,
    },

    /// Overwrite the select configuration with the exported JSON
    SaveSelectConfig { path: PathBuf, content: String },

    /// Parse a select configuration file to replace the editor's lists
    ImportSelectConfig { path: PathBuf },

    /// Write the notes state to `{title}.json` in `dir`
    SaveNotes {
        dir: PathBuf,
        record: Box<NotesRecord>,
    },

    /// Read a notes state file
    LoadNotes { path: PathBuf },

    /// Replace the suggestion store with an imported document
    ImportSuggestions { path: PathBuf },

    /// Write the suggestion store to a user-chosen file
    ExportSuggestions {
        path: PathBuf,
        store: SuggestionStore,
    },

    /// Put text on the system clipboard
    CopyToClipboard { text: String, what: &'static str },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
