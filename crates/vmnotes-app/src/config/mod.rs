//! Configuration and file persistence for vmnotes
//!
//! Supports:
//! - `.vmnotes/config.toml` - Application settings
//! - `select.json` - Pick-list configuration, with example and built-in fallbacks
//! - `suggestions.json` - Remembered field values
//! - `{title}.json` - Saved notes state

pub mod notes_store;
pub mod select_store;
pub mod settings;
pub mod suggestion_store;
pub mod types;

pub use notes_store::{load_notes, save_notes};
pub use select_store::{load_select_config, read_select_config, save_select_config, LoadedSelect};
pub use settings::{init_config_dir, load_settings, save_settings};
pub use suggestion_store::{
    export_suggestions, import_suggestions, load_suggestions, save_suggestions,
};
pub use types::*;
