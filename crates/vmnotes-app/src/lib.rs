//! vmnotes-app - Application state and orchestration for vmnotes
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the notes form, the quick VM form and the pick-list editor,
//! settings and file stores, and background action execution.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notes_form;
pub mod pick_list;
pub mod process;
pub mod state;
pub mod vm_form;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Screen, UiMode};
