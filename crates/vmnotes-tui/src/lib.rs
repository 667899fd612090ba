//! vmnotes-tui - Terminal UI for vmnotes
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! TEA loop from vmnotes-app and adds terminal rendering, event polling and
//! the form, pick-list and overlay widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run_with_project;
