//! vmnotes library
//!
//! Terminal form tool that turns VM and container details into Markdown notes.

pub mod headless;

// Re-export main entry points
pub use vmnotes_app::Screen;
pub use vmnotes_tui::run_with_project;
