//! # vmnotes-core - Core Domain Types
//!
//! Foundation crate for vmnotes. Provides the form record snapshots, the
//! select configuration document, the suggestion store, the glyph table, the
//! Markdown generator and the preview renderer.
//!
//! This crate has **zero internal dependencies** and performs no I/O beyond
//! reading a style sheet and initialising the log file.
//!
//! ## Public API
//!
//! ### Records (`record`)
//! - [`VmRecord`] - Quick VM description (name, OS, IP, link, lists)
//! - [`NotesRecord`] - Notes panel header plus four ordered sections
//! - [`SectionId`] - Creation, Network, Services, Access
//!
//! ### Select Configuration (`select_config`)
//! - [`SelectConfig`] - Resources plus the three ordered pick-lists
//! - [`Resources`] - Image base URL and size
//!
//! ### Generation (`markdown`, `preview`)
//! - [`render_vm_markdown()`], [`render_notes_markdown()`]
//! - [`render_html()`], [`render_text()`] - Two-state line parser
//!
//! ### Suggestions (`suggestions`)
//! - [`SuggestionStore`] - Append-only, deduplicated autofill values
//!
//! ### Glyphs (`glyphs`)
//! - [`GlyphMap`] - Icon class → glyph lookup from a style sheet
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use vmnotes_core::prelude::*;
//! ```

pub mod error;
pub mod glyphs;
pub mod logging;
pub mod markdown;
pub mod natural;
pub mod prelude;
pub mod preview;
pub mod record;
pub mod select_config;
pub mod suggestions;

pub use error::{Error, Result, ResultExt};
pub use glyphs::{normalize_class, short_name, GlyphMap};
pub use markdown::{render_notes_markdown, render_vm_markdown};
pub use natural::natural_cmp;
pub use preview::{render_html, render_text, Block, TextLine};
pub use record::{
    present, KeyValueRow, NotesHeader, NotesRecord, SectionId, Sections, ServiceRow, VmRecord,
    DEFAULT_NOTES_FILE_STEM,
};
pub use select_config::{
    IconOption, Resources, SelectConfig, SelectDocument, DEFAULT_IMAGE_FQDN, DEFAULT_IMAGE_SIZE,
    ROOT_KEY,
};
pub use suggestions::{AddOutcome, SuggestionCategory, SuggestionStore, DEFAULT_OS_LIST};
