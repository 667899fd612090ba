//! Clipboard integration for copying generated output
//!
//! Uses arboard for cross-platform clipboard access

use arboard::Clipboard;
use vmnotes_core::prelude::*;

/// Copy text to system clipboard
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(()); // Nothing to copy
    }

    let mut clipboard = Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::clipboard(e.to_string()))?;
    debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
