//! Custom widgets for the TUI

mod banner;
mod header;
mod icon_picker;
pub mod modal_overlay;
mod notes_form;
mod output_pane;
mod preview;
mod prompt;
mod select_editor;
mod status_bar;
mod vm_form;

pub use banner::Banner;
pub use header::MainHeader;
pub use icon_picker::IconPicker;
pub use notes_form::NotesFormView;
pub use output_pane::OutputPane;
pub use preview::PreviewView;
pub use prompt::PathPromptView;
pub use select_editor::SelectEditorView;
pub use status_bar::StatusBar;
pub use vm_form::VmFormView;

use unicode_width::UnicodeWidthStr;

/// Cursor mark appended to the field being typed into
pub(crate) const CURSOR: &str = "▏";

/// Pad `text` with spaces to `width` display columns
pub(crate) fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - used))
}

/// First line to draw so that `focused` stays inside a `height`-line view
pub(crate) fn scroll_offset(focused: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    focused.saturating_sub(height - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
        // Wide characters count as two columns
        assert_eq!(pad("日", 4), "日  ");
    }

    #[test]
    fn test_scroll_offset_keeps_focus_visible() {
        assert_eq!(scroll_offset(3, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
        assert_eq!(scroll_offset(5, 0), 0);
    }
}
