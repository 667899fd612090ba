//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use vmnotes_app::state::StatusLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Field styles ---

/// Label column of a form row
pub fn field_label(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        text_secondary()
    }
}

/// Value cell of a form row; the focused cell gets an input background
pub fn field_value(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::INPUT_BG)
    } else {
        text_primary()
    }
}

/// Value that fails validation
pub fn field_invalid(focused: bool) -> Style {
    let style = Style::default()
        .fg(palette::STATUS_RED)
        .bg(palette::ROW_ERROR_BG);
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// "Black on Cyan" - focused list entry
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Row currently being moved
pub fn dragging() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::DRAG_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status mapping ---

/// Status indicator for the status line and the pick-list banner.
///
/// Returns `(icon_char, Style)` for the given level.
pub fn status_indicator(level: StatusLevel) -> (&'static str, Style) {
    match level {
        StatusLevel::Info => ("ℹ", Style::default().fg(palette::STATUS_BLUE)),
        StatusLevel::Notice => ("!", Style::default().fg(palette::STATUS_YELLOW)),
        StatusLevel::Success => (
            "✓",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        StatusLevel::Error => (
            "✗",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_focused_value_has_input_background() {
        assert_eq!(field_value(true).bg, Some(palette::INPUT_BG));
        assert_eq!(field_value(false).bg, None);
    }

    #[test]
    fn test_invalid_field_is_red() {
        assert_eq!(field_invalid(false).fg, Some(palette::STATUS_RED));
        assert!(field_invalid(true).add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_focused_selected_uses_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_status_indicator_colors() {
        assert_eq!(
            status_indicator(StatusLevel::Error).1.fg,
            Some(palette::STATUS_RED)
        );
        assert_eq!(
            status_indicator(StatusLevel::Success).1.fg,
            Some(palette::STATUS_GREEN)
        );
        assert_eq!(
            status_indicator(StatusLevel::Notice).1.fg,
            Some(palette::STATUS_YELLOW)
        );
        assert_eq!(
            status_indicator(StatusLevel::Info).1.fg,
            Some(palette::STATUS_BLUE)
        );
    }

    #[test]
    fn test_status_indicator_icons_are_distinct() {
        let icons: Vec<&str> = [
            StatusLevel::Info,
            StatusLevel::Notice,
            StatusLevel::Success,
            StatusLevel::Error,
        ]
        .into_iter()
        .map(|level| status_indicator(level).0)
        .collect();
        for (i, icon) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(icon));
        }
    }
}
