//! Screen layout definitions for the TUI
//!
//! Header on top, a one-row status line at the bottom and the active screen
//! in between. Form screens add a side pane for the generated Markdown when
//! the terminal is wide enough.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals narrower than this show the form without the output pane
pub const SIDE_PANE_MIN_WIDTH: u16 = 100;

/// Banner never takes more than this share of the pick-list body
const BANNER_MAX_PERCENT: u16 = 35;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Main header area (title + screen tabs + keybindings)
    pub header: Rect,

    /// Active screen
    pub body: Rect,

    /// Status line
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status line
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split a form screen into the form and an optional output pane
pub fn split_form(body: Rect) -> (Rect, Option<Rect>) {
    if body.width < SIDE_PANE_MIN_WIDTH {
        return (body, None);
    }
    let chunks =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(body);
    (chunks[0], Some(chunks[1]))
}

/// Split the pick-list body into the banner and the editor
pub fn split_banner(body: Rect, banner_lines: usize) -> (Rect, Rect) {
    // Lines plus the block's borders, capped to a share of the body
    let wanted = banner_lines as u16 + 2;
    let max = (body.height * BANNER_MAX_PERCENT / 100).max(3);
    let chunks =
        Layout::vertical([Constraint::Length(wanted.min(max)), Constraint::Min(3)]).split(body);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.body.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_narrow_form_has_no_side_pane() {
        let (form, pane) = split_form(Rect::new(0, 0, 80, 20));
        assert_eq!(form.width, 80);
        assert!(pane.is_none());
    }

    #[test]
    fn test_wide_form_gets_side_pane() {
        let (form, pane) = split_form(Rect::new(0, 0, 120, 20));
        let pane = pane.expect("side pane");
        assert_eq!(form.width + pane.width, 120);
        assert!(form.width > pane.width);
    }

    #[test]
    fn test_banner_fits_its_lines() {
        let (banner, editor) = split_banner(Rect::new(0, 0, 80, 30), 2);
        assert_eq!(banner.height, 4);
        assert_eq!(editor.height, 26);
    }

    #[test]
    fn test_banner_is_capped() {
        let (banner, editor) = split_banner(Rect::new(0, 0, 80, 20), 40);
        assert_eq!(banner.height, 7); // 35% of 20
        assert_eq!(editor.height, 13);
    }
}
