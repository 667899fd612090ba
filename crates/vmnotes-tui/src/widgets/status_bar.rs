//! Bottom status line: the latest status message, or key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use vmnotes_app::state::StatusMessage;
use vmnotes_app::{Screen, UiMode};

use crate::theme::styles;

/// Status line below the active screen
pub struct StatusBar<'a> {
    status: Option<&'a StatusMessage>,
    screen: Screen,
    mode: UiMode,
    dragging: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Option<&'a StatusMessage>, screen: Screen, mode: UiMode) -> Self {
        Self {
            status,
            screen,
            mode,
            dragging: false,
        }
    }

    /// A pick-list row is being moved
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::IconPicker => &[
                ("type", "filter"),
                ("↑↓", "select"),
                ("Enter", "pick"),
                ("Esc", "cancel"),
            ],
            UiMode::Preview => &[("↑↓", "scroll"), ("^Y", "copy"), ("Esc", "close")],
            UiMode::Prompt => &[("Enter", "confirm"), ("Esc", "cancel")],
            UiMode::Normal if self.dragging => {
                &[("↑↓", "move"), ("Space", "drop"), ("Esc", "cancel")]
            }
            UiMode::Normal => match self.screen {
                Screen::Notes => &[
                    ("Tab", "next"),
                    ("←→", "choose"),
                    ("^G", "generate"),
                    ("^S", "save"),
                    ("^O", "load"),
                    ("^T", "today"),
                    ("^N/^D", "row"),
                    ("^P", "preview"),
                    ("^Y", "copy"),
                ],
                Screen::Vm => &[
                    ("Tab", "next"),
                    ("^F", "suggest"),
                    ("^G", "generate"),
                    ("^N/^D", "row"),
                    ("^O", "import"),
                    ("^E", "export"),
                    ("^P", "preview"),
                    ("^Y", "copy"),
                ],
                Screen::Select => &[
                    ("Tab", "next"),
                    ("←→", "column"),
                    ("Space", "move"),
                    ("Enter", "icon"),
                    ("^N/^D", "row"),
                    ("^T/^A", "sort"),
                    ("^S", "save"),
                    ("^O", "import"),
                ],
            },
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let line = match self.status {
            Some(status) => {
                let (icon, style) = styles::status_indicator(status.level);
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(status.text.as_str(), style),
                ])
            }
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, label) in self.hints() {
                    spans.push(Span::styled(*key, styles::keybinding()));
                    spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
                }
                Line::from(spans)
            }
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vmnotes_app::state::StatusLevel;

    #[test]
    fn test_status_message_replaces_hints() {
        let status = StatusMessage {
            level: StatusLevel::Error,
            text: "Invalid JSON file.".into(),
        };
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            StatusBar::new(Some(&status), Screen::Select, UiMode::Normal),
            term.area(),
        );

        assert!(term.buffer_contains("✗ Invalid JSON file."));
        assert!(!term.buffer_contains("column"));
    }

    #[test]
    fn test_hints_follow_screen() {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(StatusBar::new(None, Screen::Vm, UiMode::Normal), term.area());
        assert!(term.buffer_contains("^F suggest"));

        term.render_widget(StatusBar::new(None, Screen::Notes, UiMode::Normal), term.area());
        assert!(term.buffer_contains("^T today"));
    }

    #[test]
    fn test_drag_hints() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            StatusBar::new(None, Screen::Select, UiMode::Normal).dragging(true),
            term.area(),
        );
        assert!(term.buffer_contains("Space drop"));
    }

    #[test]
    fn test_overlay_hints_win_over_screen() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            StatusBar::new(None, Screen::Select, UiMode::IconPicker),
            term.area(),
        );
        assert!(term.buffer_contains("Enter pick"));
    }
}
