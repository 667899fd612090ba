//! Pick-list banner: where the configuration came from and what is wrong with it

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use vmnotes_app::state::{StatusLevel, StatusMessage};

use crate::theme::styles;

pub struct Banner<'a> {
    lines: &'a [StatusMessage],
}

impl<'a> Banner<'a> {
    pub fn new(lines: &'a [StatusMessage]) -> Self {
        Self { lines }
    }

    fn has_errors(&self) -> bool {
        self.lines.iter().any(|l| l.level == StatusLevel::Error)
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.has_errors() {
            " Validation errors "
        } else {
            " Status "
        };
        let block = styles::glass_block(self.has_errors()).title(title);

        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|message| {
                let (icon, style) = styles::status_indicator(message.level);
                Line::from(vec![
                    Span::styled(format!(" {icon} "), style),
                    Span::styled(message.text.as_str(), style),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn line(level: StatusLevel, text: &str) -> StatusMessage {
        StatusMessage {
            level,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_banner_shows_all_lines() {
        let lines = vec![
            line(StatusLevel::Info, "Info: Your select.json is loaded."),
            line(StatusLevel::Success, "No validation errors."),
        ];
        let mut term = TestTerminal::with_size(60, 4);
        term.render_widget(Banner::new(&lines), term.area());

        assert!(term.buffer_contains("Your select.json is loaded."));
        assert!(term.buffer_contains("✓ No validation errors."));
        assert!(term.buffer_contains("Status"));
    }

    #[test]
    fn test_banner_title_flags_errors() {
        let lines = vec![line(
            StatusLevel::Error,
            "Resources: \"image fqdn\" is empty.",
        )];
        let mut term = TestTerminal::with_size(60, 3);
        term.render_widget(Banner::new(&lines), term.area());

        assert!(term.buffer_contains("Validation errors"));
        assert!(term.buffer_contains("✗ Resources"));
    }
}
