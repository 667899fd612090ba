//! Header bar: app title, project name and screen tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use vmnotes_app::Screen;

use crate::theme::{palette, styles};

/// Main header showing the app title, project name and one tab per screen
pub struct MainHeader<'a> {
    project_name: Option<&'a str>,
    active: Screen,
}

impl<'a> MainHeader<'a> {
    pub fn new(project_name: Option<&'a str>, active: Screen) -> Self {
        Self {
            project_name,
            active,
        }
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for screen in Screen::ALL {
            let label = format!(" F{} {} ", screen.function_key(), screen.title());
            if screen == self.active {
                spans.push(Span::styled(label, styles::focused_selected()));
            } else {
                spans.push(Span::styled(label, styles::text_secondary()));
            }
            spans.push(Span::raw(" "));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let project_name = self.project_name.unwrap_or(".");
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "vmnotes",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(project_name.to_string(), styles::text_secondary()),
            Span::raw("   "),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        let tabs = Line::from(self.tab_spans());
        let tabs_x = inner.x.saturating_add(left_width);
        if tabs_x < inner.right() {
            buf.set_line(tabs_x, inner.y, &tabs, inner.right() - tabs_x);
        }

        // Quit hint pinned to the right edge when it fits
        let hint = Line::from(vec![
            Span::styled("^Q", styles::keybinding()),
            Span::styled(" quit ", styles::text_muted()),
        ]);
        let hint_width = hint.width() as u16;
        let needed = left_width + tabs.width() as u16 + hint_width;
        if needed <= inner.width {
            buf.set_line(inner.right() - hint_width, inner.y, &hint, hint_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_project() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 3);
        term.render_widget(MainHeader::new(Some("lab"), Screen::Notes), area);

        assert!(term.buffer_contains("vmnotes"));
        assert!(term.buffer_contains("lab"));
    }

    #[test]
    fn test_header_lists_every_screen() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new(None, Screen::Vm), term.area());

        assert!(term.buffer_contains("F1 Notes"));
        assert!(term.buffer_contains("F2 Quick VM"));
        assert!(term.buffer_contains("F3 Pick Lists"));
        assert!(term.buffer_contains("^Q quit"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new(None, Screen::Select), term.area());

        let (x, y) = term.position_of("F3").expect("tab rendered");
        assert_eq!(term.buffer()[(x, y)].bg, palette::ACCENT);
    }

    #[test]
    fn test_header_compact_does_not_panic() {
        let mut term = TestTerminal::compact();
        term.render_widget(MainHeader::new(Some("lab"), Screen::Notes), Rect::new(0, 0, 40, 3));
        assert!(term.buffer_contains("vmnotes"));
    }
}
