//! Side pane with the last generated Markdown

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Raw Markdown exactly as it would be copied
pub struct OutputPane<'a> {
    markdown: &'a str,
}

impl<'a> OutputPane<'a> {
    pub fn new(markdown: &'a str) -> Self {
        Self { markdown }
    }
}

impl Widget for OutputPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Markdown ");

        let lines: Vec<Line> = if self.markdown.is_empty() {
            vec![Line::from(vec![
                Span::styled(" Press ", styles::text_muted()),
                Span::styled("^G", styles::keybinding()),
                Span::styled(" to generate.", styles::text_muted()),
            ])]
        } else {
            // Long table rows are cut at the pane edge, not wrapped
            self.markdown
                .lines()
                .map(|l| Line::styled(l.to_string(), styles::text_secondary()))
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_empty_output_shows_hint() {
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(OutputPane::new(""), term.area());
        assert!(term.buffer_contains("Press ^G to generate."));
    }

    #[test]
    fn test_output_lines_are_shown_verbatim() {
        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(
            OutputPane::new("## web01\n\n| Key | Value |"),
            term.area(),
        );
        assert!(term.line_contains(1, "## web01"));
        assert!(term.line_contains(3, "| Key | Value |"));
    }
}
