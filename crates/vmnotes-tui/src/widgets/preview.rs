//! Read-only preview of the generated document or the exported JSON

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Paragraph, Widget},
};
use vmnotes_app::state::{PreviewContent, PreviewState};
use vmnotes_core::TextLine;

use super::modal_overlay;
use crate::theme::styles;

pub struct PreviewView<'a> {
    preview: &'a PreviewState,
}

impl<'a> PreviewView<'a> {
    pub fn new(preview: &'a PreviewState) -> Self {
        Self { preview }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match &self.preview.content {
            PreviewContent::Document(lines) => lines.iter().map(document_line).collect(),
            PreviewContent::Json(text) => text
                .lines()
                .map(|l| Line::styled(format!(" {l}"), styles::text_primary()))
                .collect(),
        }
    }
}

fn document_line(line: &TextLine) -> Line<'static> {
    match line {
        TextLine::Title(text) => Line::styled(
            format!(" {text}"),
            styles::accent_bold().add_modifier(Modifier::UNDERLINED),
        ),
        TextLine::Heading(text) => Line::styled(format!(" {text}"), styles::accent_bold()),
        TextLine::Row(text) => Line::styled(format!("   {text}"), styles::text_primary()),
        TextLine::Plain(text) => Line::styled(format!(" {text}"), styles::text_secondary()),
        TextLine::Blank => Line::raw(""),
    }
}

impl Widget for PreviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect_percent(85, 85, area);
        modal_overlay::prepare(buf, area, modal);

        let title = format!(" {} ", self.preview.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let total = self.preview.content.line_count();
        Paragraph::new(self.lines())
            .scroll((self.preview.scroll as u16, 0))
            .render(body, buf);

        let position = if total == 0 {
            " Nothing generated yet.".to_string()
        } else {
            format!(" line {} of {}", self.preview.scroll + 1, total)
        };
        Paragraph::new(Line::styled(position, styles::text_muted())).render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vmnotes_core::render_text;

    #[test]
    fn test_document_preview_renders_text_lines() {
        let markdown = "## web01\n\n| Key | Value |\n|---|---|\n| OS | Debian 11 |\n";
        let preview = PreviewState::new(
            "VM preview",
            PreviewContent::Document(render_text(markdown)),
        );

        let mut term = TestTerminal::new();
        term.render_widget(PreviewView::new(&preview), term.area());

        assert!(term.buffer_contains("VM preview"));
        assert!(term.buffer_contains("web01"));
        assert!(term.buffer_contains("Debian 11"));
        assert!(!term.buffer_contains("|---|"));
    }

    #[test]
    fn test_json_preview_scrolls() {
        let json = (1..=40)
            .map(|i| format!("\"line{i}\""))
            .collect::<Vec<_>>()
            .join("\n");
        let mut preview = PreviewState::new("select.json", PreviewContent::Json(json));
        for _ in 0..10 {
            preview.scroll_down();
        }

        let mut term = TestTerminal::new();
        term.render_widget(PreviewView::new(&preview), term.area());

        assert!(term.buffer_contains("\"line11\""));
        assert!(!term.buffer_contains("\"line10\""));
        assert!(term.buffer_contains("line 11 of 40"));
    }

    #[test]
    fn test_empty_preview_footer() {
        let preview = PreviewState::new("Notes preview", PreviewContent::Document(Vec::new()));
        let mut term = TestTerminal::new();
        term.render_widget(PreviewView::new(&preview), term.area());
        assert!(term.buffer_contains("Nothing generated yet."));
    }
}
