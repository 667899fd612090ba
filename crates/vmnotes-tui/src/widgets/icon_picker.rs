//! Icon class picker modal

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vmnotes_app::pick_list::IconPickerState;
use vmnotes_core::{short_name, GlyphMap};

use super::{modal_overlay, pad, scroll_offset, CURSOR};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 20;

/// Searchable list of every class in the style sheet, drawn over the screen
pub struct IconPicker<'a> {
    picker: &'a IconPickerState,
    glyphs: &'a GlyphMap,
}

impl<'a> IconPicker<'a> {
    pub fn new(picker: &'a IconPickerState, glyphs: &'a GlyphMap) -> Self {
        Self { picker, glyphs }
    }

    fn match_line(&self, index: usize, class: &str) -> Line<'static> {
        let glyph = self
            .glyphs
            .glyph(class)
            .map(String::from)
            .unwrap_or_else(|| " ".to_string());
        let text = format!(" {glyph}  {} {class}", pad(short_name(class), 20));
        if index == self.picker.selected {
            Line::styled(text, styles::focused_selected())
        } else {
            Line::styled(text, styles::text_primary())
        }
    }
}

impl Widget for IconPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::prepare(buf, area, modal);

        let block = styles::modal_block(" Choose an icon ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [query_area, list_area, count_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(" Filter: ", styles::text_secondary()),
            Span::styled(format!("{}{CURSOR}", self.picker.query), styles::field_value(true)),
        ]))
        .render(query_area, buf);

        if self.picker.matches.is_empty() {
            Paragraph::new(Line::styled(" No matching icons.", styles::text_muted()))
                .render(list_area, buf);
        } else {
            let height = list_area.height as usize;
            let offset = scroll_offset(self.picker.selected, height);
            let lines: Vec<Line> = self
                .picker
                .matches
                .iter()
                .enumerate()
                .skip(offset)
                .take(height)
                .map(|(i, class)| self.match_line(i, class))
                .collect();
            Paragraph::new(lines).render(list_area, buf);
        }

        let count = format!(
            " {} of {} icons",
            self.picker.matches.len(),
            self.glyphs.len()
        );
        Paragraph::new(Line::styled(count, styles::text_muted())).render(count_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    const CSS: &str = r#"
.fa-linux:before { content: "\f17c"; }
.fa-windows:before { content: "\f17a"; }
.fa-docker:before { content: "\f395"; }
"#;

    #[test]
    fn test_picker_lists_matches() {
        let glyphs = GlyphMap::parse(CSS);
        let picker = IconPickerState::new(0, &glyphs, "");
        let mut term = TestTerminal::new();
        term.render_widget(IconPicker::new(&picker, &glyphs), term.area());

        assert!(term.buffer_contains("Choose an icon"));
        assert!(term.buffer_contains("fa-docker"));
        assert!(term.buffer_contains("fa-linux"));
        assert!(term.buffer_contains("3 of 3 icons"));
    }

    #[test]
    fn test_picker_filters_by_query() {
        let glyphs = GlyphMap::parse(CSS);
        let mut picker = IconPickerState::new(0, &glyphs, "");
        picker.input_char('w', &glyphs);
        picker.input_char('i', &glyphs);

        let mut term = TestTerminal::new();
        term.render_widget(IconPicker::new(&picker, &glyphs), term.area());

        assert!(term.buffer_contains("Filter: wi"));
        assert!(term.buffer_contains("fa-windows"));
        assert!(!term.buffer_contains("fa-docker"));
        assert!(term.buffer_contains("1 of 3 icons"));
    }

    #[test]
    fn test_picker_without_matches() {
        let glyphs = GlyphMap::parse(CSS);
        let mut picker = IconPickerState::new(0, &glyphs, "");
        picker.input_char('z', &glyphs);

        let mut term = TestTerminal::new();
        term.render_widget(IconPicker::new(&picker, &glyphs), term.area());
        assert!(term.buffer_contains("No matching icons."));
    }
}
