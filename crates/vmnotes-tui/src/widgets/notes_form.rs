//! Notes form: header fields and the four key/value sections

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vmnotes_app::notes_form::{FormRow, HeaderField, NotesFocus, NotesFormState, RowCell, RowKind};
use vmnotes_core::{SectionId, SelectConfig};

use super::{pad, scroll_offset, CURSOR};
use crate::theme::styles;

/// Width of the header label column
const HEADER_LABEL_WIDTH: usize = 13;
/// Width of a section row's key cell
const KEY_WIDTH: usize = 18;

pub struct NotesFormView<'a> {
    form: &'a NotesFormState,
    config: &'a SelectConfig,
    focused: bool,
}

impl<'a> NotesFormView<'a> {
    pub fn new(form: &'a NotesFormState, config: &'a SelectConfig) -> Self {
        Self {
            form,
            config,
            focused: true,
        }
    }

    /// Whether the form owns the keyboard (false under an overlay)
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn is_focused(&self, focus: NotesFocus) -> bool {
        self.focused && self.form.focus == focus
    }

    /// All lines plus the index of the focused one
    fn lines(&self) -> (Vec<Line<'static>>, usize) {
        let mut lines = Vec::new();
        let mut focus_line = 0;

        for field in HeaderField::ALL {
            let focused = self.is_focused(NotesFocus::Header(field));
            let label = Span::styled(
                format!(" {}", pad(field.label(), HEADER_LABEL_WIDTH)),
                styles::field_label(focused),
            );
            let value_style = styles::field_value(focused);

            match field {
                HeaderField::Icon | HeaderField::Image => {
                    let text = if field == HeaderField::Icon {
                        self.form.icon_text(self.config)
                    } else {
                        self.form.image_label(self.config)
                    };
                    if focused {
                        focus_line = lines.len();
                    }
                    lines.push(Line::from(vec![label, choice_span(&text, value_style)]));
                }
                HeaderField::Title => {
                    if focused {
                        focus_line = lines.len();
                    }
                    lines.push(Line::from(vec![
                        label,
                        text_span(&self.form.title, value_style, focused),
                    ]));
                }
                HeaderField::Summary | HeaderField::Notes => {
                    let value = if field == HeaderField::Summary {
                        &self.form.summary
                    } else {
                        &self.form.notes
                    };
                    let parts: Vec<&str> = value.split('\n').collect();
                    let last = parts.len() - 1;
                    let mut label = Some(label);
                    for (i, part) in parts.into_iter().enumerate() {
                        let lead = label.take().unwrap_or_else(|| {
                            Span::raw(format!(" {}", pad("", HEADER_LABEL_WIDTH)))
                        });
                        lines.push(Line::from(vec![
                            lead,
                            text_span(part, value_style, focused && i == last),
                        ]));
                    }
                    if focused {
                        focus_line = lines.len() - 1;
                    }
                }
            }
        }

        for section in SectionId::ALL {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format!(" ▸ {}", section.label()),
                styles::accent_bold(),
            ));

            for row in 0..self.form.section_len(section) {
                let key_focus = self.is_focused(NotesFocus::Row {
                    section,
                    row,
                    cell: RowCell::Key,
                });
                let value_focus = self.is_focused(NotesFocus::Row {
                    section,
                    row,
                    cell: RowCell::Value,
                });
                if key_focus || value_focus {
                    focus_line = lines.len();
                }

                let (key, value) = match section {
                    SectionId::Services => {
                        let service = &self.form.services[row];
                        (
                            service.name.as_str(),
                            text_span(&service.url, styles::field_value(value_focus), value_focus),
                        )
                    }
                    _ => {
                        let form_row = &self.section_rows(section)[row];
                        (form_row.key.as_str(), row_value_span(form_row, value_focus))
                    }
                };

                let key_text = if key_focus {
                    format!("{key}{CURSOR}")
                } else {
                    key.to_string()
                };
                lines.push(Line::from(vec![
                    Span::raw("   "),
                    Span::styled(pad(&key_text, KEY_WIDTH), styles::field_value(key_focus)),
                    Span::raw(" "),
                    value,
                ]));
            }
        }

        (lines, focus_line)
    }

    fn section_rows(&self, section: SectionId) -> &[FormRow] {
        match section {
            SectionId::Creation => &self.form.creation,
            SectionId::Network => &self.form.network,
            SectionId::Access => &self.form.access,
            SectionId::Services => &[],
        }
    }
}

fn choice_span(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!("‹ {text} ›"), style)
}

fn text_span(text: &str, style: Style, editing: bool) -> Span<'static> {
    if editing {
        Span::styled(format!("{text}{CURSOR}"), style)
    } else {
        Span::styled(text.to_string(), style)
    }
}

fn row_value_span(row: &FormRow, focused: bool) -> Span<'static> {
    match row.kind {
        RowKind::Toggle | RowKind::OsChoice => {
            choice_span(&row.value, styles::field_value(focused))
        }
        RowKind::Date if !row.is_valid() => {
            text_span(&row.value, styles::field_invalid(focused), focused)
        }
        RowKind::Date if row.value.is_empty() && !focused => {
            Span::styled("YYYY-MM-DD", styles::text_muted())
        }
        RowKind::Date | RowKind::Text => {
            text_span(&row.value, styles::field_value(focused), focused)
        }
    }
}

impl Widget for NotesFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Notes ");
        let inner = block.inner(area);
        block.render(area, buf);

        let (lines, focus_line) = self.lines();
        let offset = scroll_offset(focus_line, inner.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn form() -> (NotesFormState, SelectConfig) {
        let config = SelectConfig::builtin();
        (NotesFormState::new(&config), config)
    }

    #[test]
    fn test_header_fields_render() {
        let (mut form, config) = form();
        form.title = "web01".into();

        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(NotesFormView::new(&form, &config), term.area());

        assert!(term.buffer_contains("Title"));
        assert!(term.buffer_contains("web01"));
        assert!(term.buffer_contains("Description"));
        assert!(term.buffer_contains("‹ "));
    }

    #[test]
    fn test_sections_and_default_rows_render() {
        let (form, config) = form();
        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(NotesFormView::new(&form, &config), term.area());

        assert!(term.buffer_contains("▸ Creation"));
        assert!(term.buffer_contains("▸ Network"));
        assert!(term.buffer_contains("▸ Services"));
        assert!(term.buffer_contains("▸ Access"));
        assert!(term.buffer_contains("WebGUI"));
        assert!(term.buffer_contains("https://"));
        assert!(term.buffer_contains("‹ No ›"));
        assert!(term.buffer_contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_multiline_description_spans_lines() {
        let (mut form, config) = form();
        form.summary = "first\nsecond".into();

        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(NotesFormView::new(&form, &config), term.area());

        let content = term.content();
        let first = content.lines().position(|l| l.contains("first"));
        let second = content.lines().position(|l| l.contains("second"));
        assert_eq!(second, first.map(|i| i + 1));
    }

    #[test]
    fn test_invalid_date_is_flagged() {
        let (mut form, config) = form();
        form.creation[0].value = "2024-13-45".into();

        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(NotesFormView::new(&form, &config), term.area());

        let (col, y) = term.position_of("2024-13-45").expect("date rendered");
        assert_eq!(term.buffer()[(col, y)].fg, crate::theme::palette::STATUS_RED);
    }

    #[test]
    fn test_focus_scrolls_into_view() {
        let (mut form, config) = form();
        form.focus = NotesFocus::Row {
            section: SectionId::Access,
            row: 2,
            cell: RowCell::Key,
        };

        let mut term = TestTerminal::with_size(80, 12);
        term.render_widget(NotesFormView::new(&form, &config), term.area());

        assert!(term.buffer_contains("Password"));
        assert!(!term.buffer_contains("Title"));
    }
}
