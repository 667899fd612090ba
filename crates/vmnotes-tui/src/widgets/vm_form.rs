//! Quick VM form with the suggestion list for the focused field

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vmnotes_app::vm_form::{VmField, VmFormState};
use vmnotes_core::SuggestionStore;

use super::{pad, scroll_offset, CURSOR};
use crate::theme::styles;

const LABEL_WIDTH: usize = 14;
/// Suggestion rows shown at most
const MAX_SUGGESTIONS: usize = 6;

pub struct VmFormView<'a> {
    form: &'a VmFormState,
    suggestions: &'a SuggestionStore,
    focused: bool,
}

impl<'a> VmFormView<'a> {
    pub fn new(form: &'a VmFormState, suggestions: &'a SuggestionStore) -> Self {
        Self {
            form,
            suggestions,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn field_label(field: VmField) -> String {
        match field {
            VmField::Service(i) | VmField::Dependency(i) => format!("{} {}", field.label(), i + 1),
            _ => field.label().to_string(),
        }
    }

    fn lines(&self) -> (Vec<Line<'static>>, usize) {
        let mut lines = Vec::new();
        let mut focus_line = 0;

        for field in self.form.fields() {
            if field == VmField::NewOs {
                lines.push(Line::raw(""));
                lines.push(Line::styled(" ▸ OS list", styles::accent_bold()));
            }

            let focused = self.focused && self.form.focus == field;
            if focused {
                focus_line = lines.len();
            }
            let value = self.form.value(field);
            let value = if focused {
                format!("{value}{CURSOR}")
            } else {
                value.to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {}", pad(&Self::field_label(field), LABEL_WIDTH)),
                    styles::field_label(focused),
                ),
                Span::styled(value, styles::field_value(focused)),
            ]));
        }

        (lines, focus_line)
    }

    fn render_suggestions(&self, matches: &[&str], area: Rect, buf: &mut Buffer) {
        // Highlight the entry last cycled to, if the cursor belongs to this field
        let selected = self
            .form
            .suggestion
            .as_ref()
            .filter(|cursor| cursor.field == self.form.focus)
            .map(|cursor| cursor.index);

        let offset = selected
            .map(|i| scroll_offset(i, MAX_SUGGESTIONS))
            .unwrap_or(0);
        let lines: Vec<Line> = matches
            .iter()
            .enumerate()
            .skip(offset)
            .take(MAX_SUGGESTIONS)
            .map(|(i, value)| {
                if Some(i) == selected {
                    Line::styled(format!(" {value} "), styles::focused_selected())
                } else {
                    Line::styled(format!(" {value}"), styles::text_secondary())
                }
            })
            .collect();

        let title = format!(" Suggestions ({}) ", matches.len());
        Paragraph::new(lines)
            .block(styles::glass_block(false).title(title))
            .render(area, buf);
    }
}

impl Widget for VmFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let matches = if self.focused {
            self.form.visible_suggestions(self.suggestions)
        } else {
            Vec::new()
        };

        let (form_area, list_area) = if matches.is_empty() {
            (area, None)
        } else {
            let rows = matches.len().min(MAX_SUGGESTIONS) as u16 + 2;
            let chunks =
                Layout::vertical([Constraint::Min(3), Constraint::Length(rows)]).split(area);
            (chunks[0], Some(chunks[1]))
        };

        let block = styles::glass_block(self.focused).title(" Quick VM ");
        let inner = block.inner(form_area);
        block.render(form_area, buf);

        let (lines, focus_line) = self.lines();
        let offset = scroll_offset(focus_line, inner.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);

        if let Some(list_area) = list_area {
            self.render_suggestions(&matches, list_area, buf);
        }
    }
}
