//! Pick-list editor: resources and the three ordered lists

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vmnotes_app::pick_list::{EditorFocus, ListKind, ResourceField, RowColumn, SelectEditor};
use vmnotes_core::GlyphMap;

use super::{pad, scroll_offset, CURSOR};
use crate::theme::{palette, styles};

/// Drag handle drawn at the start of every row
pub const HANDLE: &str = "⋮⋮";

const RESOURCE_LABEL_WIDTH: usize = 14;
const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 26;

pub struct SelectEditorView<'a> {
    editor: &'a SelectEditor,
    glyphs: &'a GlyphMap,
    focused: bool,
}

impl<'a> SelectEditorView<'a> {
    pub fn new(editor: &'a SelectEditor, glyphs: &'a GlyphMap) -> Self {
        Self {
            editor,
            glyphs,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn resource_value(&self, field: ResourceField) -> &str {
        match field {
            ResourceField::Fqdn => &self.editor.image_fqdn,
            ResourceField::Width => &self.editor.image_width,
            ResourceField::Height => &self.editor.image_height,
        }
    }

    /// Focused column of `row` in `list`, if it holds the focus
    fn focused_column(&self, list: ListKind, row: usize) -> Option<RowColumn> {
        match self.editor.focus {
            EditorFocus::Row {
                list: l,
                row: r,
                column,
            } if self.focused && l == list && r == row => Some(column),
            _ => None,
        }
    }

    fn lines(&self) -> (Vec<Line<'static>>, usize) {
        let mut lines = vec![Line::styled(" ▸ Resources", styles::accent_bold())];
        let mut focus_line = 0;

        for field in ResourceField::ALL {
            let focused = self.focused && self.editor.focus == EditorFocus::Resource(field);
            if focused {
                focus_line = lines.len();
            }
            let value = self.resource_value(field);
            let value = if focused {
                format!("{value}{CURSOR}")
            } else {
                value.to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("   {}", pad(field.label(), RESOURCE_LABEL_WIDTH)),
                    styles::field_label(focused),
                ),
                Span::styled(value, styles::field_value(focused)),
            ]));
        }

        let report = self.editor.last_report();
        for list in ListKind::ALL {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format!(" ▸ {}", list.title()),
                styles::accent_bold(),
            ));
            lines.push(Line::styled(
                format!(
                    "   {}  {}{}",
                    pad("", HANDLE.chars().count()),
                    pad("Label", LABEL_WIDTH + 1),
                    list.value_header()
                ),
                styles::text_muted(),
            ));

            let count = self.editor.row_count(list);
            if count == 0 {
                lines.push(Line::styled(
                    "   No rows. ^N adds one.",
                    styles::text_muted(),
                ));
            }

            for row in 0..count {
                let column = self.focused_column(list, row);
                if column.is_some() {
                    focus_line = lines.len();
                }
                let dragging = column.is_some() && self.editor.is_dragging();
                let error = report.row_message(list, row);
                lines.push(self.row_line(list, row, column, dragging, error));
            }
        }

        (lines, focus_line)
    }

    fn row_line(
        &self,
        list: ListKind,
        row: usize,
        column: Option<RowColumn>,
        dragging: bool,
        error: Option<&str>,
    ) -> Line<'static> {
        let label = self.editor.label_at(list, row).unwrap_or_default();
        let value = self.editor.value_at(list, row).unwrap_or_default();

        let cell = |text: &str, col: RowColumn, width: usize, invalid: bool| -> Span<'static> {
            let focused = column == Some(col);
            let text = if focused {
                format!("{text}{CURSOR}")
            } else {
                text.to_string()
            };
            let style = if dragging {
                styles::dragging()
            } else if invalid {
                styles::field_invalid(focused)
            } else {
                styles::field_value(focused)
            };
            Span::styled(pad(&text, width), style)
        };

        let handle_style = if dragging {
            styles::dragging()
        } else if column == Some(RowColumn::Handle) {
            styles::focused_selected()
        } else {
            styles::text_muted()
        };

        let mut spans = vec![
            Span::raw("   "),
            Span::styled(HANDLE, handle_style),
            Span::raw("  "),
            cell(label, RowColumn::Label, LABEL_WIDTH, error.is_some() && label.trim().is_empty()),
            Span::raw(" "),
            cell(value, RowColumn::Value, VALUE_WIDTH, error.is_some()),
        ];

        if list == ListKind::Icons {
            if let Some(glyph) = self.glyphs.glyph(value) {
                spans.push(Span::styled(format!(" {glyph}"), styles::accent()));
            }
        }
        if let Some(message) = error {
            spans.push(Span::styled(
                format!("  ✗ {message}"),
                Style::default().fg(palette::STATUS_RED),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for SelectEditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Pick lists ");
        let inner = block.inner(area);
        block.render(area, buf);

        let (lines, focus_line) = self.lines();
        let offset = scroll_offset(focus_line, inner.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}
