//! Single-line path prompt

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vmnotes_app::state::PathPrompt;

use super::{modal_overlay, CURSOR};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 6;

pub struct PathPromptView<'a> {
    prompt: &'a PathPrompt,
}

impl<'a> PathPromptView<'a> {
    pub fn new(prompt: &'a PathPrompt) -> Self {
        Self { prompt }
    }
}

impl Widget for PathPromptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::prepare(buf, area, modal);

        let title = format!(" {} ", self.prompt.purpose.title());
        let block = styles::modal_block(&title);

        let lines = vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled(" Path: ", styles::text_secondary()),
                Span::styled(
                    format!("{}{CURSOR}", self.prompt.input),
                    styles::field_value(true),
                ),
            ]),
            Line::raw(""),
            Line::styled(
                " Relative paths start at the project directory.",
                styles::text_muted(),
            ),
        ];
        Paragraph::new(lines).block(block).render(modal, buf);
    }
}
