//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use vmnotes_app::state::AppState;
use vmnotes_app::{Screen, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: every widget borrows the state read-only.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let project_name = state
        .project_path
        .file_name()
        .and_then(|name| name.to_str());
    frame.render_widget(
        widgets::MainHeader::new(project_name, state.screen),
        areas.header,
    );

    let editing = state.ui_mode == UiMode::Normal;
    match state.screen {
        Screen::Notes => {
            let (form_area, pane_area) = layout::split_form(areas.body);
            frame.render_widget(
                widgets::NotesFormView::new(&state.notes, &state.form_config).focused(editing),
                form_area,
            );
            if let Some(pane_area) = pane_area {
                frame.render_widget(widgets::OutputPane::new(&state.notes.output), pane_area);
            }
        }
        Screen::Vm => {
            let (form_area, pane_area) = layout::split_form(areas.body);
            frame.render_widget(
                widgets::VmFormView::new(&state.vm, &state.suggestions).focused(editing),
                form_area,
            );
            if let Some(pane_area) = pane_area {
                frame.render_widget(widgets::OutputPane::new(&state.vm.output), pane_area);
            }
        }
        Screen::Select => {
            let banner = state.select_banner();
            let (banner_area, editor_area) = layout::split_banner(areas.body, banner.len());
            frame.render_widget(widgets::Banner::new(&banner), banner_area);
            frame.render_widget(
                widgets::SelectEditorView::new(&state.editor, &state.glyphs).focused(editing),
                editor_area,
            );
        }
    }

    frame.render_widget(
        widgets::StatusBar::new(state.status.as_ref(), state.screen, state.ui_mode)
            .dragging(state.editor.is_dragging()),
        areas.status,
    );

    // Overlays cover everything but the status line
    let overlay_area = ratatui::layout::Rect {
        height: area.height.saturating_sub(areas.status.height),
        ..area
    };
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::IconPicker => {
            if let Some(picker) = &state.editor.picker {
                frame.render_widget(widgets::IconPicker::new(picker, &state.glyphs), overlay_area);
            }
        }
        UiMode::Preview => {
            if let Some(preview) = &state.preview {
                frame.render_widget(widgets::PreviewView::new(preview), overlay_area);
            }
        }
        UiMode::Prompt => {
            if let Some(prompt) = &state.prompt {
                frame.render_widget(widgets::PathPromptView::new(prompt), overlay_area);
            }
        }
    }
}
