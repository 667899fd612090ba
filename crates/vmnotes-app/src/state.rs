//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use crate::config::{ConfigSource, LoadedSelect, Settings};
use crate::notes_form::NotesFormState;
use crate::pick_list::SelectEditor;
use crate::vm_form::VmFormState;
use vmnotes_core::{GlyphMap, SelectConfig, SuggestionStore, TextLine};

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Full notes form
    #[default]
    Notes,
    /// Quick VM form with autofill
    Vm,
    /// Pick-list editor for `select.json`
    Select,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Notes, Screen::Vm, Screen::Select];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Notes => "Notes",
            Screen::Vm => "Quick VM",
            Screen::Select => "Pick Lists",
        }
    }

    /// Function key that switches to the screen
    pub fn function_key(&self) -> u8 {
        match self {
            Screen::Notes => 1,
            Screen::Vm => 2,
            Screen::Select => 3,
        }
    }
}

/// Current UI mode (which overlay owns the keyboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Editing the active screen
    #[default]
    Normal,

    /// Icon class picker over the pick-list editor
    IconPicker,

    /// Read-only preview of the generated output
    Preview,

    /// Single-line path input
    Prompt,
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Notice,
    Success,
    Error,
}

/// One-line, dismissable status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

/// What the preview overlay shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    /// Rendered Markdown document
    Document(Vec<TextLine>),
    /// Raw JSON text
    Json(String),
}

impl PreviewContent {
    pub fn line_count(&self) -> usize {
        match self {
            PreviewContent::Document(lines) => lines.len(),
            PreviewContent::Json(text) => text.lines().count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    pub title: String,
    pub content: PreviewContent,
    pub scroll: usize,
}

impl PreviewState {
    pub fn new(title: impl Into<String>, content: PreviewContent) -> Self {
        Self {
            title: title.into(),
            content,
            scroll: 0,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.content.line_count().saturating_sub(1);
        self.scroll = (self.scroll + 1).min(max);
    }
}

/// What a submitted path is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    LoadNotes,
    ImportSelect,
    ImportSuggestions,
    ExportSuggestions,
}

impl PromptPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            PromptPurpose::LoadNotes => "Load notes file",
            PromptPurpose::ImportSelect => "Import select configuration",
            PromptPurpose::ImportSuggestions => "Import suggestions",
            PromptPurpose::ExportSuggestions => "Export suggestions to",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    pub purpose: PromptPurpose,
    pub input: String,
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Active screen
    pub screen: Screen,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Settings from `.vmnotes/config.toml`
    pub settings: Settings,

    /// Directory relative paths in settings resolve against
    pub project_path: PathBuf,

    pub notes: NotesFormState,
    pub vm: VmFormState,
    pub editor: SelectEditor,

    /// Configuration the notes form draws its choices from
    pub form_config: SelectConfig,

    /// Where `form_config` came from; `None` until loading finishes
    pub config_source: Option<ConfigSource>,

    pub glyphs: GlyphMap,
    pub suggestions: SuggestionStore,

    pub status: Option<StatusMessage>,
    pub preview: Option<PreviewState>,
    pub prompt: Option<PathPrompt>,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(PathBuf::new(), Settings::default())
    }

    /// Create a new AppState with project path and settings
    pub fn with_settings(project_path: PathBuf, settings: Settings) -> Self {
        let form_config = SelectConfig::builtin();
        Self {
            screen: Screen::default(),
            ui_mode: UiMode::Normal,
            settings,
            project_path,
            notes: NotesFormState::new(&form_config),
            vm: VmFormState::default(),
            editor: SelectEditor::new(),
            form_config,
            config_source: None,
            glyphs: GlyphMap::default(),
            suggestions: SuggestionStore::default(),
            status: None,
            preview: None,
            prompt: None,
            should_quit: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ─────────────────────────────────────────────────────────
    // Status Line
    // ─────────────────────────────────────────────────────────

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level,
            text: text.into(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // ─────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────

    /// File name shown in banners, e.g. `select.json`
    pub fn select_file_name(&self) -> String {
        self.settings
            .files
            .select
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "select.json".to_string())
    }

    /// Install a loaded select configuration in both the form and the editor
    pub fn apply_loaded_select(&mut self, loaded: LoadedSelect) {
        self.notes = NotesFormState::new(&loaded.config);
        self.editor.load_config(&loaded.config);
        self.form_config = loaded.config;
        self.config_source = Some(loaded.source);
    }

    /// Rebuild the editor output and report if an edit left them stale
    pub fn refresh_editor(&mut self) {
        self.editor.refresh(&self.glyphs);
    }

    /// Banner lines for the pick-list screen: load source, then validation
    pub fn select_banner(&self) -> Vec<StatusMessage> {
        let line = |level, text: String| StatusMessage { level, text };
        let mut lines = Vec::new();

        if let Some(source) = self.config_source {
            if let Some(text) = source.banner(&self.select_file_name()) {
                let level = match source {
                    ConfigSource::Example => StatusLevel::Notice,
                    _ => StatusLevel::Info,
                };
                lines.push(line(level, text));
            }
        }

        let report = self.editor.last_report();
        let blocking = report.blocking_messages();
        if blocking.is_empty() {
            lines.push(line(StatusLevel::Success, "No validation errors.".to_string()));
        } else {
            lines.extend(blocking.into_iter().map(|text| line(StatusLevel::Error, text)));
        }
        lines.extend(
            report
                .infos
                .iter()
                .map(|text| line(StatusLevel::Info, text.clone())),
        );
        lines
    }

    // ─────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────

    pub fn open_preview(&mut self, preview: PreviewState) {
        self.preview = Some(preview);
        self.ui_mode = UiMode::Preview;
    }

    pub fn open_prompt(&mut self, purpose: PromptPurpose) {
        self.prompt = Some(PathPrompt {
            purpose,
            input: String::new(),
        });
        self.ui_mode = UiMode::Prompt;
    }

    /// Close whatever overlay is open and return to editing
    pub fn close_overlay(&mut self) {
        match self.ui_mode {
            UiMode::IconPicker => self.editor.cancel_picker(),
            UiMode::Preview => self.preview = None,
            UiMode::Prompt => self.prompt = None,
            UiMode::Normal => {}
        }
        self.ui_mode = UiMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmnotes_core::IconOption;

    #[test]
    fn test_new_state_starts_on_notes() {
        let state = AppState::new();
        assert_eq!(state.screen, Screen::Notes);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.config_source.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_apply_loaded_select_updates_form_and_editor() {
        let mut state = AppState::new();
        let mut config = SelectConfig::builtin();
        config.select01.clear();
        config
            .select01
            .insert("Docker".into(), IconOption::new("fa-docker", "Docker"));

        state.apply_loaded_select(LoadedSelect {
            config,
            source: ConfigSource::Example,
        });

        assert_eq!(state.notes.icon, "fa-docker");
        assert_eq!(state.editor.icons.len(), 1);
        assert_eq!(state.config_source, Some(ConfigSource::Example));
    }

    #[test]
    fn test_select_banner_with_saved_config() {
        let mut state = AppState::new();
        state.config_source = Some(ConfigSource::Saved);
        let glyphs = GlyphMap::default();
        state.editor.refresh(&glyphs);

        let banner = state.select_banner();
        assert_eq!(banner[0].text, "Info: Your select.json is loaded.");
        assert_eq!(banner[0].level, StatusLevel::Info);
        assert_eq!(banner[1].text, "No validation errors.");
        assert_eq!(banner[1].level, StatusLevel::Success);
    }

    #[test]
    fn test_select_banner_lists_blocking_errors() {
        let mut state = AppState::new();
        state.editor.image_fqdn.clear();
        let glyphs = GlyphMap::default();
        state.editor.refresh(&glyphs);

        let banner = state.select_banner();
        assert_eq!(banner[0].text, "Resources: \"image fqdn\" is empty.");
        assert_eq!(banner[0].level, StatusLevel::Error);
    }

    #[test]
    fn test_close_overlay_resets_mode() {
        let mut state = AppState::new();
        state.open_prompt(PromptPurpose::LoadNotes);
        assert_eq!(state.ui_mode, UiMode::Prompt);

        state.close_overlay();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.prompt.is_none());
    }

    #[test]
    fn test_preview_scroll_is_clamped() {
        let mut preview = PreviewState::new("JSON", PreviewContent::Json("a\nb".into()));
        preview.scroll_up();
        assert_eq!(preview.scroll, 0);
        preview.scroll_down();
        preview.scroll_down();
        assert_eq!(preview.scroll, 1);
    }
}
