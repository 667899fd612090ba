//! Pick-list editor state
//!
//! Holds the resource fields and the three ordered row lists behind
//! `select.json`. Every edit marks the editor dirty; the exported JSON and the
//! validation report are rebuilt by [`SelectEditor::flush`], which the event
//! loop calls on each tick and which readers call before using the output.

use indexmap::IndexMap;
use vmnotes_core::glyphs::normalize_class;
use vmnotes_core::prelude::*;
use vmnotes_core::{natural_cmp, GlyphMap, IconOption, Resources, SelectConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Rows
// ─────────────────────────────────────────────────────────────────────────────

/// One of the three pick-lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Icons,
    Images,
    Os,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Icons, ListKind::Images, ListKind::Os];

    pub fn title(&self) -> &'static str {
        match self {
            ListKind::Icons => "Icons (select01)",
            ListKind::Images => "Images (select02)",
            ListKind::Os => "Operating systems (select03)",
        }
    }

    /// Following list in screen order
    pub fn next(&self) -> Option<ListKind> {
        match self {
            ListKind::Icons => Some(ListKind::Images),
            ListKind::Images => Some(ListKind::Os),
            ListKind::Os => None,
        }
    }

    pub fn value_header(&self) -> &'static str {
        match self {
            ListKind::Icons => "Icon class",
            ListKind::Images => "Image key",
            ListKind::Os => "Value",
        }
    }
}

/// Icon row: label plus Font Awesome class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRow {
    pub label: String,
    pub class: String,
}

/// Image row: label plus image key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRow {
    pub label: String,
    pub key: String,
}

/// OS row: label plus optional value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRow {
    pub label: String,
    pub value: String,
}

/// Access shared by all row types
pub trait PickRow: Clone + Default {
    fn label(&self) -> &str;
    fn value(&self) -> &str;
    fn label_mut(&mut self) -> &mut String;
    fn value_mut(&mut self) -> &mut String;
}

macro_rules! impl_pick_row {
    ($row:ty, $value:ident) => {
        impl PickRow for $row {
            fn label(&self) -> &str {
                &self.label
            }
            fn value(&self) -> &str {
                &self.$value
            }
            fn label_mut(&mut self) -> &mut String {
                &mut self.label
            }
            fn value_mut(&mut self) -> &mut String {
                &mut self.$value
            }
        }
    };
}

impl_pick_row!(IconRow, class);
impl_pick_row!(ImageRow, key);
impl_pick_row!(OsRow, value);

// ─────────────────────────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────────────────────────

/// Resource input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceField {
    Fqdn,
    Width,
    Height,
}

impl ResourceField {
    pub const ALL: [ResourceField; 3] = [
        ResourceField::Fqdn,
        ResourceField::Width,
        ResourceField::Height,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceField::Fqdn => "image fqdn",
            ResourceField::Width => "image width",
            ResourceField::Height => "image height",
        }
    }
}

/// Column of a list row. Only the handle starts a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColumn {
    Handle,
    Label,
    Value,
}

impl RowColumn {
    pub fn next(self) -> Self {
        match self {
            RowColumn::Handle => RowColumn::Label,
            RowColumn::Label => RowColumn::Value,
            RowColumn::Value => RowColumn::Handle,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RowColumn::Handle => RowColumn::Value,
            RowColumn::Label => RowColumn::Handle,
            RowColumn::Value => RowColumn::Label,
        }
    }
}

/// Focused element of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    Resource(ResourceField),
    Row {
        list: ListKind,
        row: usize,
        column: RowColumn,
    },
}

impl Default for EditorFocus {
    fn default() -> Self {
        EditorFocus::Resource(ResourceField::Fqdn)
    }
}

/// A row being moved with the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub list: ListKind,
    /// Position the row started at, restored on cancel
    pub origin: usize,
}

/// Searchable icon-class list opened for one icon row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconPickerState {
    /// Icon row being edited
    pub row: usize,
    pub query: String,
    /// Classes matching the query
    pub matches: Vec<String>,
    /// Index into `matches`
    pub selected: usize,
}

impl IconPickerState {
    pub fn new(row: usize, glyphs: &GlyphMap, current: &str) -> Self {
        let mut picker = Self {
            row,
            ..Default::default()
        };
        picker.refilter(glyphs);
        let current = normalize_class(current);
        if let Some(pos) = picker.matches.iter().position(|c| *c == current) {
            picker.selected = pos;
        }
        picker
    }

    pub fn input_char(&mut self, c: char, glyphs: &GlyphMap) {
        self.query.push(c);
        self.refilter(glyphs);
    }

    pub fn backspace(&mut self, glyphs: &GlyphMap) {
        self.query.pop();
        self.refilter(glyphs);
    }

    fn refilter(&mut self, glyphs: &GlyphMap) {
        self.matches = glyphs
            .search(&self.query)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.selected = 0;
    }

    pub fn navigate_up(&mut self) {
        if !self.matches.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.matches.len() - 1);
        }
    }

    pub fn navigate_down(&mut self) {
        if !self.matches.is_empty() {
            self.selected = (self.selected + 1) % self.matches.len();
        }
    }

    pub fn selected_class(&self) -> Option<&str> {
        self.matches.get(self.selected).map(String::as_str)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// A blocking problem attached to one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub list: ListKind,
    pub row: usize,
    pub message: String,
}

/// Result of validating the editor contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Resource problems, blocking
    pub errors: Vec<String>,
    /// Duplicate labels and keys, advisory
    pub infos: Vec<String>,
    /// Row problems, blocking
    pub row_errors: Vec<RowError>,
}

impl ValidationReport {
    pub fn has_blocking(&self) -> bool {
        !self.errors.is_empty() || !self.row_errors.is_empty()
    }

    /// Blocking messages in production order, deduplicated
    pub fn blocking_messages(&self) -> Vec<String> {
        let mut out = self.errors.clone();
        for err in &self.row_errors {
            push_unique(&mut out, err.message.clone());
        }
        out
    }

    /// Last message attached to a row, shown beside it
    pub fn row_message(&self, list: ListKind, row: usize) -> Option<&str> {
        self.row_errors
            .iter()
            .rev()
            .find(|e| e.list == list && e.row == row)
            .map(|e| e.message.as_str())
    }
}

fn push_unique(messages: &mut Vec<String>, message: String) {
    if !messages.contains(&message) {
        messages.push(message);
    }
}

/// Blocking problems with the image resources
pub fn resource_errors(resources: &Resources) -> Vec<String> {
    let mut errors = Vec::new();
    if resources.image_fqdn.trim().is_empty() {
        errors.push("Resources: \"image fqdn\" is empty.".to_string());
    }
    if resources.image_width.filter(|w| *w > 0).is_none() {
        errors.push(
            "Resources: \"image width\" must be present and a positive number.".to_string(),
        );
    }
    if resources.image_height.filter(|h| *h > 0).is_none() {
        errors.push(
            "Resources: \"image height\" must be present and a positive number.".to_string(),
        );
    }
    errors
}

/// Validate a configuration exactly as stored.
///
/// Loading into the editor fills a missing or zero size with the default, so
/// the resources are checked on the parsed values instead.
pub fn validate_config(config: &SelectConfig) -> ValidationReport {
    let mut editor = SelectEditor::new();
    editor.load_config(config);
    let mut report = editor.validate();
    report.errors = resource_errors(&config.resources);
    report
}

/// Count trimmed non-empty values in first-seen order
fn count_values<'a>(values: impl Iterator<Item = &'a str>) -> IndexMap<&'a str, usize> {
    let mut counts = IndexMap::new();
    for value in values.map(str::trim).filter(|v| !v.is_empty()) {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

fn parse_dimension(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64)
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────────────────────────

/// The pick-list editor
#[derive(Debug, Clone, Default)]
pub struct SelectEditor {
    pub image_fqdn: String,
    pub image_width: String,
    pub image_height: String,

    pub icons: Vec<IconRow>,
    pub images: Vec<ImageRow>,
    pub os: Vec<OsRow>,

    pub focus: EditorFocus,
    pub drag: Option<DragState>,
    pub picker: Option<IconPickerState>,

    dirty: bool,
    /// Re-entrancy guard held while a rebuild runs
    building: bool,
    output: String,
    report: ValidationReport,
}

impl SelectEditor {
    pub fn new() -> Self {
        let mut editor = Self::default();
        editor.load_config(&SelectConfig::builtin());
        editor
    }

    /// Replace every field and row with the contents of `config`
    pub fn load_config(&mut self, config: &SelectConfig) {
        let resources = &config.resources;
        self.image_fqdn = resources.image_fqdn.clone();
        self.image_width = resources
            .image_width
            .filter(|w| *w != 0)
            .unwrap_or(vmnotes_core::DEFAULT_IMAGE_SIZE)
            .to_string();
        self.image_height = resources
            .image_height
            .filter(|h| *h != 0)
            .unwrap_or(vmnotes_core::DEFAULT_IMAGE_SIZE)
            .to_string();

        self.icons = config
            .select01
            .iter()
            .map(|(label, opt)| IconRow {
                label: label.clone(),
                class: opt.fa_objects.clone(),
            })
            .collect();
        self.images = config
            .select02
            .iter()
            .map(|(label, key)| ImageRow {
                label: label.clone(),
                key: key.clone(),
            })
            .collect();
        self.os = config
            .select03
            .iter()
            .map(|(label, value)| OsRow {
                label: label.clone(),
                value: value.clone(),
            })
            .collect();

        self.focus = EditorFocus::default();
        self.drag = None;
        self.picker = None;
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn row_count(&self, list: ListKind) -> usize {
        match list {
            ListKind::Icons => self.icons.len(),
            ListKind::Images => self.images.len(),
            ListKind::Os => self.os.len(),
        }
    }

    pub fn label_at(&self, list: ListKind, row: usize) -> Option<&str> {
        match list {
            ListKind::Icons => self.icons.get(row).map(|r| r.label()),
            ListKind::Images => self.images.get(row).map(|r| r.label()),
            ListKind::Os => self.os.get(row).map(|r| r.label()),
        }
    }

    pub fn value_at(&self, list: ListKind, row: usize) -> Option<&str> {
        match list {
            ListKind::Icons => self.icons.get(row).map(|r| r.value()),
            ListKind::Images => self.images.get(row).map(|r| r.value()),
            ListKind::Os => self.os.get(row).map(|r| r.value()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Structural edits
    // ─────────────────────────────────────────────────────────────────────

    /// Append a blank row and focus its label
    pub fn add_row(&mut self, list: ListKind) {
        let row = self.row_count(list);
        match list {
            ListKind::Icons => self.icons.push(IconRow::default()),
            ListKind::Images => self.images.push(ImageRow::default()),
            ListKind::Os => self.os.push(OsRow::default()),
        }
        self.focus = EditorFocus::Row {
            list,
            row,
            column: RowColumn::Label,
        };
        self.mark_dirty();
    }

    /// Remove a row immediately
    pub fn remove_row(&mut self, list: ListKind, row: usize) -> bool {
        if row >= self.row_count(list) {
            return false;
        }
        match list {
            ListKind::Icons => {
                self.icons.remove(row);
            }
            ListKind::Images => {
                self.images.remove(row);
            }
            ListKind::Os => {
                self.os.remove(row);
            }
        }
        self.clamp_focus();
        self.mark_dirty();
        true
    }

    /// Move a row to a new position within its list
    pub fn move_row(&mut self, list: ListKind, from: usize, to: usize) -> bool {
        fn shift<T>(rows: &mut Vec<T>, from: usize, to: usize) -> bool {
            if from >= rows.len() || to >= rows.len() {
                return false;
            }
            let row = rows.remove(from);
            rows.insert(to, row);
            true
        }
        let moved = match list {
            ListKind::Icons => shift(&mut self.icons, from, to),
            ListKind::Images => shift(&mut self.images, from, to),
            ListKind::Os => shift(&mut self.os, from, to),
        };
        if moved {
            self.mark_dirty();
        }
        moved
    }

    /// Stable natural sort of one list by label
    pub fn sort(&mut self, list: ListKind) {
        fn sort_rows<R: PickRow>(rows: &mut [R]) {
            rows.sort_by(|a, b| natural_cmp(a.label(), b.label()));
        }
        match list {
            ListKind::Icons => sort_rows(&mut self.icons),
            ListKind::Images => sort_rows(&mut self.images),
            ListKind::Os => sort_rows(&mut self.os),
        }
        self.mark_dirty();
    }

    pub fn sort_all(&mut self) {
        for list in ListKind::ALL {
            self.sort(list);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Drag
    // ─────────────────────────────────────────────────────────────────────

    /// Grab the focused row. Only possible from the handle column.
    pub fn begin_drag(&mut self) -> bool {
        match self.focus {
            EditorFocus::Row {
                list,
                row,
                column: RowColumn::Handle,
            } if row < self.row_count(list) => {
                self.drag = Some(DragState { list, origin: row });
                true
            }
            _ => false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Move the grabbed row one step; `up` moves towards index 0
    pub fn drag_step(&mut self, up: bool) {
        let (Some(drag), EditorFocus::Row { row, column, .. }) = (self.drag, self.focus) else {
            return;
        };
        let target = if up {
            match row.checked_sub(1) {
                Some(t) => t,
                None => return,
            }
        } else {
            row + 1
        };
        if self.move_row(drag.list, row, target) {
            self.focus = EditorFocus::Row {
                list: drag.list,
                row: target,
                column,
            };
        }
    }

    /// Drop the grabbed row where it is
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Put the grabbed row back where it started
    pub fn cancel_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if let EditorFocus::Row { row, column, .. } = self.focus {
            if self.move_row(drag.list, row, drag.origin) {
                self.focus = EditorFocus::Row {
                    list: drag.list,
                    row: drag.origin,
                    column,
                };
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus and text input
    // ─────────────────────────────────────────────────────────────────────

    /// Ordered focus stops: resource fields, then every row of every list
    fn focus_stops(&self) -> Vec<EditorFocus> {
        let mut stops: Vec<EditorFocus> = ResourceField::ALL
            .iter()
            .map(|f| EditorFocus::Resource(*f))
            .collect();
        for list in ListKind::ALL {
            for row in 0..self.row_count(list) {
                stops.push(EditorFocus::Row {
                    list,
                    row,
                    column: RowColumn::Label,
                });
            }
        }
        stops
    }

    fn focus_index(&self, stops: &[EditorFocus]) -> usize {
        let current = match self.focus {
            EditorFocus::Row { list, row, .. } => EditorFocus::Row {
                list,
                row,
                column: RowColumn::Label,
            },
            other => other,
        };
        stops.iter().position(|s| *s == current).unwrap_or(0)
    }

    /// Move to the next field or row, keeping the current column
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let stops = self.focus_stops();
        let len = stops.len() as isize;
        let idx = self.focus_index(&stops) as isize;
        let next = stops[((idx + delta).rem_euclid(len)) as usize];
        let column = match self.focus {
            EditorFocus::Row { column, .. } => column,
            EditorFocus::Resource(_) => RowColumn::Label,
        };
        self.focus = match next {
            EditorFocus::Row { list, row, .. } => EditorFocus::Row { list, row, column },
            other => other,
        };
    }

    /// Jump to the first row of the next non-empty list, wrapping to the resources
    pub fn focus_next_section(&mut self) {
        let mut candidate = match self.focus {
            EditorFocus::Resource(_) => Some(ListKind::Icons),
            EditorFocus::Row { list, .. } => list.next(),
        };
        while let Some(list) = candidate {
            if self.row_count(list) > 0 {
                self.focus = EditorFocus::Row {
                    list,
                    row: 0,
                    column: RowColumn::Label,
                };
                return;
            }
            candidate = list.next();
        }
        self.focus = EditorFocus::default();
    }

    pub fn column_next(&mut self) {
        if let EditorFocus::Row { column, .. } = &mut self.focus {
            *column = column.next();
        }
    }

    pub fn column_prev(&mut self) {
        if let EditorFocus::Row { column, .. } = &mut self.focus {
            *column = column.prev();
        }
    }

    /// The list the focus is in, if any
    pub fn focused_list(&self) -> Option<ListKind> {
        match self.focus {
            EditorFocus::Row { list, .. } => Some(list),
            EditorFocus::Resource(_) => None,
        }
    }

    fn clamp_focus(&mut self) {
        if let EditorFocus::Row { list, row, column } = self.focus {
            let count = self.row_count(list);
            self.focus = if count == 0 {
                EditorFocus::default()
            } else {
                EditorFocus::Row {
                    list,
                    row: row.min(count - 1),
                    column,
                }
            };
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            EditorFocus::Resource(ResourceField::Fqdn) => Some(&mut self.image_fqdn),
            EditorFocus::Resource(ResourceField::Width) => Some(&mut self.image_width),
            EditorFocus::Resource(ResourceField::Height) => Some(&mut self.image_height),
            EditorFocus::Row { column: RowColumn::Handle, .. } => None,
            EditorFocus::Row { list, row, column } => match list {
                ListKind::Icons => Some(cell_mut(self.icons.get_mut(row)?, column)),
                ListKind::Images => Some(cell_mut(self.images.get_mut(row)?, column)),
                ListKind::Os => Some(cell_mut(self.os.get_mut(row)?, column)),
            },
        }
    }

    /// Type into the focused cell
    pub fn input_char(&mut self, c: char) -> bool {
        let numeric = matches!(
            self.focus,
            EditorFocus::Resource(ResourceField::Width | ResourceField::Height)
        );
        if numeric && !c.is_ascii_digit() {
            return false;
        }
        match self.focused_text_mut() {
            Some(text) => {
                text.push(c);
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.focused_text_mut() {
            Some(text) => {
                text.pop();
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Set the class of an icon row (from the picker)
    pub fn set_icon_class(&mut self, row: usize, class: &str) {
        if let Some(icon) = self.icons.get_mut(row) {
            icon.class = normalize_class(class);
            self.mark_dirty();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Icon picker
    // ─────────────────────────────────────────────────────────────────────

    /// Open the picker for the focused icon row
    pub fn open_picker(&mut self, glyphs: &GlyphMap) -> bool {
        match self.focus {
            EditorFocus::Row {
                list: ListKind::Icons,
                row,
                ..
            } if row < self.icons.len() => {
                self.picker = Some(IconPickerState::new(row, glyphs, &self.icons[row].class));
                true
            }
            _ => false,
        }
    }

    /// Apply the highlighted class and close the picker
    pub fn confirm_picker(&mut self) {
        if let Some(picker) = self.picker.take() {
            if let Some(class) = picker.selected_class() {
                self.set_icon_class(picker.row, class);
            }
        }
    }

    pub fn cancel_picker(&mut self) {
        self.picker = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rebuild
    // ─────────────────────────────────────────────────────────────────────

    /// Resources as they would be exported
    pub fn resources(&self) -> Resources {
        Resources {
            image_fqdn: self.image_fqdn.trim().to_string(),
            image_width: parse_dimension(&self.image_width),
            image_height: parse_dimension(&self.image_height),
        }
    }

    /// Build the exportable configuration.
    ///
    /// Rows with an empty label are left out, image rows also when the key is
    /// empty. OS rows fall back to their label as value.
    pub fn build_config(&self, glyphs: &GlyphMap) -> SelectConfig {
        let mut select01 = IndexMap::new();
        for row in &self.icons {
            let label = row.label.trim();
            if label.is_empty() {
                continue;
            }
            let class = normalize_class(&row.class);
            let text = glyphs.display_text(label, &class);
            select01.insert(label.to_string(), IconOption::new(class, text));
        }

        let mut select02 = IndexMap::new();
        for row in &self.images {
            let (label, key) = (row.label.trim(), row.key.trim());
            if label.is_empty() || key.is_empty() {
                continue;
            }
            select02.insert(label.to_string(), key.to_string());
        }

        let mut select03 = IndexMap::new();
        for row in &self.os {
            let label = row.label.trim();
            if label.is_empty() {
                continue;
            }
            let value = match row.value.trim() {
                "" => label,
                v => v,
            };
            select03.insert(label.to_string(), value.to_string());
        }

        SelectConfig {
            resources: self.resources(),
            select01,
            select02,
            select03,
        }
    }

    /// Check the current contents
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport {
            errors: resource_errors(&self.resources()),
            ..Default::default()
        };

        let mut row_error = |list: ListKind, row: usize, message: &str| {
            report.row_errors.push(RowError {
                list,
                row,
                message: message.to_string(),
            });
        };

        for (i, row) in self.icons.iter().enumerate() {
            if row.label.trim().is_empty() {
                row_error(ListKind::Icons, i, "Icon: Missing Name.");
            }
            if normalize_class(&row.class).is_empty() {
                row_error(ListKind::Icons, i, "Icon: Missing icon.");
            }
        }
        for (i, row) in self.images.iter().enumerate() {
            if row.label.trim().is_empty() {
                row_error(ListKind::Images, i, "Image: Missing Label.");
            }
            if row.key.trim().is_empty() {
                row_error(ListKind::Images, i, "Image: Missing key.");
            }
        }
        for (i, row) in self.os.iter().enumerate() {
            if row.label.trim().is_empty() {
                row_error(ListKind::Os, i, "OS: Missing Label.");
            }
        }

        let duplicates = [
            (
                "Icon: Duplicate name",
                count_values(self.icons.iter().map(|r| r.label.as_str())),
            ),
            (
                "Image: Duplicate label",
                count_values(self.images.iter().map(|r| r.label.as_str())),
            ),
            (
                "Image: Duplicate key",
                count_values(self.images.iter().map(|r| r.key.as_str())),
            ),
            (
                "OS: Duplicate label",
                count_values(self.os.iter().map(|r| r.label.as_str())),
            ),
        ];
        for (prefix, counts) in duplicates {
            for (value, count) in counts {
                if count > 1 {
                    push_unique(
                        &mut report.infos,
                        format!("{prefix} \"{value}\" (allowed)."),
                    );
                }
            }
        }

        report
    }

    /// Rebuild the output and validation report.
    ///
    /// Returns false without doing anything while another rebuild holds the
    /// guard.
    pub fn flush(&mut self, glyphs: &GlyphMap) -> bool {
        if self.building {
            trace!("Rebuild already running, skipped");
            return false;
        }
        self.building = true;

        self.report = self.validate();
        self.output = match self.build_config(glyphs).to_json_pretty() {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize select configuration: {}", e);
                String::new()
            }
        };
        self.dirty = false;

        self.building = false;
        true
    }

    /// Flush if dirty
    pub fn refresh(&mut self, glyphs: &GlyphMap) {
        if self.dirty {
            self.flush(glyphs);
        }
    }

    /// Exported JSON, rebuilt first when stale
    pub fn output(&mut self, glyphs: &GlyphMap) -> &str {
        self.refresh(glyphs);
        &self.output
    }

    /// Validation report, rebuilt first when stale
    pub fn report(&mut self, glyphs: &GlyphMap) -> &ValidationReport {
        self.refresh(glyphs);
        &self.report
    }

    /// Last built output, possibly stale
    pub fn last_output(&self) -> &str {
        &self.output
    }

    /// Last built report, possibly stale
    pub fn last_report(&self) -> &ValidationReport {
        &self.report
    }

    #[cfg(test)]
    pub(crate) fn hold_build_guard(&mut self) {
        self.building = true;
    }
}

/// Editable text of a row cell; the handle column maps to the label
fn cell_mut<R: PickRow>(row: &mut R, column: RowColumn) -> &mut String {
    match column {
        RowColumn::Value => row.value_mut(),
        RowColumn::Label | RowColumn::Handle => row.label_mut(),
    }
}
