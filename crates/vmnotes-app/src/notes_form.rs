//! Notes form state
//!
//! Header fields plus four sections of rows. Each label/value row has an input
//! kind that only changes how its value is edited; the kind never reaches the
//! generated document or the saved state file.

use chrono::NaiveDate;
use vmnotes_core::{KeyValueRow, NotesHeader, NotesRecord, SectionId, Sections, SelectConfig, ServiceRow};

/// How a row value is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Text,
    /// `YYYY-MM-DD`
    Date,
    /// Yes/No
    Toggle,
    /// One of the configured OS values
    OsChoice,
}

/// A label/value row with its input kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub key: String,
    pub value: String,
    pub kind: RowKind,
}

impl FormRow {
    pub fn new(key: &str, value: &str, kind: RowKind) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            kind,
        }
    }

    pub fn text(key: &str, value: &str) -> Self {
        Self::new(key, value, RowKind::Text)
    }

    /// False for date rows holding something other than a calendar date
    pub fn is_valid(&self) -> bool {
        match self.kind {
            RowKind::Date => self.value.is_empty() || is_valid_date(&self.value),
            _ => true,
        }
    }
}

pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok()
}

/// Header inputs in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Icon,
    Title,
    Image,
    Summary,
    Notes,
}

impl HeaderField {
    pub const ALL: [HeaderField; 5] = [
        HeaderField::Icon,
        HeaderField::Title,
        HeaderField::Image,
        HeaderField::Summary,
        HeaderField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HeaderField::Icon => "Icon",
            HeaderField::Title => "Title",
            HeaderField::Image => "Image",
            HeaderField::Summary => "Description",
            HeaderField::Notes => "Notes",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, HeaderField::Summary | HeaderField::Notes)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, HeaderField::Icon | HeaderField::Image)
    }
}

/// Left or right cell of a section row. For services: name and URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCell {
    Key,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesFocus {
    Header(HeaderField),
    Row {
        section: SectionId,
        row: usize,
        cell: RowCell,
    },
}

impl Default for NotesFocus {
    fn default() -> Self {
        NotesFocus::Header(HeaderField::Icon)
    }
}

/// A pick-list entry offered by a choice field: (shown text, stored value)
pub type Choice = (String, String);

/// Icon choices: display text and icon class
pub fn icon_choices(config: &SelectConfig) -> Vec<Choice> {
    config
        .select01
        .iter()
        .map(|(label, opt)| {
            let class = config.icon_class(label).unwrap_or(label).to_string();
            let text = if opt.text.is_empty() {
                label.clone()
            } else {
                opt.text.clone()
            };
            (text, class)
        })
        .collect()
}

/// Image choices: label and image key
pub fn image_choices(config: &SelectConfig) -> Vec<Choice> {
    config
        .select02
        .iter()
        .map(|(label, key)| (label.clone(), key.clone()))
        .collect()
}

const TOGGLE_VALUES: [&str; 2] = ["Yes", "No"];

/// Step to the next (or previous) choice after `current`, wrapping
fn cycle<'a>(values: &'a [&'a str], current: &str, forward: bool) -> Option<&'a str> {
    if values.is_empty() {
        return None;
    }
    let len = values.len();
    let next = match values.iter().position(|v| *v == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    Some(values[next])
}

/// The notes form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesFormState {
    /// Icon class
    pub icon: String,
    pub title: String,
    /// Image key
    pub image: String,
    pub summary: String,
    pub notes: String,

    pub creation: Vec<FormRow>,
    pub network: Vec<FormRow>,
    pub services: Vec<ServiceRow>,
    pub access: Vec<FormRow>,

    pub focus: NotesFocus,
    /// Last generated document
    pub output: String,
}

impl NotesFormState {
    /// A fresh form with the default rows; choices start at the first option
    pub fn new(config: &SelectConfig) -> Self {
        let first_os = config
            .os_choices()
            .into_iter()
            .next()
            .map(|(_, value)| value)
            .unwrap_or_default();

        Self {
            icon: icon_choices(config)
                .into_iter()
                .next()
                .map(|(_, class)| class)
                .unwrap_or_default(),
            title: String::new(),
            image: image_choices(config)
                .into_iter()
                .next()
                .map(|(_, key)| key)
                .unwrap_or_default(),
            summary: String::new(),
            notes: String::new(),
            creation: vec![
                FormRow::new("Date", "", RowKind::Date),
                FormRow::text("Owner", ""),
                FormRow::new("OS", &first_os, RowKind::OsChoice),
                FormRow::text("Backup", ""),
            ],
            network: vec![
                FormRow::text("IP", ""),
                FormRow::text("MAC", ""),
                FormRow::new("DHCP", "No", RowKind::Toggle),
                FormRow::text("VLAN", ""),
            ],
            services: vec![ServiceRow::new("WebGUI", "https://")],
            access: vec![
                FormRow::text("User", "root"),
                FormRow::new("SSH Key", "No", RowKind::Toggle),
                FormRow::new("Password", "No", RowKind::Toggle),
            ],
            focus: NotesFocus::default(),
            output: String::new(),
        }
    }

    /// Snapshot for generation and saving
    pub fn to_record(&self) -> NotesRecord {
        let rows = |rows: &[FormRow]| -> Vec<KeyValueRow> {
            rows.iter()
                .map(|r| KeyValueRow::new(r.key.clone(), r.value.clone()))
                .collect()
        };
        NotesRecord {
            header: NotesHeader {
                icon: self.icon.clone(),
                title: self.title.clone(),
                image: self.image.clone(),
                summary: self.summary.clone(),
                notes: self.notes.clone(),
            },
            sections: Sections {
                creation: rows(&self.creation),
                network: rows(&self.network),
                services: self.services.clone(),
                access: rows(&self.access),
            },
        }
    }

    /// Replace the form with a saved record. Loaded rows are plain text.
    pub fn load_record(&mut self, record: &NotesRecord) {
        let rows = |rows: &[KeyValueRow]| -> Vec<FormRow> {
            rows.iter().map(|r| FormRow::text(&r.key, &r.value)).collect()
        };
        let header = &record.header;
        self.icon = header.icon.clone();
        self.title = header.title.clone();
        self.image = header.image.clone();
        self.summary = header.summary.clone();
        self.notes = header.notes.clone();
        self.creation = rows(&record.sections.creation);
        self.network = rows(&record.sections.network);
        self.services = record.sections.services.clone();
        self.access = rows(&record.sections.access);
        self.focus = NotesFocus::default();
    }

    pub fn section_len(&self, section: SectionId) -> usize {
        match section {
            SectionId::Creation => self.creation.len(),
            SectionId::Network => self.network.len(),
            SectionId::Services => self.services.len(),
            SectionId::Access => self.access.len(),
        }
    }

    fn rows_mut(&mut self, section: SectionId) -> Option<&mut Vec<FormRow>> {
        match section {
            SectionId::Creation => Some(&mut self.creation),
            SectionId::Network => Some(&mut self.network),
            SectionId::Access => Some(&mut self.access),
            SectionId::Services => None,
        }
    }

    /// The focused label/value row, if any
    pub fn focused_row(&self) -> Option<&FormRow> {
        match self.focus {
            NotesFocus::Row { section, row, .. } => match section {
                SectionId::Creation => self.creation.get(row),
                SectionId::Network => self.network.get(row),
                SectionId::Access => self.access.get(row),
                SectionId::Services => None,
            },
            NotesFocus::Header(_) => None,
        }
    }

    fn focused_row_mut(&mut self) -> Option<&mut FormRow> {
        match self.focus {
            NotesFocus::Row { section, row, .. } => self.rows_mut(section)?.get_mut(row),
            NotesFocus::Header(_) => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    fn focus_stops(&self) -> Vec<NotesFocus> {
        let mut stops: Vec<NotesFocus> = HeaderField::ALL
            .iter()
            .map(|f| NotesFocus::Header(*f))
            .collect();
        for section in SectionId::ALL {
            for row in 0..self.section_len(section) {
                for cell in [RowCell::Key, RowCell::Value] {
                    stops.push(NotesFocus::Row { section, row, cell });
                }
            }
        }
        stops
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let stops = self.focus_stops();
        let len = stops.len() as isize;
        let idx = stops.iter().position(|s| *s == self.focus).unwrap_or(0) as isize;
        self.focus = stops[((idx + delta).rem_euclid(len)) as usize];
    }

    fn clamp_focus(&mut self) {
        if let NotesFocus::Row { section, row, cell } = self.focus {
            let len = self.section_len(section);
            self.focus = if len == 0 {
                NotesFocus::default()
            } else {
                NotesFocus::Row {
                    section,
                    row: row.min(len - 1),
                    cell,
                }
            };
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            NotesFocus::Header(HeaderField::Title) => Some(&mut self.title),
            NotesFocus::Header(HeaderField::Summary) => Some(&mut self.summary),
            NotesFocus::Header(HeaderField::Notes) => Some(&mut self.notes),
            NotesFocus::Header(_) => None,
            NotesFocus::Row {
                section: SectionId::Services,
                row,
                cell,
            } => {
                let service = self.services.get_mut(row)?;
                Some(match cell {
                    RowCell::Key => &mut service.name,
                    RowCell::Value => &mut service.url,
                })
            }
            NotesFocus::Row { cell, .. } => {
                let row = self.focused_row_mut()?;
                match (cell, row.kind) {
                    (RowCell::Key, _) => Some(&mut row.key),
                    (RowCell::Value, RowKind::Text | RowKind::Date) => Some(&mut row.value),
                    (RowCell::Value, _) => None,
                }
            }
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) -> bool {
        let date_value = matches!(self.focus, NotesFocus::Row { cell: RowCell::Value, .. })
            && self.focused_row().map(|r| r.kind) == Some(RowKind::Date);
        if date_value && !(c.is_ascii_digit() || c == '-') {
            return false;
        }
        match self.focused_text_mut() {
            Some(text) => {
                text.push(c);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.focused_text_mut() {
            Some(text) => text.pop().is_some(),
            None => false,
        }
    }

    /// Insert a line break; only the two text blocks accept one
    pub fn newline(&mut self) -> bool {
        match self.focus {
            NotesFocus::Header(field) if field.is_multiline() => {
                if let Some(text) = self.focused_text_mut() {
                    text.push('\n');
                }
                true
            }
            _ => false,
        }
    }

    /// Step a choice or toggle field through its options
    pub fn cycle_choice(&mut self, config: &SelectConfig, forward: bool) -> bool {
        match self.focus {
            NotesFocus::Header(HeaderField::Icon) => {
                let classes: Vec<String> =
                    icon_choices(config).into_iter().map(|(_, c)| c).collect();
                Self::cycle_owned(&mut self.icon, &classes, forward)
            }
            NotesFocus::Header(HeaderField::Image) => {
                let keys: Vec<String> =
                    image_choices(config).into_iter().map(|(_, k)| k).collect();
                Self::cycle_owned(&mut self.image, &keys, forward)
            }
            NotesFocus::Row {
                cell: RowCell::Value,
                ..
            } => {
                let os_values: Vec<String> =
                    config.os_choices().into_iter().map(|(_, v)| v).collect();
                let Some(row) = self.focused_row_mut() else {
                    return false;
                };
                match row.kind {
                    RowKind::Toggle => {
                        if let Some(next) = cycle(&TOGGLE_VALUES, &row.value, forward) {
                            row.value = next.to_string();
                        }
                        true
                    }
                    RowKind::OsChoice => Self::cycle_owned(&mut row.value, &os_values, forward),
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn cycle_owned(value: &mut String, options: &[String], forward: bool) -> bool {
        let refs: Vec<&str> = options.iter().map(String::as_str).collect();
        match cycle(&refs, value, forward) {
            Some(next) => {
                *value = next.to_string();
                true
            }
            None => false,
        }
    }

    /// Fill the focused date row with `today`
    pub fn set_date(&mut self, today: NaiveDate) -> bool {
        match self.focused_row_mut() {
            Some(row) if row.kind == RowKind::Date => {
                row.value = today.format("%Y-%m-%d").to_string();
                true
            }
            _ => false,
        }
    }

    /// Append a blank row to the focused section (creation from the header)
    pub fn add_row(&mut self) {
        let section = match self.focus {
            NotesFocus::Row { section, .. } => section,
            NotesFocus::Header(_) => SectionId::Creation,
        };
        match self.rows_mut(section) {
            Some(rows) => rows.push(FormRow::text("", "")),
            None => self.services.push(ServiceRow::default()),
        }
        self.focus = NotesFocus::Row {
            section,
            row: self.section_len(section) - 1,
            cell: RowCell::Key,
        };
    }

    /// Remove the focused row
    pub fn remove_row(&mut self) -> bool {
        let NotesFocus::Row { section, row, .. } = self.focus else {
            return false;
        };
        if row >= self.section_len(section) {
            return false;
        }
        match self.rows_mut(section) {
            Some(rows) => {
                rows.remove(row);
            }
            None => {
                self.services.remove(row);
            }
        }
        self.clamp_focus();
        true
    }

    /// Display text for the selected icon
    pub fn icon_text(&self, config: &SelectConfig) -> String {
        icon_choices(config)
            .into_iter()
            .find(|(_, class)| *class == self.icon)
            .map(|(text, _)| text)
            .unwrap_or_else(|| self.icon.clone())
    }

    /// Label for the selected image key
    pub fn image_label(&self, config: &SelectConfig) -> String {
        image_choices(config)
            .into_iter()
            .find(|(_, key)| *key == self.image)
            .map(|(label, _)| label)
            .unwrap_or_else(|| self.image.clone())
    }
}
