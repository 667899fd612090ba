//! Quick VM form state
//!
//! Scalar fields plus service and dependency lists. Each list always keeps at
//! least one row so there is somewhere to type.

use vmnotes_core::{SuggestionCategory, SuggestionStore, VmRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmField {
    Name,
    Os,
    IpAddress,
    GuiLink,
    Description,
    Service(usize),
    Dependency(usize),
    /// Input of the standalone "add OS" operation
    NewOs,
}

impl VmField {
    pub fn label(&self) -> &'static str {
        match self {
            VmField::Name => "VM name",
            VmField::Os => "OS",
            VmField::IpAddress => "IP address",
            VmField::GuiLink => "GUI link",
            VmField::Description => "Description",
            VmField::Service(_) => "Service",
            VmField::Dependency(_) => "Dependency",
            VmField::NewOs => "Add OS",
        }
    }

    /// Suggestion category backing the field
    pub fn category(&self) -> Option<SuggestionCategory> {
        match self {
            VmField::Name => Some(SuggestionCategory::VmNames),
            VmField::Os | VmField::NewOs => Some(SuggestionCategory::OsList),
            VmField::IpAddress => Some(SuggestionCategory::IpAddresses),
            VmField::GuiLink => Some(SuggestionCategory::GuiLinks),
            VmField::Description => Some(SuggestionCategory::Descriptions),
            VmField::Service(_) => Some(SuggestionCategory::Services),
            VmField::Dependency(_) => Some(SuggestionCategory::Dependencies),
        }
    }
}

/// Suggestions being cycled through for the focused field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCursor {
    pub field: VmField,
    /// What the user had typed before cycling started
    pub query: String,
    pub index: usize,
}

/// The quick VM form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmFormState {
    pub name: String,
    pub os: String,
    pub ip_address: String,
    pub gui_link: String,
    pub description: String,
    pub services: Vec<String>,
    pub dependencies: Vec<String>,
    pub new_os: String,

    pub focus: VmField,
    pub suggestion: Option<SuggestionCursor>,
    /// Last generated document
    pub output: String,
}

impl Default for VmFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            os: String::new(),
            ip_address: String::new(),
            gui_link: String::new(),
            description: String::new(),
            services: vec![String::new()],
            dependencies: vec![String::new()],
            new_os: String::new(),
            focus: VmField::Name,
            suggestion: None,
            output: String::new(),
        }
    }
}

impl VmFormState {
    pub fn to_record(&self) -> VmRecord {
        VmRecord {
            name: self.name.clone(),
            os: self.os.clone(),
            ip_address: self.ip_address.clone(),
            gui_link: self.gui_link.clone(),
            description: self.description.clone(),
            services: self.services.clone(),
            dependencies: self.dependencies.clone(),
        }
    }

    /// Focus stops in screen order
    pub fn fields(&self) -> Vec<VmField> {
        let mut fields = vec![
            VmField::Name,
            VmField::Os,
            VmField::IpAddress,
            VmField::GuiLink,
            VmField::Description,
        ];
        fields.extend((0..self.services.len()).map(VmField::Service));
        fields.extend((0..self.dependencies.len()).map(VmField::Dependency));
        fields.push(VmField::NewOs);
        fields
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let fields = self.fields();
        let len = fields.len() as isize;
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        self.focus = fields[((idx + delta).rem_euclid(len)) as usize];
        self.suggestion = None;
    }

    pub fn value(&self, field: VmField) -> &str {
        match field {
            VmField::Name => &self.name,
            VmField::Os => &self.os,
            VmField::IpAddress => &self.ip_address,
            VmField::GuiLink => &self.gui_link,
            VmField::Description => &self.description,
            VmField::Service(i) => self.services.get(i).map(String::as_str).unwrap_or(""),
            VmField::Dependency(i) => self.dependencies.get(i).map(String::as_str).unwrap_or(""),
            VmField::NewOs => &self.new_os,
        }
    }

    fn value_mut(&mut self, field: VmField) -> Option<&mut String> {
        match field {
            VmField::Name => Some(&mut self.name),
            VmField::Os => Some(&mut self.os),
            VmField::IpAddress => Some(&mut self.ip_address),
            VmField::GuiLink => Some(&mut self.gui_link),
            VmField::Description => Some(&mut self.description),
            VmField::Service(i) => self.services.get_mut(i),
            VmField::Dependency(i) => self.dependencies.get_mut(i),
            VmField::NewOs => Some(&mut self.new_os),
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.suggestion = None;
        if let Some(value) = self.value_mut(self.focus) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.suggestion = None;
        if let Some(value) = self.value_mut(self.focus) {
            value.pop();
        }
    }

    /// Add a row to the focused list, services when neither list is focused
    pub fn add_row(&mut self) {
        self.focus = match self.focus {
            VmField::Dependency(_) => {
                self.dependencies.push(String::new());
                VmField::Dependency(self.dependencies.len() - 1)
            }
            _ => {
                self.services.push(String::new());
                VmField::Service(self.services.len() - 1)
            }
        };
        self.suggestion = None;
    }

    /// Remove the focused list row; the last row of a list stays
    pub fn remove_row(&mut self) -> bool {
        let focus = match self.focus {
            VmField::Service(i) => remove_keeping_one(&mut self.services, i).map(VmField::Service),
            VmField::Dependency(i) => {
                remove_keeping_one(&mut self.dependencies, i).map(VmField::Dependency)
            }
            _ => None,
        };
        match focus {
            Some(focus) => {
                self.focus = focus;
                self.suggestion = None;
                true
            }
            None => false,
        }
    }

    /// Replace the focused value with the next stored suggestion.
    ///
    /// The first call remembers what was typed; later calls step through the
    /// matches for that text. Returns false when nothing matches.
    pub fn cycle_suggestion(&mut self, store: &SuggestionStore) -> bool {
        let field = self.focus;
        let Some(category) = field.category() else {
            return false;
        };

        let (query, index) = match &self.suggestion {
            Some(cursor) if cursor.field == field => (cursor.query.clone(), cursor.index + 1),
            _ => (self.value(field).to_string(), 0),
        };
        let matches = store.suggest(category, &query);
        if matches.is_empty() {
            return false;
        }
        let index = index % matches.len();
        let chosen = matches[index].to_string();

        if let Some(value) = self.value_mut(field) {
            *value = chosen;
        }
        self.suggestion = Some(SuggestionCursor {
            field,
            query,
            index,
        });
        true
    }

    /// Suggestions for the focused field's current text
    pub fn visible_suggestions<'a>(&self, store: &'a SuggestionStore) -> Vec<&'a str> {
        let field = self.focus;
        let query = match &self.suggestion {
            Some(cursor) if cursor.field == field => cursor.query.as_str(),
            _ => self.value(field),
        };
        match field.category() {
            Some(category) if !query.trim().is_empty() => store.suggest(category, query),
            _ => Vec::new(),
        }
    }
}

/// Remove row `i` unless it is the only one; returns the index to focus next
fn remove_keeping_one(list: &mut Vec<String>, i: usize) -> Option<usize> {
    if list.len() <= 1 || i >= list.len() {
        return None;
    }
    list.remove(i);
    Some(i.min(list.len() - 1))
}
