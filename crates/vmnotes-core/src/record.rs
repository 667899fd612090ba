//! Form model snapshots
//!
//! Two record shapes exist:
//! - [`VmRecord`] - the quick VM description (name, OS, IP, GUI link, services,
//!   dependencies) rendered as a bullet list.
//! - [`NotesRecord`] - the richer notes panel (icon, title, image, two text
//!   blocks and four sections of rows) rendered as HTML-decorated tables.
//!
//! Both are plain snapshots of what the user typed. Blank and whitespace-only
//! values count as absent when a document is generated.

use serde::{Deserialize, Serialize};

/// Returns the trimmed value, or `None` when it is blank.
pub fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// VM Record
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot of the quick VM form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VmRecord {
    pub name: String,
    pub os: String,
    pub ip_address: String,
    pub gui_link: String,
    pub description: String,
    pub services: Vec<String>,
    pub dependencies: Vec<String>,
}

impl VmRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Non-blank services, trimmed, in entry order
    pub fn filled_services(&self) -> Vec<&str> {
        self.services.iter().filter_map(|s| present(s)).collect()
    }

    /// Non-blank dependencies, trimmed, in entry order
    pub fn filled_dependencies(&self) -> Vec<&str> {
        self.dependencies.iter().filter_map(|s| present(s)).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notes Record
// ─────────────────────────────────────────────────────────────────────────────

/// Header block of a notes record.
///
/// Serialized with the short field names used by saved notes files
/// (`s1`, `t1`, `s2`, `m1`, `m2`); the descriptive names are accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesHeader {
    /// Font Awesome class of the title icon (`fa-linux`)
    #[serde(rename = "s1", alias = "icon")]
    pub icon: String,
    /// Title text, usually the VM or container name
    #[serde(rename = "t1", alias = "title")]
    pub title: String,
    /// Image key appended to the resource base URL
    #[serde(rename = "s2", alias = "image")]
    pub image: String,
    /// Primary descriptive text shown beside the image
    #[serde(rename = "m1", alias = "summary")]
    pub summary: String,
    /// Free text under the Notes heading
    #[serde(rename = "m2", alias = "notes")]
    pub notes: String,
}

/// A label/value row of the creation, network or access section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValueRow {
    #[serde(rename = "k", alias = "key")]
    pub key: String,
    #[serde(rename = "v", alias = "value")]
    pub value: String,
}

impl KeyValueRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        present(&self.key).is_none() && present(&self.value).is_none()
    }
}

/// A name/URL row of the services section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRow {
    #[serde(rename = "n", alias = "name")]
    pub name: String,
    #[serde(rename = "u", alias = "url")]
    pub url: String,
}

impl ServiceRow {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        present(&self.name).is_none() && present(&self.url).is_none()
    }
}

/// The four named sections of a notes record, each in user-entered order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub creation: Vec<KeyValueRow>,
    pub network: Vec<KeyValueRow>,
    pub services: Vec<ServiceRow>,
    pub access: Vec<KeyValueRow>,
}

/// Identifies one of the four notes sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Creation,
    Network,
    Services,
    Access,
}

impl SectionId {
    /// All sections in document order
    pub const ALL: [SectionId; 4] = [
        SectionId::Creation,
        SectionId::Network,
        SectionId::Services,
        SectionId::Access,
    ];

    /// Font Awesome class of the section decoration
    pub fn icon(&self) -> &'static str {
        match self {
            SectionId::Creation => "fa-exclamation-circle",
            SectionId::Network => "fa-sitemap",
            SectionId::Services => "fa-cogs",
            SectionId::Access => "fa-key",
        }
    }

    /// Section title as it appears in the document
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Creation => "Creation:",
            SectionId::Network => "Network:",
            SectionId::Services => "Services:",
            SectionId::Access => "Access:",
        }
    }

    /// Short label for the form UI
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Creation => "Creation",
            SectionId::Network => "Network",
            SectionId::Services => "Services",
            SectionId::Access => "Access",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SectionId::Creation => SectionId::Network,
            SectionId::Network => SectionId::Services,
            SectionId::Services => SectionId::Access,
            SectionId::Access => SectionId::Creation,
        }
    }
}

/// Snapshot of the notes form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesRecord {
    #[serde(rename = "h", alias = "header", default)]
    pub header: NotesHeader,
    #[serde(default)]
    pub sections: Sections,
}

/// File name used when the title is blank
pub const DEFAULT_NOTES_FILE_STEM: &str = "proxmox_notes_config";

impl NotesRecord {
    /// Parse a saved notes state document
    pub fn from_json(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize as a compact notes state document
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// File name a saved state should get: `{title}.json`
    pub fn file_name(&self) -> String {
        let stem = present(&self.header.title).unwrap_or(DEFAULT_NOTES_FILE_STEM);
        format!("{}.json", sanitize_file_stem(stem))
    }

    /// Number of rows across all sections
    pub fn row_count(&self) -> usize {
        self.sections.creation.len()
            + self.sections.network.len()
            + self.sections.services.len()
            + self.sections.access.len()
    }
}

/// Replace path separators and control characters so a title can be a file name
fn sanitize_file_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
