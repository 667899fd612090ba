//! Suggestion store: remembered field values offered back as autofill
//!
//! One JSON document with seven array-valued categories. Values are only
//! ever appended, never pruned, and each category holds a value at most once.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{present, VmRecord};

/// A category of remembered values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionCategory {
    VmNames,
    OsList,
    IpAddresses,
    GuiLinks,
    Descriptions,
    Services,
    Dependencies,
}

impl SuggestionCategory {
    pub const ALL: [SuggestionCategory; 7] = [
        SuggestionCategory::VmNames,
        SuggestionCategory::OsList,
        SuggestionCategory::IpAddresses,
        SuggestionCategory::GuiLinks,
        SuggestionCategory::Descriptions,
        SuggestionCategory::Services,
        SuggestionCategory::Dependencies,
    ];

    /// Field name in the stored document
    pub fn key(&self) -> &'static str {
        match self {
            SuggestionCategory::VmNames => "vmNames",
            SuggestionCategory::OsList => "osList",
            SuggestionCategory::IpAddresses => "ipAddresses",
            SuggestionCategory::GuiLinks => "guiLinks",
            SuggestionCategory::Descriptions => "descriptions",
            SuggestionCategory::Services => "services",
            SuggestionCategory::Dependencies => "dependencies",
        }
    }
}

/// Outcome of adding a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
    Blank,
}

/// Operating systems offered before anything has been remembered
pub const DEFAULT_OS_LIST: [&str; 4] = ["Ubuntu 22.04", "CentOS 8", "Debian 11", "Windows Server 2019"];

/// The stored document.
///
/// Missing categories read as empty so partial documents still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionStore {
    #[serde(default)]
    pub vm_names: Vec<String>,
    #[serde(default)]
    pub os_list: Vec<String>,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default)]
    pub gui_links: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Default for SuggestionStore {
    fn default() -> Self {
        Self {
            vm_names: Vec::new(),
            os_list: DEFAULT_OS_LIST.iter().map(|s| s.to_string()).collect(),
            ip_addresses: Vec::new(),
            gui_links: Vec::new(),
            descriptions: Vec::new(),
            services: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}

impl SuggestionStore {
    pub fn values(&self, category: SuggestionCategory) -> &[String] {
        match category {
            SuggestionCategory::VmNames => &self.vm_names,
            SuggestionCategory::OsList => &self.os_list,
            SuggestionCategory::IpAddresses => &self.ip_addresses,
            SuggestionCategory::GuiLinks => &self.gui_links,
            SuggestionCategory::Descriptions => &self.descriptions,
            SuggestionCategory::Services => &self.services,
            SuggestionCategory::Dependencies => &self.dependencies,
        }
    }

    fn values_mut(&mut self, category: SuggestionCategory) -> &mut Vec<String> {
        match category {
            SuggestionCategory::VmNames => &mut self.vm_names,
            SuggestionCategory::OsList => &mut self.os_list,
            SuggestionCategory::IpAddresses => &mut self.ip_addresses,
            SuggestionCategory::GuiLinks => &mut self.gui_links,
            SuggestionCategory::Descriptions => &mut self.descriptions,
            SuggestionCategory::Services => &mut self.services,
            SuggestionCategory::Dependencies => &mut self.dependencies,
        }
    }

    /// Append a trimmed value unless it is blank or already stored
    pub fn add(&mut self, category: SuggestionCategory, value: &str) -> AddOutcome {
        let Some(value) = present(value) else {
            return AddOutcome::Blank;
        };
        let values = self.values_mut(category);
        if values.iter().any(|v| v == value) {
            return AddOutcome::AlreadyExists;
        }
        values.push(value.to_string());
        AddOutcome::Added
    }

    /// Remember every non-blank value of a submitted VM form.
    ///
    /// Returns how many new values were stored.
    pub fn record(&mut self, record: &VmRecord) -> usize {
        let scalars = [
            (SuggestionCategory::VmNames, record.name.as_str()),
            (SuggestionCategory::OsList, record.os.as_str()),
            (SuggestionCategory::IpAddresses, record.ip_address.as_str()),
            (SuggestionCategory::GuiLinks, record.gui_link.as_str()),
            (SuggestionCategory::Descriptions, record.description.as_str()),
        ];

        let mut added = 0;
        for (category, value) in scalars {
            if self.add(category, value) == AddOutcome::Added {
                added += 1;
            }
        }
        for service in record.filled_services() {
            if self.add(SuggestionCategory::Services, service) == AddOutcome::Added {
                added += 1;
            }
        }
        for dependency in record.filled_dependencies() {
            if self.add(SuggestionCategory::Dependencies, dependency) == AddOutcome::Added {
                added += 1;
            }
        }
        added
    }

    /// Stored values containing `input`, case-insensitive, in stored order.
    ///
    /// Values starting with the input are listed before those merely containing
    /// it. An exact match is not suggested back.
    pub fn suggest(&self, category: SuggestionCategory, input: &str) -> Vec<&str> {
        let needle = input.trim().to_lowercase();
        let mut starts = Vec::new();
        let mut contains = Vec::new();
        for value in self.values(category) {
            let lower = value.to_lowercase();
            if lower == needle {
                continue;
            }
            if lower.starts_with(&needle) {
                starts.push(value.as_str());
            } else if lower.contains(&needle) {
                contains.push(value.as_str());
            }
        }
        starts.extend(contains);
        starts
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::import(format!("Invalid JSON file: {e}")))
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
