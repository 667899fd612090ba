//! Configuration types for vmnotes
//!
//! Defines:
//! - `Settings` - Application settings from `.vmnotes/config.toml`
//! - `ConfigSource` - Where the active select configuration came from
//! - Related sub-types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings (.vmnotes/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub files: FileSettings,

    #[serde(default)]
    pub suggestions: SuggestionSettings,

    #[serde(default)]
    pub editor: EditorSettings,
}

/// Input and output file locations.
///
/// Relative paths are resolved against the working directory vmnotes was
/// started in.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileSettings {
    /// The user's select configuration
    #[serde(default = "default_select_path")]
    pub select: PathBuf,

    /// Fallback configuration shipped as an example
    #[serde(default = "default_example_path")]
    pub example: PathBuf,

    /// Font Awesome style sheet used to resolve icon glyphs
    #[serde(default = "default_stylesheet_path")]
    pub stylesheet: PathBuf,

    /// Directory notes state files are saved to
    #[serde(default = "default_notes_dir")]
    pub notes_dir: PathBuf,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            select: default_select_path(),
            example: default_example_path(),
            stylesheet: default_stylesheet_path(),
            notes_dir: default_notes_dir(),
        }
    }
}

fn default_select_path() -> PathBuf {
    PathBuf::from("select.json")
}

fn default_example_path() -> PathBuf {
    PathBuf::from("select-example.json")
}

fn default_stylesheet_path() -> PathBuf {
    PathBuf::from("css/font-awesome.css")
}

fn default_notes_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Suggestion store location
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SuggestionSettings {
    /// Override for the store file; defaults to the user data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Pick-list editor behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Rebuild a dirty editor on every tick instead of only on read
    #[serde(default = "default_true")]
    pub rebuild_on_tick: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            rebuild_on_tick: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Resolve a configured path against the working directory
    pub fn resolve(&self, base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }

    pub fn select_path(&self, base: &Path) -> PathBuf {
        self.resolve(base, &self.files.select)
    }

    pub fn example_path(&self, base: &Path) -> PathBuf {
        self.resolve(base, &self.files.example)
    }

    pub fn stylesheet_path(&self, base: &Path) -> PathBuf {
        self.resolve(base, &self.files.stylesheet)
    }

    pub fn notes_dir(&self, base: &Path) -> PathBuf {
        self.resolve(base, &self.files.notes_dir)
    }

    /// Suggestion store file: the override, else `{data_local_dir}/vmnotes/suggestions.json`
    pub fn suggestions_path(&self, base: &Path) -> PathBuf {
        match &self.suggestions.path {
            Some(path) => self.resolve(base, path),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| base.to_path_buf())
                .join("vmnotes")
                .join("suggestions.json"),
        }
    }
}

/// Where the active select configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The user's own `select.json`
    Saved,
    /// The example configuration, because `select.json` could not be used
    Example,
    /// Built-in defaults, because neither file could be used
    Defaults,
}

impl ConfigSource {
    /// Banner shown on the pick-list screen
    pub fn banner(&self, select_name: &str) -> Option<String> {
        match self {
            ConfigSource::Saved => Some(format!("Info: Your {select_name} is loaded.")),
            ConfigSource::Example => Some(format!(
                "Notice: Example file loaded. When you are done, save the file as {select_name}."
            )),
            ConfigSource::Defaults => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.files.select, PathBuf::from("select.json"));
        assert_eq!(settings.files.example, PathBuf::from("select-example.json"));
        assert!(settings.editor.rebuild_on_tick);
        assert!(settings.suggestions.path.is_none());
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let settings = Settings::default();
        let base = Path::new("/work");
        assert_eq!(
            settings.select_path(base),
            PathBuf::from("/work/select.json")
        );
        assert_eq!(
            settings.resolve(base, Path::new("/etc/select.json")),
            PathBuf::from("/etc/select.json")
        );
    }

    #[test]
    fn test_suggestions_path_override() {
        let mut settings = Settings::default();
        settings.suggestions.path = Some(PathBuf::from("data/suggestions.json"));
        assert_eq!(
            settings.suggestions_path(Path::new("/work")),
            PathBuf::from("/work/data/suggestions.json")
        );
    }

    #[test]
    fn test_suggestions_path_default_in_data_dir() {
        let settings = Settings::default();
        let path = settings.suggestions_path(Path::new("/work"));
        assert!(path.ends_with("vmnotes/suggestions.json"));
    }

    #[test]
    fn test_banner_distinguishes_sources() {
        assert_eq!(
            ConfigSource::Saved.banner("select.json").as_deref(),
            Some("Info: Your select.json is loaded.")
        );
        assert!(ConfigSource::Example
            .banner("select.json")
            .unwrap()
            .starts_with("Notice: Example file loaded."));
        assert!(ConfigSource::Defaults.banner("select.json").is_none());
    }
}
