//! Settings parser for .vmnotes/config.toml

use super::types::Settings;
use vmnotes_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const VMNOTES_DIR: &str = ".vmnotes";

/// Load settings from `.vmnotes/config.toml`.
///
/// A missing file or one that fails to parse yields the defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(VMNOTES_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.vmnotes/config.toml` with commented defaults if it does not exist
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let vmnotes_dir = project_path.join(VMNOTES_DIR);

    if !vmnotes_dir.exists() {
        std::fs::create_dir_all(&vmnotes_dir)
            .map_err(|e| Error::config(format!("Failed to create .vmnotes dir: {}", e)))?;
        info!("Created .vmnotes directory");
    }

    let config_path = vmnotes_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config.toml");
    }

    Ok(())
}

/// Save settings atomically (temp file, then rename)
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let vmnotes_dir = project_path.join(VMNOTES_DIR);

    if !vmnotes_dir.exists() {
        std::fs::create_dir_all(&vmnotes_dir)
            .map_err(|e| Error::config(format!("Failed to create .vmnotes dir: {}", e)))?;
    }

    let config_path = vmnotes_dir.join(CONFIG_FILENAME);
    let temp_path = vmnotes_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

fn generate_config_header() -> String {
    r#"# vmnotes configuration
# Generated by vmnotes

"#
    .to_string()
}

fn generate_default_config() -> String {
    r#"# vmnotes configuration
# Relative paths are resolved against the directory vmnotes is started in.

[files]
select = "select.json"                 # Pick-list configuration
example = "select-example.json"        # Used when select.json is missing or invalid
stylesheet = "css/font-awesome.css"    # Source of icon glyphs
notes_dir = "."                        # Where notes state files are saved

[suggestions]
# path = "suggestions.json"            # Defaults to the user data directory

[editor]
rebuild_on_tick = true                 # Rebuild the pick-list output on every tick
"#
    .to_string()
}
