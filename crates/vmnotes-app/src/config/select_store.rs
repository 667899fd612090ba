//! Select configuration persistence
//!
//! Loading walks a fallback chain: the user's `select.json`, then the example
//! file, then the built-in defaults. Saving overwrites the whole file under an
//! exclusive lock.

use super::types::ConfigSource;
use fs2::FileExt;
use std::io::Write;
use std::path::Path;
use vmnotes_core::prelude::*;
use vmnotes_core::SelectConfig;

/// A configuration together with where it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSelect {
    pub config: SelectConfig,
    pub source: ConfigSource,
}

/// Read and parse one select configuration file
pub fn read_select_config(path: &Path) -> Result<SelectConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::config_not_found(path));
        }
        Err(e) => return Err(e.into()),
    };
    SelectConfig::from_json(&content, path)
}

/// Load the primary file, else the example file, else built-in defaults.
///
/// Never fails; each failed step is logged.
pub fn load_select_config(primary: &Path, example: &Path) -> LoadedSelect {
    match read_select_config(primary) {
        Ok(config) => {
            info!("Loaded select configuration from {:?}", primary);
            return LoadedSelect {
                config,
                source: ConfigSource::Saved,
            };
        }
        Err(Error::ConfigNotFound { .. }) => {
            debug!("No select configuration at {:?}", primary);
        }
        Err(e) => warn!("Could not use {:?}: {}", primary, e),
    }

    match read_select_config(example) {
        Ok(config) => {
            info!("Loaded example select configuration from {:?}", example);
            LoadedSelect {
                config,
                source: ConfigSource::Example,
            }
        }
        Err(e) => {
            warn!("Could not use {:?}: {}, using built-in defaults", example, e);
            LoadedSelect {
                config: SelectConfig::builtin(),
                source: ConfigSource::Defaults,
            }
        }
    }
}

/// Overwrite `path` with `content` while holding an exclusive lock
pub fn save_select_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::config(format!("Failed to open {:?}: {}", path, e)))?;

    file.lock_exclusive()
        .map_err(|e| Error::config(format!("Failed to lock {:?}: {}", path, e)))?;

    let mut file = file;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush {:?}: {}", path, e)))?;

    info!("Saved select configuration to {:?}", path);
    Ok(())
}
