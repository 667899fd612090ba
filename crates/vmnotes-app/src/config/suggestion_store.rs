//! Suggestion store persistence
//!
//! The store lives in a single JSON file. Loading never fails: an absent or
//! unreadable file yields the built-in defaults.

use std::path::Path;
use vmnotes_core::prelude::*;
use vmnotes_core::SuggestionStore;

/// Load the store, falling back to defaults
pub fn load_suggestions(path: &Path) -> SuggestionStore {
    if !path.exists() {
        debug!("No suggestion store at {:?}, using defaults", path);
        return SuggestionStore::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match SuggestionStore::from_json(&content) {
            Ok(store) => {
                debug!("Loaded suggestions from {:?}", path);
                store
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                SuggestionStore::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            SuggestionStore::default()
        }
    }
}

/// Write the store atomically (temp file, then rename)
pub fn save_suggestions(path: &Path, store: &SuggestionStore) -> Result<()> {
    write_atomic(path, &store.to_json_pretty()?)
        .map_err(|e| Error::storage(format!("Failed to save suggestions: {}", e)))?;
    debug!("Saved suggestions to {:?}", path);
    Ok(())
}

/// Read a user-chosen file as a replacement store.
///
/// Fails without side effects when the file is unreadable or malformed.
pub fn import_suggestions(path: &Path) -> Result<SuggestionStore> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::import(format!("Could not read {}: {}", path.display(), e)))?;
    SuggestionStore::from_json(&content)
}

/// Write the store to a user-chosen file
pub fn export_suggestions(path: &Path, store: &SuggestionStore) -> Result<()> {
    let json = store.to_json_pretty()?;
    std::fs::write(path, json)
        .map_err(|e| Error::export(format!("Could not write {}: {}", path.display(), e)))?;
    info!("Exported suggestions to {:?}", path);
    Ok(())
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, content)?;
    std::fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vmnotes_core::SuggestionCategory;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let store = load_suggestions(&temp.path().join("suggestions.json"));
        assert_eq!(store, SuggestionStore::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("suggestions.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert_eq!(load_suggestions(&path), SuggestionStore::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data").join("suggestions.json");
        let mut store = SuggestionStore::default();
        store.add(SuggestionCategory::VmNames, "web01");

        save_suggestions(&path, &store).unwrap();

        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(load_suggestions(&path), store);
    }

    #[test]
    fn test_import_rejects_malformed_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("import.json");
        std::fs::write(&path, "not json").unwrap();

        let err = import_suggestions(&path).unwrap_err();
        assert!(matches!(err, Error::Import { .. }));
    }

    #[test]
    fn test_export_then_import() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("export.json");
        let mut store = SuggestionStore::default();
        store.add(SuggestionCategory::Services, "nginx");

        export_suggestions(&path, &store).unwrap();
        assert_eq!(import_suggestions(&path).unwrap(), store);
    }
}
