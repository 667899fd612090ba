//! Notes state files
//!
//! A notes form is saved as `{title}.json` in the configured notes directory
//! and can be loaded back from any path.

use std::path::{Path, PathBuf};
use vmnotes_core::prelude::*;
use vmnotes_core::NotesRecord;

/// Save a notes record, returning the written path
pub fn save_notes(dir: &Path, record: &NotesRecord) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::storage(format!("Failed to create {:?}: {}", dir, e)))?;

    let path = dir.join(record.file_name());
    let json = record.to_json()?;
    std::fs::write(&path, json)
        .map_err(|e| Error::storage(format!("Failed to write {:?}: {}", path, e)))?;

    info!("Saved notes to {:?}", path);
    Ok(path)
}

/// Load a notes record from a saved state file
pub fn load_notes(path: &Path) -> Result<NotesRecord> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::import(format!("Could not read {}: {}", path.display(), e)))?;
    NotesRecord::from_json(&content).map_err(|_| Error::import("Invalid JSON file."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vmnotes_core::KeyValueRow;

    #[test]
    fn test_save_uses_title_as_file_name() {
        let temp = tempdir().unwrap();
        let mut record = NotesRecord::default();
        record.header.title = "web01".into();
        record.sections.network.push(KeyValueRow::new("IP", "10.0.0.5"));

        let path = save_notes(temp.path(), &record).unwrap();

        assert_eq!(path, temp.path().join("web01.json"));
        assert_eq!(load_notes(&path).unwrap(), record);
    }

    #[test]
    fn test_blank_title_uses_fallback_name() {
        let temp = tempdir().unwrap();
        let path = save_notes(temp.path(), &NotesRecord::default()).unwrap();
        assert!(path.ends_with("proxmox_notes_config.json"));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "[").unwrap();

        let err = load_notes(&path).unwrap_err();
        assert_eq!(err.to_string(), "Import failed: Invalid JSON file.");
    }
}
