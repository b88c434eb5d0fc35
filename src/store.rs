//! # Store Persistence
//!
//! Load, backup, and atomic save of the authoritative JSON store, plus
//! the report write. The ordering discipline lives in `merge::run`: the
//! backup must be on disk before the store is overwritten, and the store
//! itself is written via temp-file-then-rename so a failure mid-write
//! never leaves a truncated document behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::errors::MergeError;
use crate::food_model::FoodEntry;

/// Load the authoritative store.
///
/// Fatal if the file is missing, unreadable, or not a JSON array of
/// entries — this runs before any output is touched.
pub fn load_store(path: &Path) -> Result<Vec<FoodEntry>, MergeError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| MergeError::Load(format!("cannot read store {}: {e}", path.display())))?;
    let entries: Vec<FoodEntry> = serde_json::from_str(&raw)
        .map_err(|e| MergeError::Load(format!("store {} is not valid: {e}", path.display())))?;
    info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Copy the pre-merge store to `backup_path`, byte-identical.
pub fn backup_store(path: &Path, backup_path: &Path) -> Result<(), MergeError> {
    fs::copy(path, backup_path).map_err(|e| {
        MergeError::Write(format!(
            "backup to {} failed, store untouched: {e}",
            backup_path.display()
        ))
    })?;
    info!("backed up {} to {}", path.display(), backup_path.display());
    Ok(())
}

/// Overwrite the store with the merged entries, atomically.
///
/// Serializes with two-space indentation (the store's existing format)
/// into a temp file in the same directory, then renames over the target.
pub fn save_store(path: &Path, entries: &[FoodEntry]) -> Result<(), MergeError> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| MergeError::Write(format!("cannot serialize merged store: {e}")))?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .map_err(|e| MergeError::Write(format!("cannot create temp store file: {e}")))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| MergeError::Write(format!("cannot write temp store file: {e}")))?;
    tmp.persist(path).map_err(|e| {
        MergeError::Write(format!("cannot replace store {}: {e}", path.display()))
    })?;

    info!("saved {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Write the formatted merge report.
pub fn write_report(path: &Path, report: &str) -> Result<(), MergeError> {
    fs::write(path, report).map_err(|e| {
        MergeError::Write(format!(
            "cannot write report {} (store and backup already written): {e}",
            path.display()
        ))
    })?;
    info!("saved report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food_model::DEFAULT_SERVING_G;
    use tempfile::tempdir;

    fn entry(name: &str, total: f64) -> FoodEntry {
        FoodEntry {
            name: name.to_string(),
            preparation: "rå".to_string(),
            category: "Annet".to_string(),
            adenine: 0.0,
            guanine: 0.0,
            hypoxanthine: 0.0,
            xanthine: 0.0,
            total_purines: total,
            uric_acid: 0.0,
            serving: DEFAULT_SERVING_G,
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purine_data.json");
        let entries = vec![entry("Asparges", 18.0), entry("Hvalbiff", 120.0)];

        save_store(&path, &entries).unwrap();
        let loaded = load_store(&path).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_load_missing_store_is_load_error() {
        let dir = tempdir().unwrap();
        let err = load_store(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, MergeError::Load(_)));
    }

    #[test]
    fn test_load_malformed_store_is_load_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purine_data.json");
        fs::write(&path, "{\"not\": \"an array\"}").unwrap();
        let err = load_store(&path).unwrap_err();
        assert!(matches!(err, MergeError::Load(_)));
    }

    #[test]
    fn test_backup_is_byte_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purine_data.json");
        let backup = dir.path().join("purine_data.json.backup");
        // Deliberately odd formatting: the backup must preserve bytes,
        // not re-serialize
        fs::write(&path, "[\n\n]").unwrap();

        backup_store(&path, &backup).unwrap();
        assert_eq!(fs::read(&path).unwrap(), fs::read(&backup).unwrap());
    }

    #[test]
    fn test_store_output_is_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purine_data.json");
        save_store(&path, &[entry("Asparges", 18.0)]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"name\": \"Asparges\""));
    }
}
