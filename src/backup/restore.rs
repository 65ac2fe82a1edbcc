//! Backup restoration for Moodfolio
//!
//! Restoring replaces the whole store with the archive's snapshot, exactly
//! like an overwrite import.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{MoodfolioError, MoodfolioResult};
use crate::export::{import_document, ImportDocument, ImportMode, ImportSummary};
use crate::storage::Storage;

/// Handles restoring from backups
pub struct RestoreManager<'a> {
    storage: &'a Storage,
}

impl<'a> RestoreManager<'a> {
    /// Create a new RestoreManager
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Replace all current data with the backup contents.
    ///
    /// The archive is fully validated first; a bad archive leaves the store
    /// untouched.
    pub fn restore_from_file(&self, backup_path: &Path) -> MoodfolioResult<RestoreResult> {
        let (schema_version, backup_date, document) = read_archive(backup_path)?;

        let summary = import_document(self.storage, document, ImportMode::Overwrite)?;
        log::info!("Restored backup {}", backup_path.display());

        Ok(RestoreResult {
            schema_version,
            backup_date,
            summary,
        })
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> MoodfolioResult<ValidationResult> {
        let (schema_version, backup_date, document) = read_archive(backup_path)?;

        Ok(ValidationResult {
            schema_version,
            backup_date,
            mood_entries: document.mood_entries.len(),
            fortune_entries: document.fortune_entries.len(),
            favorite_quotes: document.favorite_quotes.len(),
        })
    }
}

fn read_archive(path: &Path) -> MoodfolioResult<(u32, Option<DateTime<Utc>>, ImportDocument)> {
    let contents = fs::read_to_string(path)
        .map_err(|e| MoodfolioError::Io(format!("Failed to read backup file: {}", e)))?;
    let value: Value = serde_json::from_str(&contents)
        .map_err(|e| MoodfolioError::InvalidFormat(format!("Failed to parse backup file: {}", e)))?;

    // Plain exports carry no schema version
    let schema_version = match value.get("schema_version") {
        None | Some(Value::Null) => 0,
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                MoodfolioError::InvalidFormat(format!("Unsupported schema_version: {}", v))
            })?,
    };
    let backup_date = value
        .get("created_at")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok());

    let document = ImportDocument::from_value(value)?;
    Ok((schema_version, backup_date, document))
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    /// Schema version of the restored backup
    pub schema_version: u32,
    /// Date the backup was created
    pub backup_date: Option<DateTime<Utc>>,
    pub summary: ImportSummary,
}

impl RestoreResult {
    /// One-line description of what was restored
    pub fn summary(&self) -> String {
        format!(
            "Restored {} mood entries, {} fortunes, {} favorites",
            self.summary.moods_added, self.summary.fortunes_added, self.summary.favorites_added
        )
    }
}

/// Result of validating a backup
#[derive(Debug)]
pub struct ValidationResult {
    pub schema_version: u32,
    pub backup_date: Option<DateTime<Utc>>,
    pub mood_entries: usize,
    pub fortune_entries: usize,
    pub favorite_quotes: usize,
}

impl ValidationResult {
    /// Get a summary of what the backup holds
    pub fn summary(&self) -> String {
        format!(
            "Valid backup (v{}): {} mood entries, {} fortunes, {} favorites",
            self.schema_version, self.mood_entries, self.fortune_entries, self.favorite_quotes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupManager;
    use crate::config::paths::MoodfolioPaths;
    use crate::config::BackupRetention;
    use crate::models::{Mood, MoodEntry};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_env() -> (BackupManager, Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        let manager = BackupManager::new(&paths, BackupRetention::default());
        (manager, storage, temp_dir)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_restore_replaces_current_data() {
        let (manager, storage, _temp) = create_test_env();
        storage.moods.upsert(MoodEntry::new(date(10), Mood::Happy, "")).unwrap();
        let backup_path = manager.create_backup(&storage).unwrap();

        storage.moods.clear().unwrap();
        storage.moods.upsert(MoodEntry::new(date(11), Mood::Sad, "")).unwrap();

        let result = RestoreManager::new(&storage)
            .restore_from_file(&backup_path)
            .unwrap();

        assert_eq!(result.schema_version, 1);
        assert!(result.backup_date.is_some());
        assert_eq!(result.summary.moods_added, 1);
        assert!(storage.moods.get(date(10)).unwrap().is_some());
        assert!(storage.moods.get(date(11)).unwrap().is_none());
        assert!(storage.paths().moods_file().exists());
    }

    #[test]
    fn test_validate_backup() {
        let (manager, storage, _temp) = create_test_env();
        storage.moods.upsert(MoodEntry::new(date(10), Mood::Calm, "")).unwrap();
        let backup_path = manager.create_backup(&storage).unwrap();

        let result = RestoreManager::new(&storage)
            .validate_backup(&backup_path)
            .unwrap();
        assert_eq!(result.mood_entries, 1);
        assert!(result.summary().contains("1 mood entries"));
    }

    #[test]
    fn test_corrupt_backup_leaves_store_alone() {
        let (_manager, storage, temp) = create_test_env();
        storage.moods.upsert(MoodEntry::new(date(10), Mood::Happy, "")).unwrap();

        let path = temp.path().join("backup-bad.json");
        fs::write(&path, r#"{"schema_version": 1, "moodEntries": []}"#).unwrap();

        let err = RestoreManager::new(&storage)
            .restore_from_file(&path)
            .unwrap_err();
        assert!(err.is_invalid_format());
        assert_eq!(storage.moods.count().unwrap(), 1);
    }

    #[test]
    fn test_oversized_schema_version_is_rejected() {
        let (_manager, storage, temp) = create_test_env();
        storage.moods.upsert(MoodEntry::new(date(10), Mood::Happy, "")).unwrap();

        let path = temp.path().join("backup-future.json");
        fs::write(
            &path,
            r#"{"schema_version": 4294967297, "moodEntries": [], "favoriteQuotes": [],
                "settings": {}}"#,
        )
        .unwrap();

        let restore = RestoreManager::new(&storage);
        assert!(restore.validate_backup(&path).unwrap_err().is_invalid_format());
        assert!(restore.restore_from_file(&path).unwrap_err().is_invalid_format());
        assert_eq!(storage.moods.count().unwrap(), 1);
    }

    #[test]
    fn test_plain_export_restores_as_version_zero() {
        let (_manager, storage, temp) = create_test_env();
        let path = temp.path().join("export.json");
        fs::write(
            &path,
            r#"{"moodEntries": [{"date": "2024-03-10", "mood": "LOVE", "note": "", "createdAt": 0}],
                "favoriteQuotes": [], "settings": {}}"#,
        )
        .unwrap();

        let result = RestoreManager::new(&storage).validate_backup(&path).unwrap();
        assert_eq!(result.schema_version, 0);
        assert_eq!(result.mood_entries, 1);
    }
}
