//! Storage layer for Moodfolio
//!
//! The Entry Store: one JSON file per collection with atomic writes. A
//! [`Storage`] value owns every repository and is passed by reference to
//! whichever service needs it.

pub mod entries;
pub mod favorites;
pub mod file_io;
pub mod init;
pub mod settings;

pub use entries::{EntryRepository, FortuneRepository, MoodRepository};
pub use favorites::FavoriteRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use settings::SettingsRepository;

use std::sync::PoisonError;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::MoodfolioPaths;
use crate::error::MoodfolioError;

/// Load/save/clear contract shared by every collection
pub trait StoreCollection {
    fn load(&self) -> Result<(), MoodfolioError>;
    fn save(&self) -> Result<(), MoodfolioError>;
    fn clear(&self) -> Result<(), MoodfolioError>;
}

pub(crate) fn lock_poisoned<T>(err: PoisonError<T>) -> MoodfolioError {
    MoodfolioError::Storage(format!("Storage lock poisoned: {}", err))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: MoodfolioPaths,
    pub moods: MoodRepository,
    pub fortunes: FortuneRepository,
    pub favorites: FavoriteRepository,
    pub settings: SettingsRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: MoodfolioPaths) -> Result<Self, MoodfolioError> {
        paths.ensure_directories()?;

        Ok(Self {
            moods: MoodRepository::new(paths.moods_file()),
            fortunes: FortuneRepository::new(paths.fortunes_file()),
            favorites: FavoriteRepository::new(paths.favorites_file()),
            settings: SettingsRepository::new(paths.settings_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn the audit trail on or off
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MoodfolioPaths {
        &self.paths
    }

    /// The audit logger, if enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn collections(&self) -> [&dyn StoreCollection; 4] {
        [&self.moods, &self.fortunes, &self.favorites, &self.settings]
    }

    /// Load all collections from disk
    pub fn load_all(&mut self) -> Result<(), MoodfolioError> {
        for collection in self.collections() {
            collection.load()?;
        }
        Ok(())
    }

    /// Save all collections to disk
    pub fn save_all(&self) -> Result<(), MoodfolioError> {
        for collection in self.collections() {
            collection.save()?;
        }
        Ok(())
    }

    /// Reset every collection to its empty/default state (in memory)
    pub fn clear_all(&self) -> Result<(), MoodfolioError> {
        for collection in self.collections() {
            collection.clear()?;
        }
        Ok(())
    }

    /// Check if storage has been initialized on disk
    pub fn is_initialized(&self) -> bool {
        self.paths.moods_file().exists()
    }

    /// Total on-disk size of the collection files, in bytes
    pub fn size_on_disk(&self) -> u64 {
        self.paths
            .collection_files()
            .iter()
            .map(file_io::file_size)
            .sum()
    }

    fn write_audit(&self, entry: AuditEntry) -> Result<(), MoodfolioError> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    /// Record a create in the audit trail
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), MoodfolioError> {
        self.write_audit(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit trail
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), MoodfolioError> {
        self.write_audit(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    /// Record a delete in the audit trail
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), MoodfolioError> {
        self.write_audit(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record a bulk change in the audit trail
    pub fn log_bulk(
        &self,
        action: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<(), MoodfolioError> {
        self.write_audit(AuditEntry::bulk(action, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FavoriteQuote, Mood, MoodEntry, QuoteId, SettingsPatch, Theme};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("backups").exists());
        assert!(!storage.is_initialized());
        assert_eq!(storage.size_on_disk(), 0);
    }

    #[test]
    fn test_save_all_and_reload() {
        let (temp_dir, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        storage.moods.upsert(MoodEntry::new(date, Mood::Happy, "")).unwrap();
        storage
            .favorites
            .add(FavoriteQuote::new(QuoteId::new("q-1"), "one"))
            .unwrap();
        storage.settings.merge(&SettingsPatch::theme(Theme::Dark)).unwrap();
        storage.save_all().unwrap();

        assert!(storage.is_initialized());
        assert!(storage.size_on_disk() > 0);

        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();

        assert!(reloaded.moods.get(date).unwrap().is_some());
        assert_eq!(reloaded.favorites.count().unwrap(), 1);
        assert_eq!(reloaded.settings.get().unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_clear_all() {
        let (_temp_dir, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        storage.moods.upsert(MoodEntry::new(date, Mood::Happy, "")).unwrap();
        storage.settings.merge(&SettingsPatch::theme(Theme::Dark)).unwrap();

        storage.clear_all().unwrap();

        assert_eq!(storage.moods.count().unwrap(), 0);
        assert_eq!(storage.settings.get().unwrap().theme, Theme::Auto);
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.set_audit_enabled(false);
        storage.log_bulk("clear", "nothing").unwrap();
        assert!(storage.audit().is_none());
        assert!(!storage.paths().audit_log().exists());

        storage.set_audit_enabled(true);
        storage.log_bulk("clear", "something").unwrap();
        assert_eq!(storage.audit().unwrap().read_all().unwrap().len(), 1);
    }
}
