//! Settings repository
//!
//! Stores the single journal settings record in settings.json. A missing
//! file means "defaults".

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MoodfolioError;
use crate::models::{Settings, SettingsPatch};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_poisoned, StoreCollection};

/// Repository for the settings record
pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<Settings>,
}

impl SettingsRepository {
    /// Create a new settings repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Settings::default()),
        }
    }

    /// Load settings from disk
    pub fn load(&self) -> Result<(), MoodfolioError> {
        let from_disk: Settings = read_json(&self.path)?;
        *self.data.write().map_err(lock_poisoned)? = from_disk;
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// Get the full record
    pub fn get(&self) -> Result<Settings, MoodfolioError> {
        Ok(*self.data.read().map_err(lock_poisoned)?)
    }

    /// Shallow-merge a patch onto the stored record.
    ///
    /// Returns `(before, after)`.
    pub fn merge(&self, patch: &SettingsPatch) -> Result<(Settings, Settings), MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        let before = *data;
        *data = before.merged(patch);
        Ok((before, *data))
    }

    /// Replace the record wholesale
    pub fn replace(&self, settings: Settings) -> Result<(), MoodfolioError> {
        *self.data.write().map_err(lock_poisoned)? = settings;
        Ok(())
    }

    /// Reset to defaults
    pub fn clear(&self) -> Result<(), MoodfolioError> {
        self.replace(Settings::default())
    }
}

impl StoreCollection for SettingsRepository {
    fn load(&self) -> Result<(), MoodfolioError> {
        SettingsRepository::load(self)
    }

    fn save(&self) -> Result<(), MoodfolioError> {
        SettingsRepository::save(self)
    }

    fn clear(&self) -> Result<(), MoodfolioError> {
        SettingsRepository::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_nothing_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SettingsRepository::new(temp_dir.path().join("settings.json"));
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), Settings::default());
    }

    #[test]
    fn test_merge_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let repo = SettingsRepository::new(path.clone());
        repo.load().unwrap();

        let (before, after) = repo.merge(&SettingsPatch::theme(Theme::Dark)).unwrap();
        assert_eq!(before.theme, Theme::Auto);
        assert_eq!(after.theme, Theme::Dark);
        repo.save().unwrap();

        let reloaded = SettingsRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get().unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"theme":"light"}"#).unwrap();

        let repo = SettingsRepository::new(path);
        repo.load().unwrap();
        let settings = repo.get().unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.notifications.time.to_string(), "20:00");
    }
}
