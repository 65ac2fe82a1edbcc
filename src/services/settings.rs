//! Settings service

use crate::audit::EntityType;
use crate::error::MoodfolioResult;
use crate::models::{Settings, SettingsPatch};
use crate::storage::Storage;

/// Service for the journal settings record
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The current settings, defaults when nothing was saved
    pub fn get(&self) -> MoodfolioResult<Settings> {
        self.storage.settings.get()
    }

    /// Shallow-merge `patch` onto the stored settings and persist
    pub fn save(&self, patch: &SettingsPatch) -> MoodfolioResult<Settings> {
        if patch.is_empty() {
            return self.get();
        }

        let (before, after) = self.storage.settings.merge(patch)?;
        self.storage.settings.save()?;

        if before != after {
            self.storage
                .log_update(EntityType::Settings, "settings", None, &before, &after)?;
        }
        Ok(after)
    }

    /// Restore the defaults
    pub fn reset(&self) -> MoodfolioResult<Settings> {
        let before = self.get()?;
        self.storage.settings.clear()?;
        self.storage.settings.save()?;

        let after = self.get()?;
        if before != after {
            self.storage
                .log_update(EntityType::Settings, "settings", None, &before, &after)?;
        }
        Ok(after)
    }
}
