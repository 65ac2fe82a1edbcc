//! Path management for Moodfolio
//!
//! Provides XDG-compliant path resolution for configuration, journal data,
//! and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `MOODFOLIO_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/moodfolio` or `~/.config/moodfolio`
//! 3. Windows: `%APPDATA%\moodfolio`

use std::path::PathBuf;

use crate::error::MoodfolioError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MOODFOLIO_DATA_DIR";

/// Manages all paths used by Moodfolio
#[derive(Debug, Clone)]
pub struct MoodfolioPaths {
    base_dir: PathBuf,
}

impl MoodfolioPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be
    /// determined.
    pub fn new() -> Result<Self, MoodfolioError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/moodfolio/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the four collections
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the application config file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Mood entries collection
    pub fn moods_file(&self) -> PathBuf {
        self.data_dir().join("moods.json")
    }

    /// Fortune entries collection
    pub fn fortunes_file(&self) -> PathBuf {
        self.data_dir().join("fortunes.json")
    }

    /// Favorite quotes collection
    pub fn favorites_file(&self) -> PathBuf {
        self.data_dir().join("favorites.json")
    }

    /// Journal settings record
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    /// All collection files, in a stable order
    pub fn collection_files(&self) -> [PathBuf; 4] {
        [
            self.moods_file(),
            self.fortunes_file(),
            self.favorites_file(),
            self.settings_file(),
        ]
    }

    /// Ensure the base, data, and backup directories exist
    pub fn ensure_directories(&self) -> Result<(), MoodfolioError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.backup_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                MoodfolioError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MoodfolioError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                MoodfolioError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("moodfolio"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MoodfolioError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MoodfolioError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("moodfolio"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.backup_dir(), temp_dir.path().join("backups"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.backup_dir().exists());
    }

    #[test]
    fn test_collection_files_live_in_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.moods_file(), temp_dir.path().join("data").join("moods.json"));
        for file in paths.collection_files() {
            assert_eq!(file.parent().unwrap(), paths.data_dir());
        }
        assert_eq!(paths.config_file(), temp_dir.path().join("config.json"));
    }
}
