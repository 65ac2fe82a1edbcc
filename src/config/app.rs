//! Application configuration for Moodfolio
//!
//! Holds tool-level preferences (backup retention, audit logging, storage
//! quota). The journal's own settings record (theme, notifications) is user
//! data and lives in the Entry Store instead.

use serde::{Deserialize, Serialize};

use super::paths::MoodfolioPaths;
use crate::error::MoodfolioError;

/// Backup retention settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRetention {
    /// Number of daily backups to keep
    pub daily_count: u32,
    /// Number of monthly backups to keep
    pub monthly_count: u32,
}

impl Default for BackupRetention {
    fn default() -> Self {
        Self {
            daily_count: 30,
            monthly_count: 12,
        }
    }
}

/// Tool configuration persisted in `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Backup retention policy
    #[serde(default)]
    pub backup_retention: BackupRetention,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Storage quota used by the fullness check, in bytes
    #[serde(default = "default_storage_quota")]
    pub storage_quota_bytes: u64,

    /// Mood entries older than this many days are removed by `cleanup`
    #[serde(default = "default_cleanup_days")]
    pub cleanup_days_to_keep: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_storage_quota() -> u64 {
    5 * 1024 * 1024
}

fn default_cleanup_days() -> u32 {
    365
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backup_retention: BackupRetention::default(),
            audit_enabled: true,
            storage_quota_bytes: default_storage_quota(),
            cleanup_days_to_keep: default_cleanup_days(),
        }
    }
}

impl AppConfig {
    /// Load config from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &MoodfolioPaths) -> Result<Self, MoodfolioError> {
        let config_path = paths.config_file();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| MoodfolioError::Io(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| MoodfolioError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save config to disk
    pub fn save(&self, paths: &MoodfolioPaths) -> Result<(), MoodfolioError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MoodfolioError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(paths.config_file(), contents)
            .map_err(|e| MoodfolioError::Io(format!("Failed to write config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.audit_enabled);
        assert_eq!(config.storage_quota_bytes, 5 * 1024 * 1024);
        assert_eq!(config.cleanup_days_to_keep, 365);
        assert_eq!(config.backup_retention.daily_count, 30);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut config = AppConfig::default();
        config.audit_enabled = false;
        config.backup_retention.daily_count = 3;
        config.save(&paths).unwrap();

        let loaded = AppConfig::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.backup_retention.daily_count, 3);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"audit_enabled": false}"#).unwrap();
        assert!(!config.audit_enabled);
        assert_eq!(config.cleanup_days_to_keep, 365);
    }
}
