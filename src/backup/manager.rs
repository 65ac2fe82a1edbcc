//! Backup manager for Moodfolio
//!
//! Handles rolling backups with configurable retention policies. Each backup
//! is a dated JSON archive holding a full journal snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::MoodfolioPaths;
use crate::config::BackupRetention;
use crate::error::{MoodfolioError, MoodfolioResult};
use crate::export::ExportDocument;
use crate::storage::Storage;

/// Current archive schema version
pub const ARCHIVE_SCHEMA_VERSION: u32 = 1;

/// Metadata about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
    /// First backup of its month (kept longer)
    pub is_monthly: bool,
}

/// Backup archive format
///
/// The snapshot keys sit at the top level, so an archive is also a valid
/// import document.
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for migration support
    pub schema_version: u32,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub journal: ExportDocument,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &MoodfolioPaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            retention,
        }
    }

    /// Write a backup of the current store.
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self, storage: &Storage) -> MoodfolioResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            MoodfolioError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = format!(
            "backup-{}-{:03}.json",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir.join(&filename);

        let archive = BackupArchive {
            schema_version: ARCHIVE_SCHEMA_VERSION,
            created_at: now,
            journal: ExportDocument::from_storage(storage)?,
        };

        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| MoodfolioError::Json(format!("Failed to serialize backup: {}", e)))?;
        fs::write(&backup_path, json)
            .map_err(|e| MoodfolioError::Io(format!("Failed to write backup file: {}", e)))?;

        log::info!("Created backup {}", backup_path.display());
        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> MoodfolioResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();
        for entry in fs::read_dir(&self.backup_dir).map_err(|e| {
            MoodfolioError::Io(format!("Failed to read backup directory: {}", e))
        })? {
            let entry = entry
                .map_err(|e| MoodfolioError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mark_monthly(&mut backups);

        Ok(backups)
    }

    /// Enforce retention policy by deleting old backups
    pub fn enforce_retention(&self) -> MoodfolioResult<Vec<PathBuf>> {
        let backups = self.list_backups()?;
        let mut deleted = Vec::new();

        let (monthly, daily): (Vec<_>, Vec<_>) = backups.into_iter().partition(|b| b.is_monthly);

        let expired = daily
            .into_iter()
            .skip(self.retention.daily_count as usize)
            .chain(monthly.into_iter().skip(self.retention.monthly_count as usize));

        for backup in expired {
            fs::remove_file(&backup.path)
                .map_err(|e| MoodfolioError::Io(format!("Failed to delete old backup: {}", e)))?;
            log::debug!("Removed expired backup {}", backup.filename);
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce retention policy
    pub fn create_backup_with_retention(
        &self,
        storage: &Storage,
    ) -> MoodfolioResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup(storage)?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Get a specific backup by filename
    pub fn get_backup(&self, filename: &str) -> MoodfolioResult<Option<BackupInfo>> {
        Ok(self
            .list_backups()?
            .into_iter()
            .find(|b| b.filename == filename))
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> MoodfolioResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let date_part = filename.strip_prefix("backup-")?.strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(date_part)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
        is_monthly: false,
    })
}

/// Flag the oldest backup of each calendar month. Expects newest-first order.
fn mark_monthly(backups: &mut [BackupInfo]) {
    let mut seen: Vec<(i32, u32)> = Vec::new();
    for backup in backups.iter_mut().rev() {
        let month = (backup.created_at.year(), backup.created_at.month());
        backup.is_monthly = !seen.contains(&month);
        if backup.is_monthly {
            seen.push(month);
        }
    }
}

/// Parse `YYYYMMDD-HHMMSS` or `YYYYMMDD-HHMMSS-mmm`
fn parse_backup_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let date_part = parts[0];
    let time_part = parts[1];
    let millis: u32 = match parts.get(2) {
        Some(ms) => ms.parse().ok()?,
        None => 0,
    };

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part[0..4].parse().ok()?;
    let month: u32 = date_part[4..6].parse().ok()?;
    let day: u32 = date_part[6..8].parse().ok()?;
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = chrono::NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;

    Some(DateTime::from_naive_utc_and_offset(date.and_time(time), Utc))
}
