//! Backup system for Moodfolio
//!
//! Provides rolling backups with configurable retention policies and
//! restore functionality.
//!
//! # Backup Format
//!
//! Backups are JSON files named `backup-YYYYMMDD-HHMMSS-mmm.json` holding:
//! - `schema_version`: version for migration support
//! - `created_at`: when the backup was taken
//! - the full journal snapshot (`moodEntries`, `fortuneEntries`,
//!   `favoriteQuotes`, `settings`, `exportDate`)
//!
//! Because the snapshot keys sit at the top level, any backup can also be
//! passed to `moodfolio import`.
//!
//! # Retention Policy
//!
//! By default, the system keeps:
//! - 30 daily backups
//! - 12 monthly backups (first backup of each month)

mod manager;
mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager, ARCHIVE_SCHEMA_VERSION};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
