//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;
use std::path::PathBuf;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::AppConfig;
use crate::display::journal::format_backup_list;
use crate::error::{MoodfolioError, MoodfolioResult};
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup
    Create,

    /// List all available backups
    List,

    /// Restore from a backup (replaces all current data)
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show information about a specific backup
    Info {
        /// Backup filename or path
        backup: String,
    },

    /// Delete old backups according to retention policy
    Prune,
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &Storage,
    config: &AppConfig,
    cmd: BackupCommands,
) -> MoodfolioResult<()> {
    let manager = BackupManager::new(storage.paths(), config.backup_retention.clone());

    match cmd {
        BackupCommands::Create => {
            let (backup_path, deleted) = manager.create_backup_with_retention(storage)?;
            println!("Backup created: {}", backup_path.display());
            if !deleted.is_empty() {
                println!("Pruned {} old backup(s).", deleted.len());
            }
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;
            println!("{}", format_backup_list(&backups));
            if backups.is_empty() {
                println!("Create one with: moodfolio backup create");
            }
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;
            let restore_manager = RestoreManager::new(storage);
            let validation = restore_manager.validate_backup(&backup_path)?;

            println!("File: {}", backup_path.display());
            println!("{}", validation.summary());
            println!();

            if !force {
                println!("WARNING: This will overwrite ALL current data!");
                println!("To proceed, run again with --force flag:");
                println!("  moodfolio backup restore {} --force", backup);
                return Ok(());
            }

            let pre_restore = manager.create_backup(storage)?;
            println!("Pre-restore backup saved: {}", pre_restore.display());

            let result = restore_manager.restore_from_file(&backup_path)?;
            println!("Restore complete! {}", result.summary());
        }

        BackupCommands::Info { backup } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;
            let validation = RestoreManager::new(storage).validate_backup(&backup_path)?;

            println!("File: {}", backup_path.display());
            if let Some(date) = validation.backup_date {
                println!("Created: {}", date.format("%Y-%m-%d %H:%M:%S UTC"));
            }
            println!("{}", validation.summary());
        }

        BackupCommands::Prune => {
            let deleted = manager.enforce_retention()?;
            println!(
                "Deleted {} backup(s) (keeping {} daily, {} monthly).",
                deleted.len(),
                config.backup_retention.daily_count,
                config.backup_retention.monthly_count
            );
        }
    }

    Ok(())
}

/// Resolve a backup identifier to a full path
fn resolve_backup_path(manager: &BackupManager, backup: &str) -> MoodfolioResult<PathBuf> {
    if backup.eq_ignore_ascii_case("latest") {
        return manager
            .get_latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| MoodfolioError::NotFound {
                entity_type: "Backup",
                identifier: "latest".to_string(),
            });
    }

    let path = PathBuf::from(backup);
    if path.exists() {
        return Ok(path);
    }

    for candidate in [backup.to_string(), format!("{}.json", backup)] {
        let in_dir = manager.backup_dir().join(candidate);
        if in_dir.exists() {
            return Ok(in_dir);
        }
    }

    Err(MoodfolioError::NotFound {
        entity_type: "Backup",
        identifier: backup.to_string(),
    })
}
