//! CLI command handler for journal import
//!
//! Reads a JSON or YAML export, validates it, and merges it into the store
//! or replaces the store with it. An overwrite takes a backup first.

use std::path::PathBuf;

use clap::Args;

use crate::backup::BackupManager;
use crate::config::AppConfig;
use crate::error::{MoodfolioError, MoodfolioResult};
use crate::export::{import_document, read_document, ImportMode};
use crate::storage::Storage;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Export file to import (.json, .yaml, or .yml)
    pub file: PathBuf,

    /// Replace all current data instead of merging
    #[arg(long)]
    pub overwrite: bool,

    /// Validate and summarize the file without importing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    config: &AppConfig,
    args: ImportArgs,
) -> MoodfolioResult<()> {
    if !args.file.exists() {
        return Err(MoodfolioError::Import(format!(
            "File not found: {}",
            args.file.display()
        )));
    }

    let document = read_document(&args.file)?;
    let mode = if args.overwrite {
        ImportMode::Overwrite
    } else {
        ImportMode::Merge
    };

    println!("Import file: {}", args.file.display());
    if let Some(date) = document.export_date {
        println!("  Exported:        {}", date.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!("  Mood entries:    {}", document.mood_entries.len());
    println!("  Fortune entries: {}", document.fortune_entries.len());
    println!("  Favorite quotes: {}", document.favorite_quotes.len());
    println!("  Mode:            {}", mode);
    println!();

    if args.dry_run {
        println!("Dry run: nothing was imported.");
        return Ok(());
    }

    if mode == ImportMode::Overwrite {
        let manager = BackupManager::new(storage.paths(), config.backup_retention.clone());
        let backup_path = manager.create_backup(storage)?;
        println!("Backup of current data saved: {}", backup_path.display());
    }

    let summary = import_document(storage, document, mode)?;

    println!("Import complete!");
    println!(
        "  Mood entries:    {} added, {} replaced",
        summary.moods_added, summary.moods_replaced
    );
    println!(
        "  Fortune entries: {} added, {} replaced",
        summary.fortunes_added, summary.fortunes_replaced
    );
    println!(
        "  Favorite quotes: {} added, {} already saved",
        summary.favorites_added, summary.favorites_skipped
    );
    println!(
        "  Settings:        {}",
        if summary.settings_changed {
            "updated"
        } else {
            "unchanged"
        }
    );

    Ok(())
}
