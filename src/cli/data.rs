//! Data housekeeping CLI commands

use clap::Subcommand;

use crate::config::AppConfig;
use crate::display::journal::format_storage_stats;
use crate::error::MoodfolioResult;
use crate::services::{DataService, MoodService};
use crate::storage::Storage;

use super::today;

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Entry counts and disk usage
    Stats,
    /// Delete mood entries older than a number of days
    Cleanup {
        /// Days of history to keep (defaults to the configured value)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Delete all journal data
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a data command
pub fn handle_data_command(
    storage: &Storage,
    config: &AppConfig,
    cmd: DataCommands,
) -> MoodfolioResult<()> {
    match cmd {
        DataCommands::Stats => {
            let stats = DataService::new(storage).stats(config.storage_quota_bytes)?;
            println!("Storage");
            print!("{}", format_storage_stats(&stats));
        }

        DataCommands::Cleanup { days } => {
            let days = days.unwrap_or(config.cleanup_days_to_keep);
            let (removed, remaining) = MoodService::new(storage).cleanup(today(), days)?;
            println!(
                "Removed {} mood entries older than {} days ({} remaining).",
                removed, days, remaining
            );
        }

        DataCommands::Clear { force } => {
            if !force {
                println!("WARNING: This deletes every mood, fortune, favorite, and setting!");
                println!("To proceed, run again with --force flag:");
                println!("  moodfolio data clear --force");
                return Ok(());
            }
            DataService::new(storage).clear_all()?;
            println!("All journal data cleared.");
        }
    }

    Ok(())
}
