use anyhow::Result;
use clap::{Parser, Subcommand};

use moodfolio::cli::{
    handle_backup_command, handle_data_command, handle_export_command, handle_fortune_command,
    handle_import_command, handle_mood_command, handle_quote_command, handle_settings_command,
    handle_stats_command,
};
use moodfolio::config::{AppConfig, MoodfolioPaths};
use moodfolio::storage::Storage;

#[derive(Parser)]
#[command(
    name = "moodfolio",
    version,
    about = "Local journal for daily moods, fortunes, and favorite quotes",
    long_about = "Moodfolio keeps a small daily journal on your machine: one mood per day, \
                  a daily fortune, and a collection of favorite quotes. Everything is stored \
                  as JSON under one data directory and can be exported, imported, and backed up."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the journal data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Record and browse daily moods
    #[command(subcommand)]
    Mood(moodfolio::cli::MoodCommands),

    /// Draw and review daily fortunes
    #[command(subcommand)]
    Fortune(moodfolio::cli::FortuneCommands),

    /// Browse quotes and manage favorites
    #[command(subcommand)]
    Quote(moodfolio::cli::QuoteCommands),

    /// Monthly mood statistics and streak
    Stats(moodfolio::cli::StatsArgs),

    /// View or change settings
    #[command(subcommand)]
    Settings(moodfolio::cli::SettingsCommands),

    /// Export the journal
    Export(moodfolio::cli::ExportArgs),

    /// Import a journal export (merge by default)
    Import(moodfolio::cli::ImportArgs),

    /// Backup management commands
    #[command(subcommand)]
    Backup(moodfolio::cli::BackupCommands),

    /// Storage usage and housekeeping
    #[command(subcommand)]
    Data(moodfolio::cli::DataCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = MoodfolioPaths::new()?;
    let config = AppConfig::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(config.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Moodfolio at: {}", paths.data_dir().display());
            moodfolio::storage::initialize_storage(&paths)?;
            config.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Record today's mood with: moodfolio mood record happy");
        }
        Some(Commands::Config) => {
            println!("Moodfolio Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Config file:      {}", paths.config_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Backups kept:     {} daily, {} monthly",
                config.backup_retention.daily_count, config.backup_retention.monthly_count
            );
            println!("  Audit log:        {}", config.audit_enabled);
            println!("  Storage quota:    {} bytes", config.storage_quota_bytes);
            println!("  Cleanup keeps:    {} days", config.cleanup_days_to_keep);
        }
        Some(Commands::Mood(cmd)) => handle_mood_command(&storage, cmd)?,
        Some(Commands::Fortune(cmd)) => handle_fortune_command(&storage, cmd)?,
        Some(Commands::Quote(cmd)) => handle_quote_command(&storage, cmd)?,
        Some(Commands::Stats(args)) => handle_stats_command(&storage, args)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Import(args)) => handle_import_command(&storage, &config, args)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&storage, &config, cmd)?,
        Some(Commands::Data(cmd)) => handle_data_command(&storage, &config, cmd)?,
        Some(Commands::Audit { count }) => match storage.audit() {
            Some(logger) => {
                let entries = logger.read_recent(count)?;
                if entries.is_empty() {
                    println!("No audit entries yet.");
                }
                for entry in entries {
                    println!("{}", entry.format_human_readable());
                }
            }
            None => println!("Audit logging is disabled."),
        },
        None => {
            println!("Moodfolio - daily mood journal");
            println!();
            println!("Run 'moodfolio --help' for usage information.");
        }
    }

    Ok(())
}
