//! Settings CLI commands

use clap::Subcommand;

use crate::display::journal::format_settings;
use crate::error::{MoodfolioError, MoodfolioResult};
use crate::models::{NotificationSettings, ReminderTime, SettingsPatch, Theme};
use crate::services::SettingsService;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,
    /// Change one or more settings
    Set {
        /// Theme (auto, light, dark)
        #[arg(long)]
        theme: Option<Theme>,
        /// Turn the daily reminder on or off
        #[arg(long)]
        reminders: Option<bool>,
        /// Reminder time (HH:MM)
        #[arg(long)]
        time: Option<ReminderTime>,
    },
    /// Restore the default settings
    Reset,
}

/// Handle a settings command
pub fn handle_settings_command(storage: &Storage, cmd: SettingsCommands) -> MoodfolioResult<()> {
    let service = SettingsService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(&service.get()?));
        }

        SettingsCommands::Set {
            theme,
            reminders,
            time,
        } => {
            // The notifications record is replaced whole, so fill in the
            // untouched field from the current value
            let notifications = if reminders.is_some() || time.is_some() {
                let current = service.get()?.notifications;
                Some(NotificationSettings {
                    enabled: reminders.unwrap_or(current.enabled),
                    time: time.unwrap_or(current.time),
                })
            } else {
                None
            };

            let patch = SettingsPatch {
                theme,
                notifications,
            };
            if patch.is_empty() {
                return Err(MoodfolioError::Validation(
                    "Nothing to change (use --theme, --reminders, or --time)".into(),
                ));
            }

            let settings = service.save(&patch)?;
            println!("Settings updated.");
            print!("{}", format_settings(&settings));
        }

        SettingsCommands::Reset => {
            let settings = service.reset()?;
            println!("Settings reset to defaults.");
            print!("{}", format_settings(&settings));
        }
    }

    Ok(())
}
