//! Mood CLI commands
//!
//! Implements CLI commands for recording and browsing moods, plus the
//! monthly stats view.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::display::mood::{
    format_month_calendar, format_monthly_stats, format_mood_details, format_mood_list,
};
use crate::error::MoodfolioResult;
use crate::models::Mood;
use crate::services::{MoodService, StatsService};
use crate::storage::Storage;

use super::{month_or_current, parse_date, parse_month, today};

/// Mood subcommands
#[derive(Subcommand)]
pub enum MoodCommands {
    /// Record today's mood (replaces any entry for the same date)
    #[command(alias = "add")]
    Record {
        /// Mood (happy, smile, love, calm, worried, tired, sad, angry)
        mood: Mood,
        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Date (YYYY-MM-DD, today, yesterday)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Show the entry for a date
    Show {
        /// Date (YYYY-MM-DD, today, yesterday)
        #[arg(value_parser = parse_date, default_value = "today")]
        date: NaiveDate,
    },
    /// List entries, optionally within a date range
    List {
        /// First date to include
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
        /// Last date to include
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,
    },
    /// Delete the entry for a date
    Delete {
        /// Date (YYYY-MM-DD, today, yesterday)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Show a month as a calendar
    Calendar {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(value_parser = parse_month)]
        month: Option<(i32, u32)>,
    },
}

/// Arguments for the monthly stats command
#[derive(Args)]
pub struct StatsArgs {
    /// Month (YYYY-MM), defaults to the current month
    #[arg(value_parser = parse_month)]
    pub month: Option<(i32, u32)>,
}

/// Handle a mood command
pub fn handle_mood_command(storage: &Storage, cmd: MoodCommands) -> MoodfolioResult<()> {
    let service = MoodService::new(storage);

    match cmd {
        MoodCommands::Record { mood, note, date } => {
            let date = date.unwrap_or_else(today);
            let entry = service.record(date, mood, &note)?;
            println!("Recorded {} {} for {}", entry.mood.emoji(), entry.mood, entry.date);
        }

        MoodCommands::Show { date } => match service.get(date)? {
            Some(entry) => print!("{}", format_mood_details(&entry)),
            None => println!("No mood recorded for {}", date),
        },

        MoodCommands::List { from, to } => {
            let entries = match (from, to) {
                (None, None) => {
                    let mut all = service.list()?;
                    all.sort_by_key(|e| e.date);
                    all
                }
                (from, to) => service.range(
                    from.unwrap_or(NaiveDate::MIN),
                    to.unwrap_or(NaiveDate::MAX),
                )?,
            };
            println!("{}", format_mood_list(&entries));
        }

        MoodCommands::Delete { date } => {
            if service.delete(date)? {
                println!("Deleted mood entry for {}", date);
            } else {
                println!("No mood recorded for {}", date);
            }
        }

        MoodCommands::Calendar { month } => {
            let (year, month) = month_or_current(month);
            let stats = StatsService::new(storage).monthly_stats(year, month)?;
            print!("{}", format_month_calendar(year, month, &stats.entries));
        }
    }

    Ok(())
}

/// Handle the monthly stats command
pub fn handle_stats_command(storage: &Storage, args: StatsArgs) -> MoodfolioResult<()> {
    let (year, month) = month_or_current(args.month);
    let service = StatsService::new(storage);

    let stats = service.monthly_stats(year, month)?;
    let streak = service.streak_days(year, month)?;
    print!("{}", format_monthly_stats(&stats, streak));

    Ok(())
}
