//! Fortune CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::fortune::{format_fortune, format_fortune_stats};
use crate::error::MoodfolioResult;
use crate::services::{FortuneService, StatsService};
use crate::storage::Storage;

use super::{parse_date, today};

/// Fortune subcommands
#[derive(Subcommand)]
pub enum FortuneCommands {
    /// Draw the fortune for a date (replaces an earlier draw)
    Draw {
        /// Date (YYYY-MM-DD, today, yesterday)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Draw again, avoiding an exact repeat of the current fortune
    Redraw {
        /// Date (YYYY-MM-DD, today, yesterday)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Show the stored fortune for a date
    Show {
        /// Date (YYYY-MM-DD, today, yesterday)
        #[arg(value_parser = parse_date, default_value = "today")]
        date: NaiveDate,
    },
    /// Level distribution and recent trend
    Stats {
        /// Number of most recent fortunes in the trend
        #[arg(short, long, default_value = "7")]
        last: usize,
    },
}

/// Handle a fortune command
pub fn handle_fortune_command(storage: &Storage, cmd: FortuneCommands) -> MoodfolioResult<()> {
    let service = FortuneService::new(storage);
    let mut rng = rand::thread_rng();

    match cmd {
        FortuneCommands::Draw { date } => {
            let entry = service.draw(date.unwrap_or_else(today), &mut rng)?;
            print!("{}", format_fortune(&entry));
        }

        FortuneCommands::Redraw { date } => {
            let entry = service.redraw(date.unwrap_or_else(today), &mut rng)?;
            print!("{}", format_fortune(&entry));
        }

        FortuneCommands::Show { date } => match service.get(date)? {
            Some(entry) => print!("{}", format_fortune(&entry)),
            None => {
                println!("No fortune drawn for {}", date);
                println!("Draw one with: moodfolio fortune draw");
            }
        },

        FortuneCommands::Stats { last } => {
            let stats_service = StatsService::new(storage);
            let stats = stats_service.fortune_stats()?;
            let trend = stats_service.fortune_trend(last)?;
            println!("{}", format_fortune_stats(&stats, &trend, last));
        }
    }

    Ok(())
}
