//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod data;
pub mod export;
pub mod fortune;
pub mod import;
pub mod mood;
pub mod quote;
pub mod settings;

pub use backup::{handle_backup_command, BackupCommands};
pub use data::{handle_data_command, DataCommands};
pub use export::{handle_export_command, ExportArgs};
pub use fortune::{handle_fortune_command, FortuneCommands};
pub use import::{handle_import_command, ImportArgs};
pub use mood::{handle_mood_command, handle_stats_command, MoodCommands, StatsArgs};
pub use quote::{handle_quote_command, QuoteCommands};
pub use settings::{handle_settings_command, SettingsCommands};

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`, `today`, or `yesterday`
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today()),
        "yesterday" => Ok(today() - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", s)),
    }
}

/// Parse `YYYY-MM` into `(year, month)`
pub fn parse_month(s: &str) -> Result<(i32, u32), String> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{}' (expected YYYY-MM)", s))?;
    Ok((date.year(), date.month()))
}

/// The given month, or the current one
pub fn month_or_current(month: Option<(i32, u32)>) -> (i32, u32) {
    month.unwrap_or_else(|| {
        let now = today();
        (now.year(), now.month())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert_eq!(parse_date("Today").unwrap(), today());
        assert_eq!(parse_date("yesterday").unwrap(), today() - Duration::days(1));
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("03/10/2024").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("march").is_err());
    }
}
