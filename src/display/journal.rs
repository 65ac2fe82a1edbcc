//! Store-wide display formatting: usage, settings, and backups

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::backup::BackupInfo;
use crate::models::Settings;
use crate::services::data::StorageStats;

#[derive(Tabled)]
struct BackupRow {
    #[tabled(rename = "Backup")]
    filename: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
}

fn format_bytes(bytes: u64) -> String {
    match bytes {
        b if b >= 1024 * 1024 => format!("{:.1} MiB", b as f64 / (1024.0 * 1024.0)),
        b if b >= 1024 => format!("{:.1} KiB", b as f64 / 1024.0),
        b => format!("{} B", b),
    }
}

/// Format entry counts and quota usage
pub fn format_storage_stats(stats: &StorageStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("  Mood entries:    {}\n", stats.mood_entries));
    output.push_str(&format!("  Fortune entries: {}\n", stats.fortune_entries));
    output.push_str(&format!("  Favorite quotes: {}\n", stats.favorite_quotes));
    output.push_str(&format!(
        "  Disk usage:      {} of {} ({:.1}%)\n",
        format_bytes(stats.bytes_used),
        format_bytes(stats.quota_bytes),
        stats.usage_percent()
    ));
    if stats.is_full() {
        output.push_str("  Storage is nearly full. Consider `moodfolio data cleanup`.\n");
    }
    output
}

/// Format the settings record
pub fn format_settings(settings: &Settings) -> String {
    format!(
        "  Theme:         {}\n  Reminders:     {}\n  Reminder time: {}\n",
        settings.theme,
        if settings.notifications.enabled { "on" } else { "off" },
        settings.notifications.time
    )
}

/// Format backups as a table
pub fn format_backup_list(backups: &[BackupInfo]) -> String {
    if backups.is_empty() {
        return "No backups found.".to_string();
    }

    let rows = backups.iter().map(|b| BackupRow {
        filename: b.filename.clone(),
        created: b.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        size: format_bytes(b.size_bytes),
        kind: if b.is_monthly { "monthly" } else { "daily" },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn test_storage_stats_warns_when_full() {
        let stats = StorageStats {
            mood_entries: 3,
            fortune_entries: 1,
            favorite_quotes: 0,
            bytes_used: 99,
            quota_bytes: 100,
        };
        let output = format_storage_stats(&stats);
        assert!(output.contains("Mood entries:    3"));
        assert!(output.contains("nearly full"));
    }

    #[test]
    fn test_settings() {
        let output = format_settings(&Settings::default());
        assert!(output.contains("auto"));
        assert!(output.contains("off"));
        assert!(output.contains("20:00"));
    }

    #[test]
    fn test_empty_backup_list() {
        assert_eq!(format_backup_list(&[]), "No backups found.");
    }
}
