//! Mood display formatting
//!
//! Formats mood entries as a table, a month calendar, and monthly stats.

use chrono::{Datelike, NaiveDate};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::MoodEntry;
use crate::services::stats::{month_bounds, MonthlyStats};

#[derive(Tabled)]
struct MoodRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Mood")]
    mood: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Longest note shown in list views
const NOTE_PREVIEW_CHARS: usize = 48;

fn preview(note: &str) -> String {
    if note.chars().count() <= NOTE_PREVIEW_CHARS {
        return note.to_string();
    }
    let cut: String = note.chars().take(NOTE_PREVIEW_CHARS - 3).collect();
    format!("{}...", cut)
}

/// Format mood entries as a table
pub fn format_mood_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No mood entries found.".to_string();
    }

    let rows = entries.iter().map(|e| MoodRow {
        date: e.date.to_string(),
        mood: format!("{} {}", e.mood.emoji(), e.mood),
        note: preview(&e.note),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format one entry in full
pub fn format_mood_details(entry: &MoodEntry) -> String {
    let mut output = format!("{}  {} {}\n", entry.date, entry.mood.emoji(), entry.mood);
    if !entry.note.is_empty() {
        output.push_str(&format!("  {}\n", entry.note));
    }
    output.push_str(&format!(
        "  Recorded: {}\n",
        entry.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output
}

/// Month grid, Monday first, showing the mood emoji on days with an entry
pub fn format_month_calendar(year: i32, month: u32, entries: &[MoodEntry]) -> String {
    let Ok((start, end)) = month_bounds(year, month) else {
        return format!("Invalid month: {}-{:02}", year, month);
    };

    let mut output = format!("{}\n", start.format("%B %Y"));
    output.push_str(" Mo  Tu  We  Th  Fr  Sa  Su\n");

    let lead = start.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec!["    ".to_string(); lead];

    let mut day = start;
    while day <= end {
        cells.push(calendar_cell(day, entries));
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    for week in cells.chunks(7) {
        output.push_str(week.join("").trim_end());
        output.push('\n');
    }
    output
}

fn calendar_cell(day: NaiveDate, entries: &[MoodEntry]) -> String {
    match entries.iter().find(|e| e.date == day) {
        // Emoji are two columns wide
        Some(entry) => format!(" {} ", entry.mood.emoji()),
        None => format!(" {:>2} ", day.day()),
    }
}

/// Format monthly totals and streak
pub fn format_monthly_stats(stats: &MonthlyStats, streak: usize) -> String {
    let mut output = format!("Mood stats for {}-{:02}\n", stats.year, stats.month);
    output.push_str(&format!("  Entries:        {}\n", stats.total));
    output.push_str(&format!("  Longest streak: {} day(s)\n", streak));

    if let Some(mood) = stats.dominant_mood() {
        output.push_str(&format!("  Most frequent:  {} {}\n", mood.emoji(), mood));
    }
    if let Some(average) = stats.average_score() {
        output.push_str(&format!("  Average score:  {:.1} / 8\n", average));
    }

    if stats.total > 0 {
        output.push('\n');
        for (mood, count) in &stats.mood_counts {
            let percent = *count as f64 / stats.total as f64 * 100.0;
            output.push_str(&format!(
                "  {} {:<9} {:>3}  {:>5.1}%  {}\n",
                mood.emoji(),
                mood.to_string(),
                count,
                percent,
                "#".repeat(*count)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use std::collections::BTreeMap;

    fn entry(day: u32, mood: Mood, note: &str) -> MoodEntry {
        MoodEntry::new(NaiveDate::from_ymd_opt(2024, 3, day).unwrap(), mood, note)
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_mood_list(&[]), "No mood entries found.");
    }

    #[test]
    fn test_list_contains_rows() {
        let output = format_mood_list(&[entry(10, Mood::Happy, "sunny"), entry(11, Mood::Sad, "")]);
        assert!(output.contains("Date"));
        assert!(output.contains("2024-03-10"));
        assert!(output.contains("Happy"));
        assert!(output.contains("sunny"));
    }

    #[test]
    fn test_long_note_is_shortened() {
        let long = "a".repeat(200);
        let output = format_mood_list(&[entry(10, Mood::Calm, &long)]);
        assert!(output.contains("..."));
        assert!(!output.contains(&long));
    }

    #[test]
    fn test_calendar_layout() {
        // March 2024 starts on a Friday
        let output = format_month_calendar(2024, 3, &[entry(10, Mood::Happy, "")]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "March 2024");
        assert!(lines[2].trim_start().starts_with('1'));
        assert!(output.contains(Mood::Happy.emoji()));
        assert!(output.contains("31"));
    }

    #[test]
    fn test_monthly_stats_output() {
        let mut mood_counts = BTreeMap::new();
        mood_counts.insert(Mood::Happy, 2);
        mood_counts.insert(Mood::Sad, 1);
        let stats = MonthlyStats {
            year: 2024,
            month: 3,
            total: 3,
            mood_counts,
            entries: vec![],
        };

        let output = format_monthly_stats(&stats, 2);
        assert!(output.contains("2024-03"));
        assert!(output.contains("Longest streak: 2"));
        assert!(output.contains("Most frequent:"));
        assert!(output.contains("66.7%"));
        // (8 * 2 + 2) / 3
        assert!(output.contains("Average score:  6.0 / 8"));
    }

    #[test]
    fn test_monthly_stats_empty_month_has_no_average() {
        let stats = MonthlyStats {
            year: 2024,
            month: 3,
            total: 0,
            mood_counts: BTreeMap::new(),
            entries: vec![],
        };

        let output = format_monthly_stats(&stats, 0);
        assert!(!output.contains("Average score"));
    }
}
