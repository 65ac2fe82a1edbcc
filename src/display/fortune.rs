//! Fortune display formatting

use crate::models::{FortuneEntry, FortuneLevel};
use crate::services::stats::{FortuneStats, FortuneTrend};

/// Format a drawn fortune as a card
pub fn format_fortune(entry: &FortuneEntry) -> String {
    let mut output = String::new();

    output.push_str(&format!("Fortune for {}\n", entry.date));
    output.push_str(&format!("  {}\n\n", entry.level));
    output.push_str(&format!("  {}\n\n", entry.interpretation));
    output.push_str(&format!(
        "  Lucky color:     {} ({})\n",
        entry.lucky_color.name, entry.lucky_color.hex
    ));
    output.push_str(&format!("  Lucky number:    {}\n", entry.lucky_number));
    output.push_str(&format!(
        "  Lucky item:      {} ({})\n",
        entry.lucky_item.item, entry.lucky_item.suggestion
    ));
    output.push_str(&format!("  Lucky direction: {}\n", entry.lucky_direction));

    output
}

/// Format the level distribution and recent trend
pub fn format_fortune_stats(stats: &FortuneStats, trend: &FortuneTrend, last: usize) -> String {
    if stats.total == 0 {
        return "No fortunes drawn yet.".to_string();
    }

    let mut output = format!("Fortunes drawn: {}\n", stats.total);
    if let Some(level) = stats.most_common {
        output.push_str(&format!("Most common:    {}\n", level));
    }
    output.push('\n');

    for level in FortuneLevel::all() {
        let count = stats.level_counts.get(level).copied().unwrap_or(0);
        output.push_str(&format!(
            "  {:<4} {:<17} {:>3}  {}\n",
            level.label(),
            level.english(),
            count,
            "#".repeat(count)
        ));
    }

    output.push_str(&format!(
        "\nLast {}: {} good, {} neutral, {} bad\n",
        last.min(trend.total()),
        trend.good,
        trend.neutral,
        trend.bad
    ));

    output
}
