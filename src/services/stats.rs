//! Statistics over the entry store
//!
//! Everything here is recomputed on demand from the repositories and never
//! stored.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{MoodfolioError, MoodfolioResult};
use crate::models::{FortuneEntry, FortuneLevel, Mood, MoodEntry, Outlook};
use crate::storage::Storage;

/// First and last day of a calendar month
pub fn month_bounds(year: i32, month: u32) -> MoodfolioResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        MoodfolioError::Validation(format!("Invalid month: {}-{:02}", year, month))
    })?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next_month
        .map(|d| d - Duration::days(1))
        .ok_or_else(|| MoodfolioError::Validation(format!("Year out of range: {}", year)))?;
    Ok((start, end))
}

/// Longest run of consecutive calendar days among `dates`
pub fn longest_run(dates: &[NaiveDate]) -> usize {
    let mut sorted = dates.to_vec();
    sorted.sort();
    sorted.dedup();

    let Some(first) = sorted.first() else {
        return 0;
    };

    let mut longest = 1;
    let mut current = 1;
    let mut previous = *first;
    for &date in &sorted[1..] {
        if date - previous == Duration::days(1) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
        previous = date;
    }
    longest
}

/// Mood summary for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub year: i32,
    pub month: u32,
    pub total: usize,
    pub mood_counts: BTreeMap<Mood, usize>,
    /// Entries in the month, sorted by date
    pub entries: Vec<MoodEntry>,
}

impl MonthlyStats {
    /// The mood recorded most often, ties going to the earlier mood
    pub fn dominant_mood(&self) -> Option<Mood> {
        most_common(&self.mood_counts)
    }

    /// Mean mood score over the month, `None` when nothing was recorded
    pub fn average_score(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let sum: usize = self
            .mood_counts
            .iter()
            .map(|(mood, count)| usize::from(mood.score()) * count)
            .sum();
        Some(sum as f64 / self.total as f64)
    }
}

/// Fortune level distribution
#[derive(Debug, Clone, PartialEq)]
pub struct FortuneStats {
    pub total: usize,
    pub level_counts: BTreeMap<FortuneLevel, usize>,
    pub most_common: Option<FortuneLevel>,
}

/// Good/neutral/bad split over recent fortunes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FortuneTrend {
    pub good: usize,
    pub neutral: usize,
    pub bad: usize,
}

impl FortuneTrend {
    /// Number of fortunes considered
    pub fn total(&self) -> usize {
        self.good + self.neutral + self.bad
    }
}

fn most_common<K: Copy + Ord>(counts: &BTreeMap<K, usize>) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for (&key, &count) in counts {
        if count > 0 && best.map_or(true, |(_, n)| count > n) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

/// Read-only aggregates over moods and fortunes
pub struct StatsService<'a> {
    storage: &'a Storage,
}

impl<'a> StatsService<'a> {
    /// Create a new stats service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn month_entries(&self, year: i32, month: u32) -> MoodfolioResult<Vec<MoodEntry>> {
        let (start, end) = month_bounds(year, month)?;
        let mut entries = self.storage.moods.get_by_range(start, end)?;
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    /// Mood totals for a month
    pub fn monthly_stats(&self, year: i32, month: u32) -> MoodfolioResult<MonthlyStats> {
        let entries = self.month_entries(year, month)?;

        let mut mood_counts = BTreeMap::new();
        for entry in &entries {
            *mood_counts.entry(entry.mood).or_insert(0) += 1;
        }

        Ok(MonthlyStats {
            year,
            month,
            total: entries.len(),
            mood_counts,
            entries,
        })
    }

    /// Longest run of consecutive days with a mood entry within the month.
    ///
    /// Runs crossing the month boundary are only counted up to the boundary.
    pub fn streak_days(&self, year: i32, month: u32) -> MoodfolioResult<usize> {
        let dates: Vec<NaiveDate> = self
            .month_entries(year, month)?
            .iter()
            .map(|e| e.date)
            .collect();
        Ok(longest_run(&dates))
    }

    /// Mood totals for the month containing `date`
    pub fn stats_for_month_of(&self, date: NaiveDate) -> MoodfolioResult<MonthlyStats> {
        self.monthly_stats(date.year(), date.month())
    }

    /// Level distribution over every stored fortune
    pub fn fortune_stats(&self) -> MoodfolioResult<FortuneStats> {
        let fortunes = self.storage.fortunes.get_all()?;

        let mut level_counts = BTreeMap::new();
        for fortune in &fortunes {
            *level_counts.entry(fortune.level).or_insert(0) += 1;
        }

        Ok(FortuneStats {
            total: fortunes.len(),
            most_common: most_common(&level_counts),
            level_counts,
        })
    }

    /// Outlook split over the `last` most recent fortunes by date
    pub fn fortune_trend(&self, last: usize) -> MoodfolioResult<FortuneTrend> {
        let mut fortunes: Vec<FortuneEntry> = self.storage.fortunes.get_all()?;
        fortunes.sort_by_key(|f| f.date);
        let start = fortunes.len().saturating_sub(last);

        let mut trend = FortuneTrend::default();
        for fortune in &fortunes[start..] {
            match fortune.level.outlook() {
                Outlook::Good => trend.good += 1,
                Outlook::Neutral => trend.neutral += 1,
                Outlook::Bad => trend.bad += 1,
            }
        }
        Ok(trend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoodfolioPaths;
    use crate::models::{Fortune, LuckyColor, LuckyItem};
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn add_mood(storage: &Storage, d: &str, mood: Mood) {
        storage.moods.upsert(MoodEntry::new(date(d), mood, "")).unwrap();
    }

    fn add_fortune(storage: &Storage, d: &str, level: FortuneLevel) {
        let fortune = Fortune {
            level,
            color: "#000000".into(),
            interpretation: "text".into(),
            lucky_color: LuckyColor {
                name: "Ivory".into(),
                hex: "#fffff0".into(),
            },
            lucky_number: 7,
            lucky_item: LuckyItem {
                item: "Tea".into(),
                suggestion: "Sip".into(),
            },
            lucky_direction: "East".into(),
            drawn_at: Utc::now(),
        };
        storage.fortunes.upsert(fortune.into_entry(date(d))).unwrap();
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(2024, 2).unwrap(),
            (date("2024-02-01"), date("2024-02-29"))
        );
        assert_eq!(
            month_bounds(2023, 2).unwrap(),
            (date("2023-02-01"), date("2023-02-28"))
        );
        assert_eq!(
            month_bounds(2024, 12).unwrap(),
            (date("2024-12-01"), date("2024-12-31"))
        );
        assert!(month_bounds(2024, 13).is_err());
        assert!(month_bounds(2024, 0).is_err());
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run(&[]), 0);
        assert_eq!(longest_run(&[date("2024-03-10")]), 1);
        assert_eq!(
            longest_run(&[date("2024-03-12"), date("2024-03-10"), date("2024-03-11")]),
            3
        );
        assert_eq!(
            longest_run(&[
                date("2024-03-01"),
                date("2024-03-02"),
                date("2024-03-05"),
                date("2024-03-06"),
                date("2024-03-07"),
            ]),
            3
        );
    }

    #[test]
    fn test_streak_example() {
        let (_temp_dir, storage) = create_test_storage();
        add_mood(&storage, "2024-03-10", Mood::Happy);
        add_mood(&storage, "2024-03-12", Mood::Sad);

        let stats = StatsService::new(&storage);
        assert_eq!(stats.streak_days(2024, 3).unwrap(), 1);

        add_mood(&storage, "2024-03-11", Mood::Calm);
        assert_eq!(stats.streak_days(2024, 3).unwrap(), 3);
    }

    #[test]
    fn test_streak_empty_month() {
        let (_temp_dir, storage) = create_test_storage();
        let stats = StatsService::new(&storage);
        assert_eq!(stats.streak_days(2024, 3).unwrap(), 0);
    }

    #[test]
    fn test_streak_stops_at_month_boundary() {
        let (_temp_dir, storage) = create_test_storage();
        add_mood(&storage, "2024-01-30", Mood::Happy);
        add_mood(&storage, "2024-01-31", Mood::Happy);
        add_mood(&storage, "2024-02-01", Mood::Happy);

        let stats = StatsService::new(&storage);
        assert_eq!(stats.streak_days(2024, 1).unwrap(), 2);
        assert_eq!(stats.streak_days(2024, 2).unwrap(), 1);
    }

    #[test]
    fn test_monthly_stats_leap_february() {
        let (_temp_dir, storage) = create_test_storage();
        add_mood(&storage, "2024-02-29", Mood::Happy);
        add_mood(&storage, "2024-02-01", Mood::Happy);
        add_mood(&storage, "2024-03-01", Mood::Sad);
        add_mood(&storage, "2024-01-31", Mood::Sad);

        let stats = StatsService::new(&storage).monthly_stats(2024, 2).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.entries[0].date, date("2024-02-01"));
        assert_eq!(stats.entries[1].date, date("2024-02-29"));
        assert_eq!(stats.mood_counts.get(&Mood::Happy), Some(&2));
        assert_eq!(stats.mood_counts.get(&Mood::Sad), None);
        assert_eq!(stats.dominant_mood(), Some(Mood::Happy));
    }

    #[test]
    fn test_average_score() {
        let (_temp_dir, storage) = create_test_storage();
        add_mood(&storage, "2024-03-01", Mood::Happy);
        add_mood(&storage, "2024-03-02", Mood::Worried);
        add_mood(&storage, "2024-03-03", Mood::Angry);
        add_mood(&storage, "2024-04-01", Mood::Sad);

        let stats = StatsService::new(&storage).monthly_stats(2024, 3).unwrap();
        // (8 + 4 + 1) / 3
        let average = stats.average_score().unwrap();
        assert!((average - 13.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_score_empty_month() {
        let (_temp_dir, storage) = create_test_storage();
        let stats = StatsService::new(&storage).monthly_stats(2024, 3).unwrap();
        assert_eq!(stats.average_score(), None);
    }

    #[test]
    fn test_monthly_stats_invalid_month() {
        let (_temp_dir, storage) = create_test_storage();
        let err = StatsService::new(&storage).monthly_stats(2024, 13).unwrap_err();
        assert!(matches!(err, MoodfolioError::Validation(_)));
    }

    #[test]
    fn test_fortune_stats() {
        let (_temp_dir, storage) = create_test_storage();
        let stats = StatsService::new(&storage);
        assert_eq!(stats.fortune_stats().unwrap().most_common, None);

        add_fortune(&storage, "2024-03-01", FortuneLevel::Blessing);
        add_fortune(&storage, "2024-03-02", FortuneLevel::Neutral);
        add_fortune(&storage, "2024-03-03", FortuneLevel::Neutral);

        let result = stats.fortune_stats().unwrap();
        assert_eq!(result.total, 3);
        assert_eq!(result.level_counts.get(&FortuneLevel::Neutral), Some(&2));
        assert_eq!(result.most_common, Some(FortuneLevel::Neutral));
    }

    #[test]
    fn test_fortune_trend_uses_most_recent() {
        let (_temp_dir, storage) = create_test_storage();
        add_fortune(&storage, "2024-03-05", FortuneLevel::Misfortune);
        add_fortune(&storage, "2024-03-01", FortuneLevel::GreatMisfortune);
        add_fortune(&storage, "2024-03-04", FortuneLevel::Neutral);
        add_fortune(&storage, "2024-03-03", FortuneLevel::SmallBlessing);

        let trend = StatsService::new(&storage).fortune_trend(3).unwrap();
        assert_eq!(
            trend,
            FortuneTrend {
                good: 1,
                neutral: 1,
                bad: 1
            }
        );
        assert_eq!(trend.total(), 3);
    }
}
