//! Mood service
//!
//! Records one mood per date. Every mutation is persisted immediately and
//! written to the audit trail.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{MoodfolioError, MoodfolioResult};
use crate::models::{Mood, MoodEntry};
use crate::storage::Storage;

/// Service for mood entries
pub struct MoodService<'a> {
    storage: &'a Storage,
}

impl<'a> MoodService<'a> {
    /// Create a new mood service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a mood for `date`, replacing any existing entry for that date
    pub fn record(&self, date: NaiveDate, mood: Mood, note: &str) -> MoodfolioResult<MoodEntry> {
        self.save(MoodEntry::new(date, mood, note))
    }

    /// Save an entry (last write wins for its date)
    pub fn save(&self, entry: MoodEntry) -> MoodfolioResult<MoodEntry> {
        entry
            .validate()
            .map_err(|e| MoodfolioError::Validation(e.to_string()))?;

        let replaced = self.storage.moods.upsert(entry.clone())?;
        self.storage.moods.save()?;

        let id = entry.date.to_string();
        let name = Some(entry.mood.to_string());
        match replaced {
            Some(before) => {
                self.storage
                    .log_update(EntityType::MoodEntry, id, name, &before, &entry)?
            }
            None => self.storage.log_create(EntityType::MoodEntry, id, name, &entry)?,
        }

        Ok(entry)
    }

    /// Get the entry for a date
    pub fn get(&self, date: NaiveDate) -> MoodfolioResult<Option<MoodEntry>> {
        self.storage.moods.get(date)
    }

    /// All entries in insertion order
    pub fn list(&self) -> MoodfolioResult<Vec<MoodEntry>> {
        self.storage.moods.get_all()
    }

    /// Entries with `start <= date <= end`, sorted by date
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> MoodfolioResult<Vec<MoodEntry>> {
        let mut entries = self.storage.moods.get_by_range(start, end)?;
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    /// Delete the entry for a date. Returns whether one existed.
    pub fn delete(&self, date: NaiveDate) -> MoodfolioResult<bool> {
        let Some(removed) = self.storage.moods.delete(date)? else {
            return Ok(false);
        };
        self.storage.moods.save()?;
        self.storage.log_delete(
            EntityType::MoodEntry,
            date.to_string(),
            Some(removed.mood.to_string()),
            &removed,
        )?;
        Ok(true)
    }

    /// Remove entries older than `days_to_keep` days before `today`.
    ///
    /// Returns `(removed, remaining)`. A window reaching past the earliest
    /// representable date keeps everything.
    pub fn cleanup(&self, today: NaiveDate, days_to_keep: u32) -> MoodfolioResult<(usize, usize)> {
        let cutoff = chrono::Duration::try_days(i64::from(days_to_keep))
            .and_then(|window| today.checked_sub_signed(window))
            .unwrap_or(NaiveDate::MIN);
        let removed = self.storage.moods.delete_where(|e| e.date < cutoff)?;
        let remaining = self.storage.moods.count()?;

        if removed > 0 {
            self.storage.moods.save()?;
            self.storage.log_bulk(
                "cleanup",
                format!("removed {} mood entries before {}", removed, cutoff),
            )?;
            log::info!("Removed {} mood entries older than {}", removed, cutoff);
        }

        Ok((removed, remaining))
    }
}
