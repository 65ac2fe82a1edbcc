//! Whole-store housekeeping: usage numbers and wiping everything

use crate::error::MoodfolioResult;
use crate::storage::Storage;

/// Share of the quota at which storage is reported as full
pub const FULL_THRESHOLD: f64 = 0.9;

/// Entry counts and on-disk usage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageStats {
    pub mood_entries: usize,
    pub fortune_entries: usize,
    pub favorite_quotes: usize,
    pub bytes_used: u64,
    pub quota_bytes: u64,
}

impl StorageStats {
    /// Usage as a fraction of the quota
    pub fn usage_ratio(&self) -> f64 {
        if self.quota_bytes == 0 {
            return 1.0;
        }
        self.bytes_used as f64 / self.quota_bytes as f64
    }

    /// Usage as a percentage of the quota
    pub fn usage_percent(&self) -> f64 {
        self.usage_ratio() * 100.0
    }

    /// Whether usage is past [`FULL_THRESHOLD`]
    pub fn is_full(&self) -> bool {
        self.usage_ratio() > FULL_THRESHOLD
    }
}

/// Service for store-wide operations
pub struct DataService<'a> {
    storage: &'a Storage,
}

impl<'a> DataService<'a> {
    /// Create a new data service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Counts and disk usage against `quota_bytes`
    pub fn stats(&self, quota_bytes: u64) -> MoodfolioResult<StorageStats> {
        let stats = StorageStats {
            mood_entries: self.storage.moods.count()?,
            fortune_entries: self.storage.fortunes.count()?,
            favorite_quotes: self.storage.favorites.count()?,
            bytes_used: self.storage.size_on_disk(),
            quota_bytes,
        };
        if stats.is_full() {
            log::warn!(
                "Storage is {:.1}% of the {} byte quota",
                stats.usage_percent(),
                quota_bytes
            );
        }
        Ok(stats)
    }

    /// Empty every collection, reset settings to defaults, and persist
    pub fn clear_all(&self) -> MoodfolioResult<()> {
        let summary = format!(
            "cleared {} mood entries, {} fortune entries, {} favorites",
            self.storage.moods.count()?,
            self.storage.fortunes.count()?,
            self.storage.favorites.count()?
        );

        self.storage.clear_all()?;
        self.storage.save_all()?;
        self.storage.log_bulk("clear", summary)?;
        log::info!("Cleared all journal data");
        Ok(())
    }
}
