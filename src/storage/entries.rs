//! Repository for records keyed by calendar date
//!
//! Used for both mood and fortune entries. Records are kept in insertion
//! order; a record for an existing date replaces the old one in place.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::MoodfolioError;
use crate::models::{DatedEntry, FortuneEntry, MoodEntry};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_poisoned, StoreCollection};

/// Mood entries repository
pub type MoodRepository = EntryRepository<MoodEntry>;

/// Fortune entries repository
pub type FortuneRepository = EntryRepository<FortuneEntry>;

/// Repository holding at most one record per date
pub struct EntryRepository<E: DatedEntry> {
    path: PathBuf,
    data: RwLock<Vec<E>>,
}

impl<E: DatedEntry> EntryRepository<E> {
    /// Create a new repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load entries from disk
    ///
    /// A file holding two records for one date (hand edits, old exports) is
    /// collapsed so the later record wins.
    pub fn load(&self) -> Result<(), MoodfolioError> {
        let from_disk: Vec<E> = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_poisoned)?;

        data.clear();
        for entry in from_disk {
            upsert_into(&mut data, entry);
        }

        log::debug!("Loaded {} {}s from {}", data.len(), E::KIND, self.path.display());
        Ok(())
    }

    /// Save entries to disk
    pub fn save(&self) -> Result<(), MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        write_json_atomic(&self.path, &*data)?;
        log::debug!("Saved {} {}s to {}", data.len(), E::KIND, self.path.display());
        Ok(())
    }

    /// Insert a record, replacing the one with the same date if present.
    ///
    /// Returns the replaced record.
    pub fn upsert(&self, entry: E) -> Result<Option<E>, MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        Ok(upsert_into(&mut data, entry))
    }

    /// Get the record for a date
    pub fn get(&self, date: NaiveDate) -> Result<Option<E>, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.iter().find(|e| e.date() == date).cloned())
    }

    /// Get all records in insertion order
    pub fn get_all(&self) -> Result<Vec<E>, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.clone())
    }

    /// Get records with `start <= date <= end`, in insertion order
    pub fn get_by_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<E>, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data
            .iter()
            .filter(|e| e.date() >= start && e.date() <= end)
            .cloned()
            .collect())
    }

    /// Delete the record for a date. Returns the removed record, if any.
    pub fn delete(&self, date: NaiveDate) -> Result<Option<E>, MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        Ok(data
            .iter()
            .position(|e| e.date() == date)
            .map(|index| data.remove(index)))
    }

    /// Delete every record matching `predicate`, returning how many went
    pub fn delete_where<F>(&self, predicate: F) -> Result<usize, MoodfolioError>
    where
        F: Fn(&E) -> bool,
    {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        let before = data.len();
        data.retain(|e| !predicate(e));
        Ok(before - data.len())
    }

    /// Replace the whole collection
    pub fn replace_all(&self, entries: Vec<E>) -> Result<(), MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.clear();
        for entry in entries {
            upsert_into(&mut data, entry);
        }
        Ok(())
    }

    /// Remove every record
    pub fn clear(&self) -> Result<(), MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.clear();
        Ok(())
    }

    /// Count records
    pub fn count(&self) -> Result<usize, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.len())
    }
}

impl<E: DatedEntry> StoreCollection for EntryRepository<E> {
    fn load(&self) -> Result<(), MoodfolioError> {
        EntryRepository::load(self)
    }

    fn save(&self) -> Result<(), MoodfolioError> {
        EntryRepository::save(self)
    }

    fn clear(&self) -> Result<(), MoodfolioError> {
        EntryRepository::clear(self)
    }
}

/// Replace-in-place or append; returns the replaced record
pub(crate) fn upsert_into<E: DatedEntry>(entries: &mut Vec<E>, entry: E) -> Option<E> {
    match entries.iter().position(|e| e.date() == entry.date()) {
        Some(index) => Some(std::mem::replace(&mut entries[index], entry)),
        None => {
            entries.push(entry);
            None
        }
    }
}
