//! Favorite quote repository
//!
//! Manages loading and saving favorites to favorites.json. Ids are unique;
//! adding an id that is already present does nothing.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MoodfolioError;
use crate::models::{FavoriteQuote, QuoteId};

use super::file_io::{read_json, write_json_atomic};
use super::{lock_poisoned, StoreCollection};

/// Repository for favorite quotes
pub struct FavoriteRepository {
    path: PathBuf,
    data: RwLock<Vec<FavoriteQuote>>,
}

impl FavoriteRepository {
    /// Create a new favorites repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load favorites from disk, dropping repeated ids
    pub fn load(&self) -> Result<(), MoodfolioError> {
        let from_disk: Vec<FavoriteQuote> = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_poisoned)?;

        data.clear();
        for quote in from_disk {
            if data.iter().any(|q| q.id == quote.id) {
                log::warn!("Skipping repeated favorite id {}", quote.id);
                continue;
            }
            data.push(quote);
        }

        log::debug!("Loaded {} favorites from {}", data.len(), self.path.display());
        Ok(())
    }

    /// Save favorites to disk
    pub fn save(&self) -> Result<(), MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// Add a favorite. Returns `false` if the id was already present.
    pub fn add(&self, quote: FavoriteQuote) -> Result<bool, MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        if data.iter().any(|q| q.id == quote.id) {
            return Ok(false);
        }
        data.push(quote);
        Ok(true)
    }

    /// Delete a favorite by id. Returns the removed quote, if any.
    pub fn delete(&self, id: &QuoteId) -> Result<Option<FavoriteQuote>, MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        Ok(data
            .iter()
            .position(|q| &q.id == id)
            .map(|index| data.remove(index)))
    }

    /// Get a favorite by id
    pub fn get(&self, id: &QuoteId) -> Result<Option<FavoriteQuote>, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.iter().find(|q| &q.id == id).cloned())
    }

    /// Whether a favorite with this id exists
    pub fn contains_id(&self, id: &QuoteId) -> Result<bool, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.iter().any(|q| &q.id == id))
    }

    /// Find a favorite by exact text
    pub fn find_by_text(&self, text: &str) -> Result<Option<FavoriteQuote>, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.iter().find(|q| q.text == text).cloned())
    }

    /// Get all favorites
    pub fn get_all(&self) -> Result<Vec<FavoriteQuote>, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.clone())
    }

    /// Replace the whole collection, keeping the first of any repeated id
    pub fn replace_all(&self, quotes: Vec<FavoriteQuote>) -> Result<(), MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.clear();
        for quote in quotes {
            if !data.iter().any(|q| q.id == quote.id) {
                data.push(quote);
            }
        }
        Ok(())
    }

    /// Remove every favorite
    pub fn clear(&self) -> Result<(), MoodfolioError> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.clear();
        Ok(())
    }

    /// Count favorites
    pub fn count(&self) -> Result<usize, MoodfolioError> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.len())
    }
}

impl StoreCollection for FavoriteRepository {
    fn load(&self) -> Result<(), MoodfolioError> {
        FavoriteRepository::load(self)
    }

    fn save(&self) -> Result<(), MoodfolioError> {
        FavoriteRepository::save(self)
    }

    fn clear(&self) -> Result<(), MoodfolioError> {
        FavoriteRepository::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, FavoriteRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = FavoriteRepository::new(temp_dir.path().join("favorites.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_add_is_idempotent_by_id() {
        let (_temp_dir, repo) = create_test_repo();

        assert!(repo.add(FavoriteQuote::new(QuoteId::new("q-1"), "one")).unwrap());
        assert!(!repo.add(FavoriteQuote::new(QuoteId::new("q-1"), "other text")).unwrap());

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(&QuoteId::new("q-1")).unwrap().unwrap().text, "one");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let id = QuoteId::new("q-2");
        repo.add(FavoriteQuote::new(id.clone(), "two")).unwrap();

        assert!(repo.delete(&id).unwrap().is_some());
        assert!(repo.delete(&id).unwrap().is_none());
        assert!(!repo.contains_id(&id).unwrap());
    }

    #[test]
    fn test_find_by_text() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(FavoriteQuote::new(QuoteId::new("q-3"), "Keep going")).unwrap();

        assert!(repo.find_by_text("Keep going").unwrap().is_some());
        assert!(repo.find_by_text("keep going").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.add(FavoriteQuote::new(QuoteId::new("q-4"), "four")).unwrap();
        repo.save().unwrap();

        let reloaded = FavoriteRepository::new(temp_dir.path().join("favorites.json"));
        reloaded.load().unwrap();
        assert!(reloaded.contains_id(&QuoteId::new("q-4")).unwrap());
    }
}
