//! Quote catalog and favorites
//!
//! The catalog is a fixed list compiled into the binary. Favorites only keep
//! the id and text of a catalog quote (or of a quote the user typed in).

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::audit::EntityType;
use crate::error::{MoodfolioError, MoodfolioResult};
use crate::models::{FavoriteQuote, QuoteId};
use crate::storage::Storage;

/// Built-in quotes. Ids are `q-<index>`, so only append to this list.
pub const QUOTES: &[&str] = &[
    "The best way to predict the future is to create it.",
    "Happiness is not something ready made. It comes from your own actions.",
    "Do what you can, with what you have, where you are.",
    "It always seems impossible until it's done.",
    "Act as if what you do makes a difference. It does.",
    "Keep your face always toward the sunshine and shadows will fall behind you.",
    "You are never too old to set another goal or to dream a new dream.",
    "What lies behind us and what lies before us are tiny matters compared to what lies within us.",
    "Believe you can and you're halfway there.",
    "The only way to do great work is to love what you do.",
    "Start where you are. Use what you have. Do what you can.",
    "Difficult roads often lead to beautiful destinations.",
    "Small steps every day add up to big results.",
    "Be kind to yourself. You are doing the best you can.",
    "Every day may not be good, but there is something good in every day.",
    "Rest if you must, but don't quit.",
    "Your present circumstances don't determine where you can go.",
    "Stay hungry, stay foolish.",
    "The journey of a thousand miles begins with one step.",
    "Nothing is impossible. The word itself says I'm possible.",
];

/// Days a favorite counts as recently saved
pub const RECENT_DAYS: i64 = 7;

/// A quote from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogQuote {
    pub index: usize,
    pub text: &'static str,
}

impl CatalogQuote {
    /// Stable id of this quote
    pub fn id(&self) -> QuoteId {
        QuoteId::for_catalog_index(self.index)
    }
}

/// Look up a catalog quote by position
pub fn catalog_quote(index: usize) -> Option<CatalogQuote> {
    QUOTES.get(index).map(|&text| CatalogQuote { index, text })
}

/// Pick a random catalog quote
pub fn draw_quote<R: Rng + ?Sized>(rng: &mut R) -> CatalogQuote {
    let index = rng.gen_range(0..QUOTES.len());
    CatalogQuote {
        index,
        text: QUOTES[index],
    }
}

/// Favorite counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteStats {
    pub total: usize,
    /// Saved within the last [`RECENT_DAYS`] days
    pub recent: usize,
}

/// Service for favorite quotes
pub struct FavoriteService<'a> {
    storage: &'a Storage,
}

impl<'a> FavoriteService<'a> {
    /// Create a new favorite service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Save a quote as a favorite.
    ///
    /// Adding an id that is already saved returns the stored favorite
    /// unchanged. A different id with the same text is rejected.
    pub fn add(&self, id: QuoteId, text: &str) -> MoodfolioResult<FavoriteQuote> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MoodfolioError::Validation("Quote text cannot be empty".into()));
        }

        if let Some(existing) = self.storage.favorites.get(&id)? {
            return Ok(existing);
        }
        if let Some(existing) = self.storage.favorites.find_by_text(text)? {
            return Err(MoodfolioError::Duplicate {
                entity_type: "Favorite quote",
                identifier: existing.id.to_string(),
            });
        }

        let quote = FavoriteQuote::new(id, text);
        self.storage.favorites.add(quote.clone())?;
        self.storage.favorites.save()?;
        self.storage.log_create(
            EntityType::FavoriteQuote,
            quote.id.as_str(),
            Some(quote.text.clone()),
            &quote,
        )?;

        Ok(quote)
    }

    /// Save a catalog quote by its position
    pub fn add_from_catalog(&self, index: usize) -> MoodfolioResult<FavoriteQuote> {
        let quote = catalog_quote(index).ok_or_else(|| MoodfolioError::NotFound {
            entity_type: "Catalog quote",
            identifier: index.to_string(),
        })?;
        self.add(quote.id(), quote.text)
    }

    /// Save a quote that is not in the catalog
    pub fn add_custom(&self, text: &str) -> MoodfolioResult<FavoriteQuote> {
        self.add(QuoteId::generate(), text)
    }

    /// Remove a favorite. Returns whether it existed.
    pub fn delete(&self, id: &QuoteId) -> MoodfolioResult<bool> {
        let Some(removed) = self.storage.favorites.delete(id)? else {
            return Ok(false);
        };
        self.storage.favorites.save()?;
        self.storage.log_delete(
            EntityType::FavoriteQuote,
            id.as_str(),
            Some(removed.text.clone()),
            &removed,
        )?;
        Ok(true)
    }

    /// Whether a quote id is saved
    pub fn is_favorite(&self, id: &QuoteId) -> MoodfolioResult<bool> {
        self.storage.favorites.contains_id(id)
    }

    /// All favorites, most recently saved first
    pub fn list(&self) -> MoodfolioResult<Vec<FavoriteQuote>> {
        let mut quotes = self.storage.favorites.get_all()?;
        quotes.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(quotes)
    }

    /// Favorites whose text contains `keyword`, ignoring case
    pub fn search(&self, keyword: &str) -> MoodfolioResult<Vec<FavoriteQuote>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return self.list();
        }
        Ok(self
            .list()?
            .into_iter()
            .filter(|q| q.matches(keyword))
            .collect())
    }

    /// Total and recently saved counts as of `now`
    pub fn stats(&self, now: DateTime<Utc>) -> MoodfolioResult<FavoriteStats> {
        let quotes = self.storage.favorites.get_all()?;
        let cutoff = now - Duration::days(RECENT_DAYS);
        Ok(FavoriteStats {
            total: quotes.len(),
            recent: quotes.iter().filter(|q| q.saved_at >= cutoff).count(),
        })
    }

    /// A random favorite, if any are saved
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> MoodfolioResult<Option<FavoriteQuote>> {
        let quotes = self.storage.favorites.get_all()?;
        Ok(quotes.choose(rng).cloned())
    }
}
