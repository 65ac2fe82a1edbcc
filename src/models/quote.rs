//! Favorite quote model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::QuoteId;

/// A quote the user saved from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteQuote {
    pub id: QuoteId,
    pub text: String,
    pub saved_at: DateTime<Utc>,
}

impl FavoriteQuote {
    /// Create a favorite saved now
    pub fn new(id: QuoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            saved_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match on the quote text
    pub fn matches(&self, keyword: &str) -> bool {
        self.text.to_lowercase().contains(&keyword.to_lowercase())
    }
}
