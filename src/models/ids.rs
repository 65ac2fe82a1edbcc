//! Identifier types
//!
//! Favorite quotes are keyed by an opaque string id. Catalog quotes use a
//! stable `q-<index>` id; anything else gets a random UUID-based id.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a favorite quote
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    /// Wrap an existing id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a new random id
    pub fn generate() -> Self {
        Self(format!("quote-{}", Uuid::new_v4().simple()))
    }

    /// Stable id for the quote at `index` in the built-in catalog
    pub fn for_catalog_index(index: usize) -> Self {
        Self(format!("q-{}", index))
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
