//! Custom error types for Moodfolio
//!
//! This module defines the error hierarchy for the journal using thiserror.
//! Missing records are not errors: lookups return `Option` and deletes
//! return `bool`.

use thiserror::Error;

/// The main error type for Moodfolio operations
#[derive(Error, Debug)]
pub enum MoodfolioError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import document is missing required fields or has malformed records
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Entity not found errors (only raised by callers that require a record)
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Underlying persistence medium unavailable, unreadable, or over quota
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MoodfolioError {
    /// Create a "not found" error for mood entries
    pub fn mood_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Mood entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for fortune entries
    pub fn fortune_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Fortune entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for favorite quotes
    pub fn favorite_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Favorite quote",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an import format error
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Check if this is a storage fault
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for MoodfolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MoodfolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for MoodfolioError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for MoodfolioError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Moodfolio operations
pub type MoodfolioResult<T> = Result<T, MoodfolioError>;
