//! Shared contract for records keyed by calendar date

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};

/// A record stored at most once per calendar date
pub trait DatedEntry: Clone + Serialize + DeserializeOwned {
    /// Human-readable kind, used in logs and errors
    const KIND: &'static str;

    /// The date this record belongs to
    fn date(&self) -> NaiveDate;
}
