//! Mood entry model
//!
//! One mood per calendar date, with an optional free-form note.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entry::DatedEntry;

/// Daily mood, ordered from most to least positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Happy,
    Smile,
    Love,
    Calm,
    Worried,
    Tired,
    Sad,
    Angry,
}

impl Mood {
    /// All moods in display order
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Happy,
            Mood::Smile,
            Mood::Love,
            Mood::Calm,
            Mood::Worried,
            Mood::Tired,
            Mood::Sad,
            Mood::Angry,
        ]
    }

    /// Emoji shown next to the mood
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😄",
            Mood::Smile => "🙂",
            Mood::Love => "🥰",
            Mood::Calm => "😌",
            Mood::Worried => "😟",
            Mood::Tired => "😴",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
        }
    }

    /// Score used for averages: 8 for `Happy` down to 1 for `Angry`
    pub fn score(&self) -> u8 {
        match self {
            Mood::Happy => 8,
            Mood::Smile => 7,
            Mood::Love => 6,
            Mood::Calm => 5,
            Mood::Worried => 4,
            Mood::Tired => 3,
            Mood::Sad => 2,
            Mood::Angry => 1,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mood::Happy => "Happy",
            Mood::Smile => "Smile",
            Mood::Love => "Love",
            Mood::Calm => "Calm",
            Mood::Worried => "Worried",
            Mood::Tired => "Tired",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        };
        f.write_str(name)
    }
}

impl FromStr for Mood {
    type Err = MoodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::all()
            .iter()
            .copied()
            .find(|m| m.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MoodParseError(s.to_string()))
    }
}

/// Error returned when a mood name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodParseError(pub String);

impl fmt::Display for MoodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = Mood::all().iter().map(|m| m.to_string()).collect();
        write!(f, "unknown mood '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for MoodParseError {}

/// A mood recorded for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    /// Stored as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Create a new entry stamped with the current time
    pub fn new(date: NaiveDate, mood: Mood, note: impl Into<String>) -> Self {
        Self {
            date,
            mood,
            note: note.into().trim().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), MoodValidationError> {
        if self.note.chars().count() > MAX_NOTE_CHARS {
            return Err(MoodValidationError::NoteTooLong(self.note.chars().count()));
        }
        Ok(())
    }
}

impl DatedEntry for MoodEntry {
    const KIND: &'static str = "mood entry";

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Upper bound on note length, in characters
pub const MAX_NOTE_CHARS: usize = 2000;

/// Validation errors for mood entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodValidationError {
    NoteTooLong(usize),
}

impl fmt::Display for MoodValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoteTooLong(len) => write!(
                f,
                "Note too long ({} characters, max {})",
                len, MAX_NOTE_CHARS
            ),
        }
    }
}

impl std::error::Error for MoodValidationError {}
