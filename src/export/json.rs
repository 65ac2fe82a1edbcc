//! JSON export and the import document reader
//!
//! The export document is a snapshot of the whole store:
//! `{moodEntries, fortuneEntries, favoriteQuotes, settings, exportDate}`.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MoodfolioError, MoodfolioResult};
use crate::models::{FavoriteQuote, FortuneEntry, MoodEntry, Settings, SettingsPatch};
use crate::storage::Storage;

/// Top-level keys an import document must carry
pub const REQUIRED_KEYS: [&str; 3] = ["moodEntries", "favoriteQuotes", "settings"];

/// Whole-store snapshot written by `export`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub mood_entries: Vec<MoodEntry>,
    pub fortune_entries: Vec<FortuneEntry>,
    pub favorite_quotes: Vec<FavoriteQuote>,
    pub settings: Settings,
    pub export_date: DateTime<Utc>,
}

impl ExportDocument {
    /// Snapshot the current store
    pub fn from_storage(storage: &Storage) -> MoodfolioResult<Self> {
        Ok(Self {
            mood_entries: storage.moods.get_all()?,
            fortune_entries: storage.fortunes.get_all()?,
            favorite_quotes: storage.favorites.get_all()?,
            settings: storage.settings.get()?,
            export_date: Utc::now(),
        })
    }
}

/// A validated document ready to be imported.
///
/// Settings are read as a patch: keys the document leaves out are not
/// touched by a merge import.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDocument {
    pub mood_entries: Vec<MoodEntry>,
    #[serde(default)]
    pub fortune_entries: Vec<FortuneEntry>,
    pub favorite_quotes: Vec<FavoriteQuote>,
    pub settings: SettingsPatch,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
}

impl ImportDocument {
    /// Parse a JSON document
    pub fn from_json(input: &str) -> MoodfolioResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| MoodfolioError::InvalidFormat(format!("not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Validate and convert an already parsed document
    pub fn from_value(value: Value) -> MoodfolioResult<Self> {
        validate_value(&value)?;

        let document: ImportDocument = serde_json::from_value(value)
            .map_err(|e| MoodfolioError::InvalidFormat(e.to_string()))?;
        document.validate_records()?;
        Ok(document)
    }

    fn validate_records(&self) -> MoodfolioResult<()> {
        for entry in &self.mood_entries {
            entry.validate().map_err(|e| {
                MoodfolioError::InvalidFormat(format!("mood entry {}: {}", entry.date, e))
            })?;
        }
        for entry in &self.fortune_entries {
            entry.validate().map_err(|e| {
                MoodfolioError::InvalidFormat(format!("fortune entry {}: {}", entry.date, e))
            })?;
        }
        if let Some(quote) = self.favorite_quotes.iter().find(|q| q.text.trim().is_empty()) {
            return Err(MoodfolioError::InvalidFormat(format!(
                "favorite quote {} has no text",
                quote.id
            )));
        }
        Ok(())
    }
}

impl From<ExportDocument> for ImportDocument {
    fn from(export: ExportDocument) -> Self {
        Self {
            mood_entries: export.mood_entries,
            fortune_entries: export.fortune_entries,
            favorite_quotes: export.favorite_quotes,
            settings: export.settings.into(),
            export_date: Some(export.export_date),
        }
    }
}

/// Check the top-level shape of a document
pub fn validate_value(value: &Value) -> MoodfolioResult<()> {
    let object = value
        .as_object()
        .ok_or_else(|| MoodfolioError::InvalidFormat("document is not an object".into()))?;

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(MoodfolioError::InvalidFormat(format!(
            "missing {}",
            missing.join(", ")
        )));
    }
    Ok(())
}

/// Export the whole store as JSON
pub fn export_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> MoodfolioResult<()> {
    let document = ExportDocument::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &document)
    } else {
        serde_json::to_writer(writer, &document)
    }
    .map_err(|e| MoodfolioError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoodfolioPaths;
    use crate::models::{Mood, QuoteId, Theme};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_shape() {
        let (_temp_dir, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        storage.moods.upsert(MoodEntry::new(date, Mood::Happy, "walk")).unwrap();
        storage
            .favorites
            .add(FavoriteQuote::new(QuoteId::new("q-1"), "one"))
            .unwrap();

        let mut out = Vec::new();
        export_json(&storage, &mut out, false).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["moodEntries"][0]["date"], "2024-03-10");
        assert_eq!(value["moodEntries"][0]["mood"], "HAPPY");
        assert!(value["moodEntries"][0]["createdAt"].is_i64());
        assert_eq!(value["fortuneEntries"], serde_json::json!([]));
        assert_eq!(value["favoriteQuotes"][0]["id"], "q-1");
        assert_eq!(value["settings"]["theme"], "auto");
        assert!(value["exportDate"].is_string());
    }

    #[test]
    fn test_export_reads_back_as_import() {
        let (_temp_dir, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        storage.moods.upsert(MoodEntry::new(date, Mood::Calm, "")).unwrap();

        let mut out = Vec::new();
        export_json(&storage, &mut out, true).unwrap();
        let document = ImportDocument::from_json(std::str::from_utf8(&out).unwrap()).unwrap();

        assert_eq!(document.mood_entries.len(), 1);
        assert_eq!(document.settings.theme, Some(Theme::Auto));
        assert!(document.export_date.is_some());
    }

    #[test]
    fn test_missing_fortunes_defaults_to_empty() {
        let input = r#"{"moodEntries": [], "favoriteQuotes": [], "settings": {}}"#;
        let document = ImportDocument::from_json(input).unwrap();
        assert!(document.fortune_entries.is_empty());
        assert!(document.settings.is_empty());
    }

    #[test]
    fn test_missing_required_keys() {
        let err = ImportDocument::from_json(r#"{"moodEntries": []}"#).unwrap_err();
        assert!(err.is_invalid_format());
        let message = err.to_string();
        assert!(message.contains("favoriteQuotes"));
        assert!(message.contains("settings"));
    }

    #[test]
    fn test_malformed_records_rejected() {
        let bad_mood = r#"{"moodEntries": [{"date": "2024-03-10", "mood": "BORED"}],
            "favoriteQuotes": [], "settings": {}}"#;
        assert!(ImportDocument::from_json(bad_mood).unwrap_err().is_invalid_format());

        let bad_time = r#"{"moodEntries": [], "favoriteQuotes": [],
            "settings": {"notifications": {"enabled": true, "time": "25:00"}}}"#;
        assert!(ImportDocument::from_json(bad_time).unwrap_err().is_invalid_format());

        assert!(ImportDocument::from_json("[]").unwrap_err().is_invalid_format());
        assert!(ImportDocument::from_json("not json").unwrap_err().is_invalid_format());
    }
}
