//! YAML export
//!
//! Same document as the JSON export, for reading by eye. YAML files can also
//! be imported.

use std::io::Write;

use serde_json::Value;

use crate::error::{MoodfolioError, MoodfolioResult};
use crate::export::json::{ExportDocument, ImportDocument};
use crate::storage::Storage;

/// Export the whole store as YAML
pub fn export_yaml<W: Write>(storage: &Storage, writer: &mut W) -> MoodfolioResult<()> {
    let document = ExportDocument::from_storage(storage)?;

    writeln!(writer, "# Moodfolio journal export")?;
    writeln!(writer, "# Generated: {}", document.export_date.to_rfc3339())?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &document)?;
    Ok(())
}

/// Parse a YAML document into an import document
pub fn import_from_yaml(input: &str) -> MoodfolioResult<ImportDocument> {
    let value: Value = serde_yaml::from_str(input)
        .map_err(|e| MoodfolioError::InvalidFormat(format!("not valid YAML: {}", e)))?;
    ImportDocument::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoodfolioPaths;
    use crate::models::{Mood, MoodEntry};
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
    fn test_yaml_export_readable() {
        let (_temp_dir, storage) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        storage
            .moods
            .upsert(MoodEntry::new(date, Mood::Smile, "family dinner"))
            .unwrap();

        let mut out = Vec::new();
        export_yaml(&storage, &mut out).unwrap();
        let yaml = String::from_utf8(out).unwrap();

        assert!(yaml.starts_with("# Moodfolio journal export"));
        assert!(yaml.contains("moodEntries:"));
        assert!(yaml.contains("SMILE"));
        assert!(yaml.contains("family dinner"));

        let document = import_from_yaml(&yaml).unwrap();
        assert_eq!(document.mood_entries.len(), 1);
        assert_eq!(document.mood_entries[0].note, "family dinner");
    }

    #[test]
    fn test_yaml_missing_keys() {
        let err = import_from_yaml("moodEntries: []\n").unwrap_err();
        assert!(err.is_invalid_format());
    }
}
