//! Storage initialization
//!
//! Handles first-run setup: creates the directories and writes empty
//! collection files plus a default settings record.

use crate::config::paths::MoodfolioPaths;
use crate::error::MoodfolioError;
use crate::models::{FavoriteQuote, FortuneEntry, MoodEntry, Settings};

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation.
///
/// Existing files are left untouched, so running this twice is harmless.
pub fn initialize_storage(paths: &MoodfolioPaths) -> Result<(), MoodfolioError> {
    paths.ensure_directories()?;

    if !paths.moods_file().exists() {
        write_json_atomic(paths.moods_file(), &Vec::<MoodEntry>::new())?;
    }
    if !paths.fortunes_file().exists() {
        write_json_atomic(paths.fortunes_file(), &Vec::<FortuneEntry>::new())?;
    }
    if !paths.favorites_file().exists() {
        write_json_atomic(paths.favorites_file(), &Vec::<FavoriteQuote>::new())?;
    }
    if !paths.settings_file().exists() {
        write_json_atomic(paths.settings_file(), &Settings::default())?;
    }

    log::info!("Initialized journal storage at {}", paths.data_dir().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::read_json;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        for file in paths.collection_files() {
            assert!(file.exists(), "{} missing", file.display());
        }
        let settings: Settings = read_json(paths.settings_file()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoodfolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.moods_file(),
            r#"[{"date":"2024-03-10","mood":"HAPPY","note":"","createdAt":0}]"#,
        )
        .unwrap();

        initialize_storage(&paths).unwrap();

        let moods: Vec<MoodEntry> = read_json(paths.moods_file()).unwrap();
        assert_eq!(moods.len(), 1);
    }
}
