//! Importing a document into the store
//!
//! The document is fully validated before this runs. The new state of every
//! collection is built in memory first and only then swapped in and written,
//! so a bad document never leaves the store half imported.

use std::fmt;
use std::path::Path;

use crate::error::{MoodfolioError, MoodfolioResult};
use crate::export::json::ImportDocument;
use crate::export::yaml::import_from_yaml;
use crate::models::{DatedEntry, FavoriteQuote, Settings};
use crate::storage::entries::upsert_into;
use crate::storage::Storage;

/// How an import combines with existing data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Keep existing data; imported entries win on the same date
    #[default]
    Merge,
    /// Replace everything with the document's contents
    Overwrite,
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportMode::Merge => write!(f, "merge"),
            ImportMode::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// What an import changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub moods_added: usize,
    pub moods_replaced: usize,
    pub fortunes_added: usize,
    pub fortunes_replaced: usize,
    pub favorites_added: usize,
    /// Favorites whose id was already present
    pub favorites_skipped: usize,
    pub settings_changed: bool,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "moods +{} ~{}, fortunes +{} ~{}, favorites +{} (skipped {}), settings {}",
            self.moods_added,
            self.moods_replaced,
            self.fortunes_added,
            self.fortunes_replaced,
            self.favorites_added,
            self.favorites_skipped,
            if self.settings_changed { "changed" } else { "unchanged" }
        )
    }
}

/// Read an import document from a `.json`, `.yaml`, or `.yml` file
pub fn read_document(path: &Path) -> MoodfolioResult<ImportDocument> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        MoodfolioError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => import_from_yaml(&contents),
        _ => ImportDocument::from_json(&contents),
    }
}

/// Fold `incoming` into `staged`, counting `(added, replaced)`
fn stage_entries<E: DatedEntry>(staged: &mut Vec<E>, incoming: Vec<E>) -> (usize, usize) {
    let mut added = 0;
    let mut replaced = 0;
    for entry in incoming {
        match upsert_into(staged, entry) {
            Some(_) => replaced += 1,
            None => added += 1,
        }
    }
    (added, replaced)
}

/// Add favorites whose id is not staged yet, counting `(added, skipped)`
fn stage_favorites(staged: &mut Vec<FavoriteQuote>, incoming: Vec<FavoriteQuote>) -> (usize, usize) {
    let mut added = 0;
    let mut skipped = 0;
    for quote in incoming {
        if staged.iter().any(|q| q.id == quote.id) {
            skipped += 1;
        } else {
            staged.push(quote);
            added += 1;
        }
    }
    (added, skipped)
}

/// Import a validated document
pub fn import_document(
    storage: &Storage,
    document: ImportDocument,
    mode: ImportMode,
) -> MoodfolioResult<ImportSummary> {
    let current_settings = storage.settings.get()?;

    let (mut moods, mut fortunes, mut favorites, settings) = match mode {
        ImportMode::Merge => (
            storage.moods.get_all()?,
            storage.fortunes.get_all()?,
            storage.favorites.get_all()?,
            current_settings.merged(&document.settings),
        ),
        ImportMode::Overwrite => (
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Settings::default().merged(&document.settings),
        ),
    };

    let (moods_added, moods_replaced) = stage_entries(&mut moods, document.mood_entries);
    let (fortunes_added, fortunes_replaced) =
        stage_entries(&mut fortunes, document.fortune_entries);
    let (favorites_added, favorites_skipped) =
        stage_favorites(&mut favorites, document.favorite_quotes);

    let summary = ImportSummary {
        moods_added,
        moods_replaced,
        fortunes_added,
        fortunes_replaced,
        favorites_added,
        favorites_skipped,
        settings_changed: settings != current_settings,
    };

    storage.moods.replace_all(moods)?;
    storage.fortunes.replace_all(fortunes)?;
    storage.favorites.replace_all(favorites)?;
    storage.settings.replace(settings)?;
    storage.save_all()?;

    storage.log_bulk(format!("import ({})", mode), summary.to_string())?;
    log::info!("Imported document in {} mode: {}", mode, summary);

    Ok(summary)
}
