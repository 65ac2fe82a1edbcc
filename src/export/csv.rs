//! CSV export
//!
//! Mood entries only, one row per date, for spreadsheets.

use std::io::Write;

use crate::error::MoodfolioResult;
use crate::storage::Storage;

/// Export mood entries sorted by date
pub fn export_moods_csv<W: Write>(storage: &Storage, writer: W) -> MoodfolioResult<()> {
    let mut entries = storage.moods.get_all()?;
    entries.sort_by_key(|e| e.date);

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Date", "Mood", "Note", "Created At"])?;
    for entry in &entries {
        csv.write_record([
            entry.date.to_string(),
            entry.mood.to_string(),
            entry.note.clone(),
            entry.created_at.to_rfc3339(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
