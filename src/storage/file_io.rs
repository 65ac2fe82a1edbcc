//! File I/O utilities with atomic writes
//!
//! Every collection file is rewritten whole. Writes go to a sibling temp file
//! that is synced and renamed over the target, so a crash leaves either the
//! old or the new contents.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::MoodfolioError;

fn fault(action: &str, path: &Path, err: impl std::fmt::Display) -> MoodfolioError {
    MoodfolioError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read JSON from a file, returning `T::default()` if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, MoodfolioError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| fault("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| fault("parse", path, e))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MoodfolioError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| fault("create directory", parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| fault("create", &temp_path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| fault("serialize", path, e))?;
    writer.flush().map_err(|e| fault("flush", &temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| fault("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        fault("replace", path, e)
    })
}

/// Delete a file, treating "already gone" as success
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> Result<(), MoodfolioError> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(fault("remove", path, e)),
    }
}

/// Size of a file in bytes, 0 if it doesn't exist
pub fn file_size<P: AsRef<Path>>(path: P) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
