//! Append-only audit logger

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{MoodfolioError, MoodfolioResult};

use super::entry::AuditEntry;

/// Writes audit entries to a JSONL file, one entry per line
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a logger that appends to `log_path`
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush
    pub fn log(&self, entry: &AuditEntry) -> MoodfolioResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append several entries with a single flush
    pub fn log_batch(&self, entries: &[AuditEntry]) -> MoodfolioResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| MoodfolioError::Io(format!("Failed to open audit log: {}", e)))?;

        for entry in entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                MoodfolioError::Json(format!("Failed to serialize audit entry: {}", e))
            })?;
            writeln!(file, "{}", json)
                .map_err(|e| MoodfolioError::Io(format!("Failed to write audit entry: {}", e)))?;
        }

        file.flush()
            .map_err(|e| MoodfolioError::Io(format!("Failed to flush audit log: {}", e)))
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> MoodfolioResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| MoodfolioError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                MoodfolioError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                MoodfolioError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries
    pub fn read_recent(&self, count: usize) -> MoodfolioResult<Vec<AuditEntry>> {
        let mut all = self.read_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all.split_off(start))
    }

    /// Whether the log file exists yet
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Path to the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_log_and_read_back() {
        let (logger, _temp) = create_test_logger();

        let entry = AuditEntry::create(
            EntityType::MoodEntry,
            "2024-03-10",
            Some("Happy".into()),
            &json!({"mood": "HAPPY"}),
        );
        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::MoodEntry);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        let entries: Vec<_> = (1..=9)
            .map(|day| {
                AuditEntry::create(
                    EntityType::MoodEntry,
                    format!("2024-03-0{}", day),
                    None,
                    &json!({"day": day}),
                )
            })
            .collect();
        logger.log_batch(&entries).unwrap();

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity_id, "2024-03-08");
        assert_eq!(recent[1].entity_id, "2024-03-09");
    }

    #[test]
    fn test_survives_reopen() {
        let (logger, temp) = create_test_logger();
        logger.log(&AuditEntry::bulk("clear", "cleared")).unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }
}
