//! Audit trail for Moodfolio
//!
//! Every create, update, and delete on a journal collection is appended to
//! `audit.log` as one JSON object per line, with before/after snapshots and
//! a short diff for updates.
//!
//! ```rust,ignore
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(EntityType::MoodEntry, "2024-03-10", None, &entry);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{generate_diff, AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
