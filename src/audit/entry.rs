//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// Bulk change: import, restore, cleanup, or clear
    Bulk,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Bulk => write!(f, "BULK"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    MoodEntry,
    FortuneEntry,
    FavoriteQuote,
    Settings,
    /// The store as a whole
    Journal,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::MoodEntry => write!(f, "MoodEntry"),
            EntityType::FortuneEntry => write!(f, "FortuneEntry"),
            EntityType::FavoriteQuote => write!(f, "FavoriteQuote"),
            EntityType::Settings => write!(f, "Settings"),
            EntityType::Journal => write!(f, "Journal"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Date or quote id of the affected record
    pub entity_id: String,

    /// Short human-readable label (mood name, fortune level, quote text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a newly created record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Create, entity_type, entity_id.into(), entity_name);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// Entry for a replaced record; the diff is computed from the snapshots
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Update, entity_type, entity_id.into(), entity_name);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        if let (Some(b), Some(a)) = (&entry.before, &entry.after) {
            entry.diff_summary = generate_diff(b, a);
        }
        entry
    }

    /// Entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Delete, entity_type, entity_id.into(), entity_name);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    /// Entry for a bulk change described by `summary`
    pub fn bulk(entity_id: impl Into<String>, summary: impl Into<String>) -> Self {
        let mut entry = Self::new(Operation::Bulk, EntityType::Journal, entity_id.into(), None);
        entry.diff_summary = Some(summary.into());
        entry
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

/// Describe field changes between two JSON snapshots.
///
/// Nested objects are walked and reported with dotted paths
/// (`notifications.time: "20:00" -> "08:00"`). Returns `None` when nothing
/// changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes(before, after, "", &mut changes);
    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, prefix: &str, changes: &mut Vec<String>) {
    let path = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match (before, after) {
        (Value::Object(b), Value::Object(a)) => {
            for (key, before_val) in b {
                match a.get(key) {
                    Some(after_val) => collect_changes(before_val, after_val, &path(key), changes),
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        path(key),
                        format_value(before_val)
                    )),
                }
            }
            for (key, after_val) in a {
                if !b.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", path(key), format_value(after_val)));
                }
            }
        }
        _ if before != after => changes.push(format!(
            "{}: {} -> {}",
            if prefix.is_empty() { "value" } else { prefix },
            format_value(before),
            format_value(after)
        )),
        _ => {}
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}
