//! Import and export for Moodfolio
//!
//! - JSON: the full store snapshot, also the import format
//! - YAML: the same snapshot, human-readable (importable too)
//! - CSV: mood entries for spreadsheets

pub mod csv;
pub mod import;
pub mod json;
pub mod yaml;

pub use self::csv::export_moods_csv;
pub use import::{import_document, read_document, ImportMode, ImportSummary};
pub use json::{export_json, validate_value, ExportDocument, ImportDocument};
pub use yaml::{export_yaml, import_from_yaml};
