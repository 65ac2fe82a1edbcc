//! Configuration module for Moodfolio
//!
//! - XDG-compliant path resolution
//! - Tool configuration persistence (backups, audit, quota)

pub mod app;
pub mod paths;

pub use app::{AppConfig, BackupRetention};
pub use paths::MoodfolioPaths;
