//! Service layer for Moodfolio
//!
//! The service layer sits on top of the storage layer: it validates input,
//! persists every change, and writes the audit trail. Aggregates in
//! [`stats`] only read.

pub mod data;
pub mod fortune;
pub mod mood;
pub mod quote;
pub mod settings;
pub mod stats;

pub use data::{DataService, StorageStats};
pub use fortune::{weighted_index, FortuneCatalog, FortuneService, LevelSpec};
pub use mood::MoodService;
pub use quote::{FavoriteService, FavoriteStats};
pub use settings::SettingsService;
pub use stats::{FortuneStats, FortuneTrend, MonthlyStats, StatsService};
