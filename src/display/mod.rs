//! Display formatting for terminal output
//!
//! Turns models and aggregates into plain text tables, cards, and a month
//! calendar. Nothing here touches storage.

pub mod fortune;
pub mod journal;
pub mod mood;
pub mod quote;

pub use fortune::{format_fortune, format_fortune_stats};
pub use journal::{format_backup_list, format_settings, format_storage_stats};
pub use mood::{format_month_calendar, format_mood_details, format_mood_list, format_monthly_stats};
pub use quote::{format_catalog_quote, format_favorite_list, format_favorite_stats};
