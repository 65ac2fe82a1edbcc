//! Core data models for Moodfolio
//!
//! The four persisted collections: mood entries, fortune entries, favorite
//! quotes, and the settings record.

pub mod entry;
pub mod fortune;
pub mod ids;
pub mod mood;
pub mod quote;
pub mod settings;

pub use entry::DatedEntry;
pub use fortune::{Fortune, FortuneEntry, FortuneLevel, LuckyColor, LuckyItem, Outlook};
pub use ids::QuoteId;
pub use mood::{Mood, MoodEntry};
pub use quote::FavoriteQuote;
pub use settings::{NotificationSettings, ReminderTime, Settings, SettingsPatch, Theme};
