//! Moodfolio - local journal for moods, fortunes, and favorite quotes
//!
//! This library provides the persistence and domain logic behind the
//! `moodfolio` command: one mood entry per day, a weighted daily fortune,
//! a catalog of quotes with favorites, and a small settings record. All of
//! it lives in JSON files under a single data directory and can be exported,
//! imported (merge or overwrite), and backed up.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Journal records (mood entries, fortunes, quotes, settings)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (recording, drawing, statistics)
//! - `export`: JSON/YAML/CSV export and document import
//! - `audit`: Audit logging system
//! - `backup`: Backup archives with retention
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use moodfolio::config::{AppConfig, MoodfolioPaths};
//! use moodfolio::storage::Storage;
//!
//! let paths = MoodfolioPaths::new()?;
//! let config = AppConfig::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MoodfolioError, MoodfolioResult};
