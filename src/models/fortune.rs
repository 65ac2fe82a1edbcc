//! Fortune models
//!
//! A fortune is a ranked level plus a set of "lucky" attributes. The drawn
//! result is persisted once per date as a [`FortuneEntry`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::DatedEntry;

/// The six ranked fortune tiers, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FortuneLevel {
    #[serde(rename = "大吉")]
    GreatBlessing,
    #[serde(rename = "吉")]
    Blessing,
    #[serde(rename = "小吉")]
    SmallBlessing,
    #[serde(rename = "平")]
    Neutral,
    #[serde(rename = "兇")]
    Misfortune,
    #[serde(rename = "大凶")]
    GreatMisfortune,
}

impl FortuneLevel {
    /// All levels in rank order
    pub fn all() -> &'static [FortuneLevel] {
        &[
            FortuneLevel::GreatBlessing,
            FortuneLevel::Blessing,
            FortuneLevel::SmallBlessing,
            FortuneLevel::Neutral,
            FortuneLevel::Misfortune,
            FortuneLevel::GreatMisfortune,
        ]
    }

    /// The traditional label, as persisted
    pub fn label(&self) -> &'static str {
        match self {
            FortuneLevel::GreatBlessing => "大吉",
            FortuneLevel::Blessing => "吉",
            FortuneLevel::SmallBlessing => "小吉",
            FortuneLevel::Neutral => "平",
            FortuneLevel::Misfortune => "兇",
            FortuneLevel::GreatMisfortune => "大凶",
        }
    }

    /// English gloss for the label
    pub fn english(&self) -> &'static str {
        match self {
            FortuneLevel::GreatBlessing => "Great blessing",
            FortuneLevel::Blessing => "Blessing",
            FortuneLevel::SmallBlessing => "Small blessing",
            FortuneLevel::Neutral => "Neutral",
            FortuneLevel::Misfortune => "Misfortune",
            FortuneLevel::GreatMisfortune => "Great misfortune",
        }
    }

    /// Coarse grouping used by the fortune trend
    pub fn outlook(&self) -> Outlook {
        match self {
            FortuneLevel::GreatBlessing | FortuneLevel::Blessing | FortuneLevel::SmallBlessing => {
                Outlook::Good
            }
            FortuneLevel::Neutral => Outlook::Neutral,
            FortuneLevel::Misfortune | FortuneLevel::GreatMisfortune => Outlook::Bad,
        }
    }
}

impl fmt::Display for FortuneLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.english())
    }
}

/// Good / neutral / bad grouping of fortune levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Good,
    Neutral,
    Bad,
}

/// A named color with its hex code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyColor {
    pub name: String,
    pub hex: String,
}

/// A lucky item together with a short suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyItem {
    pub item: String,
    pub suggestion: String,
}

/// The outcome of one draw, before it is pinned to a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fortune {
    pub level: FortuneLevel,
    /// Display color of the level
    pub color: String,
    pub interpretation: String,
    pub lucky_color: LuckyColor,
    pub lucky_number: u8,
    pub lucky_item: LuckyItem,
    pub lucky_direction: String,
    pub drawn_at: DateTime<Utc>,
}

impl Fortune {
    /// Whether two draws produced the same visible result.
    ///
    /// Compares level, interpretation, color name, number, item, and
    /// direction. The level color, color hex, item suggestion, and draw time
    /// are ignored.
    pub fn same_outcome(&self, other: &Fortune) -> bool {
        self.level == other.level
            && self.interpretation == other.interpretation
            && self.lucky_color.name == other.lucky_color.name
            && self.lucky_number == other.lucky_number
            && self.lucky_item.item == other.lucky_item.item
            && self.lucky_direction == other.lucky_direction
    }

    /// Pin this draw to a date
    pub fn into_entry(self, date: NaiveDate) -> FortuneEntry {
        FortuneEntry {
            date,
            level: self.level,
            color: self.color,
            interpretation: self.interpretation,
            lucky_color: self.lucky_color,
            lucky_number: self.lucky_number,
            lucky_item: self.lucky_item,
            lucky_direction: self.lucky_direction,
            drawn_at: self.drawn_at,
        }
    }
}

/// A fortune persisted for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneEntry {
    pub date: NaiveDate,
    pub level: FortuneLevel,
    pub color: String,
    pub interpretation: String,
    pub lucky_color: LuckyColor,
    pub lucky_number: u8,
    pub lucky_item: LuckyItem,
    pub lucky_direction: String,
    pub drawn_at: DateTime<Utc>,
}

impl FortuneEntry {
    /// The draw this entry was created from
    pub fn to_fortune(&self) -> Fortune {
        Fortune {
            level: self.level,
            color: self.color.clone(),
            interpretation: self.interpretation.clone(),
            lucky_color: self.lucky_color.clone(),
            lucky_number: self.lucky_number,
            lucky_item: self.lucky_item.clone(),
            lucky_direction: self.lucky_direction.clone(),
            drawn_at: self.drawn_at,
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), String> {
        if !(LUCKY_NUMBER_MIN..=LUCKY_NUMBER_MAX).contains(&self.lucky_number) {
            return Err(format!(
                "Lucky number {} outside {}..={}",
                self.lucky_number, LUCKY_NUMBER_MIN, LUCKY_NUMBER_MAX
            ));
        }
        Ok(())
    }
}

impl DatedEntry for FortuneEntry {
    const KIND: &'static str = "fortune entry";

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Smallest lucky number
pub const LUCKY_NUMBER_MIN: u8 = 1;
/// Largest lucky number
pub const LUCKY_NUMBER_MAX: u8 = 99;
