//! Journal settings record
//!
//! A single record holding the theme and the reminder preferences. Partial
//! updates go through [`SettingsPatch`], which replaces top-level fields
//! only: changing one notification field means supplying the whole
//! `notifications` sub-record.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Auto => write!(f, "auto"),
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Theme::Auto),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected auto, light, dark)", other)),
        }
    }
}

/// Reminder time of day, persisted as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTime(NaiveTime);

impl ReminderTime {
    const FORMAT: &'static str = "%H:%M";

    /// Build from hour and minute
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// The underlying time
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(20, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for ReminderTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // NaiveTime accepts "9:05"; require the zero-padded form
        if s.len() != 5 {
            return Err(format!("invalid time '{}' (expected HH:MM)", s));
        }
        NaiveTime::parse_from_str(s, Self::FORMAT)
            .map(Self)
            .map_err(|_| format!("invalid time '{}' (expected HH:MM)", s))
    }
}

impl Serialize for ReminderTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Daily reminder preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub time: ReminderTime,
}

/// The journal settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Settings {
    /// Apply a shallow patch, returning the merged record
    pub fn merged(mut self, patch: &SettingsPatch) -> Self {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        self
    }
}

/// A partial settings update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationSettings>,
}

impl SettingsPatch {
    /// Patch that changes only the theme
    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            notifications: None,
        }
    }

    /// Patch that replaces the notifications sub-record
    pub fn notifications(notifications: NotificationSettings) -> Self {
        Self {
            theme: None,
            notifications: Some(notifications),
        }
    }

    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.notifications.is_none()
    }
}

impl From<Settings> for SettingsPatch {
    fn from(settings: Settings) -> Self {
        Self {
            theme: Some(settings.theme),
            notifications: Some(settings.notifications),
        }
    }
}
