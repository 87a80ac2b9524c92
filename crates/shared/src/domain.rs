use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(UserId);
id_newtype!(HistoryItemId);

/// Display name used whenever the host does not hand us a user.
pub const GUEST_DISPLAY_NAME: &str = "Гость";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Home,
    Setup,
    History,
    Info,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Setup, Screen::History, Screen::Info];

    /// Screens reachable from the bottom tab bar, in display order.
    pub const TAB_BAR: [Screen; 3] = [Screen::Home, Screen::History, Screen::Info];

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Setup => "setup",
            Screen::History => "history",
            Screen::Info => "info",
        }
    }

    pub fn shows_back_button(self) -> bool {
        self != Screen::Home
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Screen::Home),
            "setup" => Ok(Screen::Setup),
            "history" => Ok(Screen::History),
            "info" => Ok(Screen::Info),
            _ => Err(ParseError::UnknownScreen(value.to_string())),
        }
    }
}

/// Impact intensity understood by the host haptic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticStyle {
    Light,
    Medium,
    Heavy,
}

impl HapticStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            HapticStyle::Light => "light",
            HapticStyle::Medium => "medium",
            HapticStyle::Heavy => "heavy",
        }
    }
}

impl fmt::Display for HapticStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HapticStyle {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(HapticStyle::Light),
            "medium" => Ok(HapticStyle::Medium),
            "heavy" => Ok(HapticStyle::Heavy),
            _ => Err(ParseError::UnknownHapticStyle(value.to_string())),
        }
    }
}

/// User snapshot as the host exposes it in its init data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Identity {
    pub fn guest() -> Self {
        Self {
            display_name: GUEST_DISPLAY_NAME.to_string(),
            user_id: None,
            username: None,
        }
    }

    pub fn is_guest(&self) -> bool {
        self.user_id.is_none()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::guest()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: HistoryItemId,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// Externally hosted instruction video. Both halves are opaque to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoRef {
    pub video_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaskModel {
    pub name: &'static str,
    pub video: VideoRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
