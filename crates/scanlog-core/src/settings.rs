//! Operator settings, persisted separately from entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanlogError};
use crate::storage::{KeyValueStore, SETTINGS_KEY};

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme; used by toggle-style hosts.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ScanlogError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ScanlogError::InvalidInput(format!(
                "Unknown theme: {} (use light or dark)",
                other
            ))),
        }
    }
}

/// Process-wide operator settings.
///
/// Per-field serde defaults give merge-on-load semantics: a stored
/// document carrying only some keys fills the rest from defaults, and
/// unknown keys are ignored. Wire names are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_true")]
    pub enable_sound: bool,
    #[serde(default)]
    pub enable_vibration: bool,
    #[serde(default)]
    pub auto_focus: bool,
    #[serde(default)]
    pub show_notifications: bool,
    #[serde(default)]
    pub theme: Theme,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_sound: true,
            enable_vibration: false,
            auto_focus: false,
            show_notifications: false,
            theme: Theme::Light,
        }
    }
}

impl Settings {
    /// Load from the adapter. A missing document, or one that does not
    /// deserialize, falls back to defaults; partial documents merge.
    pub fn load<S: KeyValueStore>(storage: &S) -> Settings {
        storage
            .read(SETTINGS_KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Persist immediately; settings mutations are never batched.
    pub fn save<S: KeyValueStore>(&self, storage: &mut S) -> Result<()> {
        let value = serde_json::to_value(self)?;
        storage.write(SETTINGS_KEY, &value)
    }
}
