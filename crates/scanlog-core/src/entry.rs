//! Scan entry records and the entry factory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScanlogError;
use crate::time;

/// Movement direction of a recorded entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::In => "IN",
            Mode::Out => "OUT",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ScanlogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(Mode::In),
            "out" => Ok(Mode::Out),
            other => Err(ScanlogError::InvalidInput(format!(
                "Unknown mode: {} (use in or out)",
                other
            ))),
        }
    }
}

/// Provenance of an entry: camera capture or manual form entry.
/// Informational only; no behavior depends on it after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Scanned,
    Manual,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Scanned => "scanned",
            Source::Manual => "manual",
        }
    }
}

/// One recorded movement event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanEntry {
    /// Unique string id, `<millis>-<random suffix>`; sole delete key.
    pub id: String,

    /// Creation instant, integer milliseconds since the epoch.
    pub timestamp: i64,

    /// Direction of movement.
    pub mode: Mode,

    /// Item name; never empty in a stored entry.
    pub name: String,

    /// Number of items moved; always >= 1.
    pub quantity: u32,

    /// Operator handling the movement, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    /// Free-text note, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Provenance tag.
    pub source: Source,
}

/// Raw captured or typed input for a new entry.
///
/// The factory owns all input coercion: quantity parsing and clamping,
/// whitespace trimming, and the empty-name rejection rule.
#[derive(Debug, Clone)]
pub struct EntryInput {
    pub mode: Mode,
    pub name: String,
    pub quantity: Option<String>,
    pub operator: Option<String>,
    pub note: Option<String>,
    pub source: Source,
}

impl EntryInput {
    pub fn new(mode: Mode, name: impl Into<String>, source: Source) -> Self {
        Self {
            mode,
            name: name.into(),
            quantity: None,
            operator: None,
            note: None,
            source,
        }
    }

    pub fn with_quantity(mut self, quantity: Option<String>) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_operator(mut self, operator: Option<String>) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Build a [`ScanEntry`] stamped with the current time.
    ///
    /// Returns `None` when the name trims to empty - no entry is
    /// created, and the store never sees it.
    pub fn build(self) -> Option<ScanEntry> {
        let now = time::now_ms();
        self.build_at(now)
    }

    /// Build with an explicit timestamp. Deterministic except for the
    /// id suffix; used by tests and replay paths.
    pub fn build_at(self, timestamp: i64) -> Option<ScanEntry> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(ScanEntry {
            id: new_entry_id(timestamp),
            timestamp,
            mode: self.mode,
            name: name.to_string(),
            quantity: clamp_quantity(self.quantity.as_deref()),
            operator: normalize_optional(self.operator),
            note: normalize_optional(self.note),
            source: self.source,
        })
    }
}

/// `<millis>-<6 hex chars>`, suffix drawn from a v4 UUID. Uniqueness is
/// probabilistic; acceptable at single-device, human-paced volumes.
fn new_entry_id(timestamp: i64) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}-{}", timestamp, &hex[..6])
}

/// Parse a raw quantity; parse failures and values below 1 become 1.
fn clamp_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value >= 1)
        .unwrap_or(1)
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> EntryInput {
        EntryInput::new(Mode::In, name, Source::Manual)
    }

    #[test]
    fn empty_name_creates_no_entry() {
        assert!(input("").build_at(1).is_none());
        assert!(input("   ").build_at(1).is_none());
    }

    #[test]
    fn name_is_trimmed() {
        let entry = input("  Pen  ").build_at(1).unwrap();
        assert_eq!(entry.name, "Pen");
    }

    #[test]
    fn quantity_coercion() {
        for raw in ["0", "-5", "", "abc"] {
            let entry = input("Pen")
                .with_quantity(Some(raw.to_string()))
                .build_at(1)
                .unwrap();
            assert_eq!(entry.quantity, 1, "raw input {:?}", raw);
        }
        let entry = input("Pen")
            .with_quantity(Some("7".to_string()))
            .build_at(1)
            .unwrap();
        assert_eq!(entry.quantity, 7);

        let entry = input("Pen").build_at(1).unwrap();
        assert_eq!(entry.quantity, 1);
    }

    #[test]
    fn optional_fields_drop_when_blank() {
        let entry = input("Pen")
            .with_operator(Some("  ".to_string()))
            .with_note(Some(" blue ".to_string()))
            .build_at(1)
            .unwrap();
        assert_eq!(entry.operator, None);
        assert_eq!(entry.note, Some("blue".to_string()));
    }

    #[test]
    fn id_carries_timestamp_prefix() {
        let entry = input("Pen").build_at(1234).unwrap();
        assert!(entry.id.starts_with("1234-"));
        assert_eq!(entry.id.len(), "1234-".len() + 6);
    }

    #[test]
    fn ids_differ_within_one_millisecond() {
        let a = input("Pen").build_at(99).unwrap();
        let b = input("Pen").build_at(99).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("IN".parse::<Mode>().unwrap(), Mode::In);
        assert_eq!("out".parse::<Mode>().unwrap(), Mode::Out);
        assert!("sideways".parse::<Mode>().is_err());
    }

    #[test]
    fn wire_format_is_stable() {
        let entry = input("Pen")
            .with_note(Some("blue".to_string()))
            .build_at(5)
            .unwrap();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["mode"], "IN");
        assert_eq!(value["source"], "manual");
        assert_eq!(value["timestamp"], 5);
        assert!(value.get("operator").is_none());
    }
}
