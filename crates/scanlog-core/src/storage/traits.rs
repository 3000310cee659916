//! Persistence adapter trait definition.

use serde_json::Value;

use crate::error::Result;

/// Durable mapping from string key to JSON document.
///
/// Implementations must ensure:
/// - `read` never fails: a missing or unparseable document is `None`
/// - `write` replaces the whole document for a key
/// - documents under different keys are independent
pub trait KeyValueStore {
    /// Read the document stored under `key`.
    ///
    /// Missing keys and documents that fail to parse as JSON are both
    /// reported as `None`; the caller supplies defaults.
    fn read(&self, key: &str) -> Option<Value>;

    /// Replace the document stored under `key`.
    fn write(&mut self, key: &str, value: &Value) -> Result<()>;
}
