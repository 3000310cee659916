//! JSON output shaping for entries.

use scanlog_core::entry::ScanEntry;
use scanlog_core::time::format_local;

/// JSON value for one entry: the wire fields plus a rendered local
/// `time` for consumers that do not want to convert epoch millis.
pub fn entry_json(entry: &ScanEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "timestamp": entry.timestamp,
        "time": format_local(entry.timestamp),
        "mode": entry.mode,
        "name": entry.name,
        "quantity": entry.quantity,
        "operator": entry.operator,
        "note": entry.note,
        "source": entry.source,
    })
}

pub fn entries_json(entries: &[&ScanEntry]) -> Vec<serde_json::Value> {
    entries.iter().map(|entry| entry_json(entry)).collect()
}
