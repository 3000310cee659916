//! Parsing helpers for modes, booleans, and output format.

use scanlog_core::entry::Mode;

/// Parse a movement direction (`in` or `out`, any case).
pub fn parse_mode(value: &str) -> anyhow::Result<Mode> {
    Ok(value.parse::<Mode>()?)
}

/// Validate a `--format` value.
pub fn check_format(value: Option<&str>) -> anyhow::Result<Option<&str>> {
    match value {
        None | Some("table") | Some("plain") => Ok(value),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

/// Parse a boolean setting value.
pub fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        other => Err(anyhow::anyhow!(
            "Invalid boolean: {} (use true or false)",
            other
        )),
    }
}
