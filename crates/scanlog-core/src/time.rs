//! Timestamp helpers: epoch milliseconds and local display formatting.

use chrono::{Local, TimeZone, Utc};

/// Current instant as integer milliseconds since the epoch.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a millisecond timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
pub fn format_local(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .earliest()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "invalid timestamp".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_shape() {
        let rendered = format_local(1_700_000_000_000);
        assert_eq!(rendered.len(), 19);
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[7..8], "-");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[13..14], ":");
        assert_eq!(&rendered[16..17], ":");
    }

    #[test]
    fn now_is_positive() {
        assert!(now_ms() > 0);
    }
}
