//! Duplicate-scan suppression for the capture stream.

/// Window within which an identical decoded text counts as the same
/// physical read. Fixed; not operator-configurable.
pub const DEBOUNCE_WINDOW_MS: i64 = 1500;

/// Two-field debounce state for camera-captured input.
///
/// A continuous capture feed re-decodes a code held in frame several
/// times per second; an identical text arriving inside the window is
/// dropped silently. This is a heuristic, not a correctness guarantee:
/// two genuinely repeated scans inside the window are indistinguishable
/// from one held-steady read and are dropped too.
#[derive(Debug, Default)]
pub struct ScanDebounce {
    last_text: String,
    last_at_ms: i64,
}

impl ScanDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a decoded text at `now_ms`. Returns `false` for a
    /// duplicate inside the window; otherwise records the pair and
    /// returns `true` so processing proceeds.
    pub fn accept(&mut self, text: &str, now_ms: i64) -> bool {
        if text == self.last_text && now_ms - self.last_at_ms < DEBOUNCE_WINDOW_MS {
            return false;
        }
        self.last_text = text.to_string();
        self.last_at_ms = now_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_inside_window_is_dropped() {
        let mut debounce = ScanDebounce::new();
        assert!(debounce.accept("ABC123", 1_000));
        assert!(!debounce.accept("ABC123", 1_900));
    }

    #[test]
    fn duplicate_after_window_is_accepted() {
        let mut debounce = ScanDebounce::new();
        assert!(debounce.accept("ABC123", 1_000));
        assert!(debounce.accept("ABC123", 2_600));
    }

    #[test]
    fn different_text_inside_window_is_accepted() {
        let mut debounce = ScanDebounce::new();
        assert!(debounce.accept("ABC123", 1_000));
        assert!(debounce.accept("XYZ789", 1_100));
    }

    #[test]
    fn accepted_text_resets_the_window() {
        let mut debounce = ScanDebounce::new();
        assert!(debounce.accept("ABC123", 1_000));
        assert!(debounce.accept("XYZ789", 1_100));
        // ABC123 again: last accepted pair is now XYZ789, so it passes
        assert!(debounce.accept("ABC123", 1_200));
    }
}
