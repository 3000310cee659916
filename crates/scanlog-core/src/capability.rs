//! Best-effort host feedback.
//!
//! The host environment may or may not support sound, haptics,
//! notifications, or a clipboard. The core only ever talks to this
//! trait; every operation is failure-free from the caller's view, each
//! capability is independent, and none of them blocks the logging flow.

use crate::entry::ScanEntry;
use crate::settings::Settings;
use crate::time::format_local;

/// Host feedback channels. Every method defaults to a no-op so hosts
/// implement only what they support.
pub trait HostCapabilities {
    fn play_sound(&self) {}
    fn vibrate(&self) {}
    fn notify(&self, _title: &str, _body: &str) {}
    fn copy_text(&self, _text: &str) {}
}

/// Host with no capabilities at all; used in tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapabilities;

impl HostCapabilities for NoopCapabilities {}

/// Feedback after an entry is recorded, gated per channel by settings.
pub fn entry_feedback(caps: &dyn HostCapabilities, settings: &Settings, entry: &ScanEntry) {
    if settings.enable_sound {
        caps.play_sound();
    }
    if settings.enable_vibration {
        caps.vibrate();
    }
    if settings.show_notifications {
        caps.notify(
            "Scan recorded",
            &format!("{} - {} ({})", entry.mode, entry.name, entry.quantity),
        );
    }
}

/// Tab-separated single-entry summary handed to the clipboard channel.
pub fn clipboard_summary(entry: &ScanEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        entry.mode,
        entry.name,
        entry.quantity,
        entry.operator.as_deref().unwrap_or(""),
        entry.note.as_deref().unwrap_or(""),
        format_local(entry.timestamp)
    )
}
