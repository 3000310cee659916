//! # Scanlog Core
//!
//! Core library for scanlog - a local inventory scan logbook.
//!
//! This crate provides the data model, persistence, filtering, and
//! export logic independent of the CLI interface. All state lives in
//! per-key JSON documents in a local data directory; there is no
//! server, no network protocol, and no background work.
//!
//! ## Architecture
//!
//! - **storage**: key/value persistence adapter (JSON documents on disk)
//! - **store**: the ordered scan log backed by the adapter
//! - **entry**: scan entry records and the entry factory
//! - **filter**: free-text and mode views over the log
//! - **debounce**: duplicate suppression for the capture stream
//! - **export**: CSV export
//! - **settings**: persisted operator settings
//! - **capability**: best-effort host feedback interface

pub mod capability;
pub mod debounce;
pub mod entry;
pub mod error;
pub mod export;
pub mod filter;
pub mod settings;
pub mod storage;
pub mod store;
pub mod time;

pub use entry::{EntryInput, Mode, ScanEntry, Source};
pub use error::{Result, ScanlogError};
pub use settings::Settings;
pub use store::LogStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
