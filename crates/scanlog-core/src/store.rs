//! The scan log: an ordered, newest-first sequence backed by storage.

use crate::entry::ScanEntry;
use crate::error::Result;
use crate::storage::{KeyValueStore, ENTRIES_KEY};

/// Ordered sequence of scan entries, newest first, owning its backend.
///
/// The store exclusively owns the in-memory sequence; the adapter holds
/// no copy. Every mutation re-serializes the full sequence - no
/// incremental writes, no coalescing. Volumes are small and human-paced,
/// so the full rewrite is the simple correct choice; it would not hold
/// up under high-frequency writers.
pub struct LogStore<S: KeyValueStore> {
    entries: Vec<ScanEntry>,
    storage: S,
}

impl<S: KeyValueStore> LogStore<S> {
    /// Open the log, reading the persisted sequence.
    ///
    /// A missing document, or one that is not an array of entries,
    /// resets the log to empty; malformed data never surfaces as an
    /// error to the caller.
    pub fn load(storage: S) -> Self {
        let entries = storage
            .read(ENTRIES_KEY)
            .and_then(|value| serde_json::from_value::<Vec<ScanEntry>>(value).ok())
            .unwrap_or_default();
        Self { entries, storage }
    }

    /// Insert at the head and persist.
    pub fn append(&mut self, entry: ScanEntry) -> Result<()> {
        self.entries.insert(0, entry);
        self.persist()
    }

    /// Remove the first entry with the given id and persist. An absent
    /// id is a no-op, not an error; the return value reports whether
    /// anything was removed.
    pub fn delete_by_id(&mut self, id: &str) -> Result<bool> {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Empty the sequence and persist.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    /// Current size.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The full sequence, newest first.
    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    /// Look up a single entry by id.
    pub fn get(&self, id: &str) -> Option<&ScanEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn persist(&mut self) -> Result<()> {
        let value = serde_json::to_value(&self.entries)?;
        self.storage.write(ENTRIES_KEY, &value)
    }
}
