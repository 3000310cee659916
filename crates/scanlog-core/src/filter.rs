//! Free-text and mode filtering over the scan log.

use crate::entry::{Mode, ScanEntry};

/// View selector: free-text query plus optional mode filter.
///
/// The query is normalized (trimmed, lowercased) at construction so
/// matching stays a cheap substring test per entry.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    query: String,
    mode: Option<Mode>,
}

impl ViewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().trim().to_lowercase();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Whether an entry passes both predicates.
    ///
    /// Text: case-insensitive substring against name or note; an empty
    /// query matches everything. Mode: exact match when a filter is
    /// set. Included iff both hold.
    pub fn matches(&self, entry: &ScanEntry) -> bool {
        let matches_text = self.query.is_empty()
            || entry.name.to_lowercase().contains(&self.query)
            || entry
                .note
                .as_deref()
                .is_some_and(|note| note.to_lowercase().contains(&self.query));
        let matches_mode = self.mode.map_or(true, |mode| mode == entry.mode);
        matches_text && matches_mode
    }
}

/// Derive the filtered view, preserving relative order.
///
/// Pure function of its inputs; recomputed per call rather than
/// incrementally maintained. No pagination - the log stays at hundreds
/// to low thousands of entries.
pub fn view<'a>(entries: &'a [ScanEntry], filter: &ViewFilter) -> Vec<&'a ScanEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryInput, Source};

    fn entry(name: &str, note: &str, mode: Mode) -> ScanEntry {
        EntryInput::new(mode, name, Source::Manual)
            .with_note(Some(note.to_string()))
            .build_at(1)
            .unwrap()
    }

    fn fixture() -> Vec<ScanEntry> {
        vec![
            entry("Pen", "blue", Mode::In),
            entry("Notebook", "", Mode::In),
        ]
    }

    #[test]
    fn empty_query_matches_everything() {
        let entries = fixture();
        let shown = view(&entries, &ViewFilter::new());
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let entries = fixture();
        let shown = view(&entries, &ViewFilter::new().query("pen"));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Pen");
    }

    #[test]
    fn query_matches_note_too() {
        let entries = fixture();
        let shown = view(&entries, &ViewFilter::new().query("BLUE"));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Pen");
    }

    #[test]
    fn mode_filter_without_matches_yields_empty() {
        let entries = fixture();
        let shown = view(&entries, &ViewFilter::new().mode(Mode::Out));
        assert!(shown.is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let mut entries = fixture();
        entries.push(entry("Pen", "red", Mode::Out));
        let shown = view(&entries, &ViewFilter::new().query("pen").mode(Mode::Out));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].note.as_deref(), Some("red"));
    }

    #[test]
    fn order_is_preserved() {
        let entries = fixture();
        let shown = view(&entries, &ViewFilter::new().mode(Mode::In));
        assert_eq!(shown[0].name, "Pen");
        assert_eq!(shown[1].name, "Notebook");
    }

    #[test]
    fn filtering_is_idempotent() {
        let entries = fixture();
        let filter = ViewFilter::new().query("pen");
        let once: Vec<ScanEntry> = view(&entries, &filter).into_iter().cloned().collect();
        let twice: Vec<ScanEntry> = view(&once, &filter).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}
