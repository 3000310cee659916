//! CSV export of the scan log.

use chrono::{DateTime, Local};

use crate::entry::ScanEntry;
use crate::time::format_local;

/// Serialize entries as CSV in input order: a header row, then one row
/// per entry. Every field is double-quoted and embedded quotes are
/// doubled; timestamps render in local time.
pub fn to_csv<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a ScanEntry>,
{
    let mut rows = vec![csv_row(&[
        "Timestamp", "Mode", "Name", "Quantity", "Operator", "Note",
    ])];
    for entry in entries {
        rows.push(csv_row(&[
            &format_local(entry.timestamp),
            entry.mode.as_str(),
            &entry.name,
            &entry.quantity.to_string(),
            entry.operator.as_deref().unwrap_or(""),
            entry.note.as_deref().unwrap_or(""),
        ]));
    }
    rows.join("\n")
}

fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Export filename from the export-time local timestamp:
/// `scan_logs_<YYYYMMDD>_<HHMMSS>.csv`.
pub fn export_filename(now: DateTime<Local>) -> String {
    format!("scan_logs_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryInput, Mode, Source};
    use chrono::TimeZone;

    #[test]
    fn header_row_comes_first() {
        let entries: Vec<ScanEntry> = Vec::new();
        let csv = to_csv(&entries);
        assert_eq!(
            csv,
            "\"Timestamp\",\"Mode\",\"Name\",\"Quantity\",\"Operator\",\"Note\""
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let entry = EntryInput::new(Mode::In, "Item \"A\"", Source::Manual)
            .with_quantity(Some("3".to_string()))
            .build_at(1_700_000_000_000)
            .unwrap();
        let csv = to_csv([&entry]);
        assert!(csv.contains("\"Item \"\"A\"\"\""), "csv was: {csv}");
        assert!(csv.contains("\"IN\""));
        assert!(csv.contains("\"3\""));
    }

    #[test]
    fn rows_follow_input_order() {
        let first = EntryInput::new(Mode::In, "Pen", Source::Manual)
            .build_at(1)
            .unwrap();
        let second = EntryInput::new(Mode::Out, "Notebook", Source::Manual)
            .build_at(2)
            .unwrap();
        let csv = to_csv([&first, &second]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Pen"));
        assert!(lines[2].contains("Notebook"));
    }

    #[test]
    fn missing_optionals_render_empty() {
        let entry = EntryInput::new(Mode::Out, "Pen", Source::Scanned)
            .build_at(1)
            .unwrap();
        let csv = to_csv([&entry]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with("\"1\",\"\",\"\""), "row was: {row}");
    }

    #[test]
    fn filename_uses_local_timestamp() {
        let now = Local.with_ymd_and_hms(2024, 3, 5, 4, 5, 6).unwrap();
        assert_eq!(export_filename(now), "scan_logs_20240305_040506.csv");
    }
}
