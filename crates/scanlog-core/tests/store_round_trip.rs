//! End-to-end persistence tests over a real data directory.

use std::fs;

use tempfile::tempdir;

use scanlog_core::entry::{EntryInput, Mode, Source};
use scanlog_core::settings::{Settings, Theme};
use scanlog_core::storage::JsonFileStore;
use scanlog_core::store::LogStore;

fn entry(name: &str, mode: Mode, ts: i64) -> scanlog_core::entry::ScanEntry {
    EntryInput::new(mode, name, Source::Manual)
        .with_quantity(Some("2".to_string()))
        .build_at(ts)
        .unwrap()
}

#[test]
fn log_survives_a_reload() {
    let dir = tempdir().unwrap();

    let mut log = LogStore::load(JsonFileStore::open(dir.path()).unwrap());
    log.append(entry("Pen", Mode::In, 1)).unwrap();
    log.append(entry("Notebook", Mode::Out, 2)).unwrap();
    let written = log.entries().to_vec();
    drop(log);

    assert!(dir.path().join("entries.json").exists());

    let reloaded = LogStore::load(JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.entries(), &written[..]);
    assert_eq!(reloaded.entries()[0].name, "Notebook");
}

#[test]
fn deletions_persist() {
    let dir = tempdir().unwrap();

    let mut log = LogStore::load(JsonFileStore::open(dir.path()).unwrap());
    log.append(entry("Pen", Mode::In, 1)).unwrap();
    let doomed = entry("Notebook", Mode::In, 2);
    let doomed_id = doomed.id.clone();
    log.append(doomed).unwrap();
    assert!(log.delete_by_id(&doomed_id).unwrap());
    drop(log);

    let reloaded = LogStore::load(JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.count(), 1);
    assert_eq!(reloaded.entries()[0].name, "Pen");
}

#[test]
fn corrupt_entries_document_degrades_to_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("entries.json"), "][ definitely not json").unwrap();

    let log = LogStore::load(JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(log.count(), 0);
}

#[test]
fn partial_settings_document_merges_on_disk() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{ "theme": "dark" }"#).unwrap();

    let storage = JsonFileStore::open(dir.path()).unwrap();
    let settings = Settings::load(&storage);
    assert!(settings.enable_sound);
    assert_eq!(settings.theme, Theme::Dark);
}

#[test]
fn settings_and_entries_do_not_interfere() {
    let dir = tempdir().unwrap();

    let mut log = LogStore::load(JsonFileStore::open(dir.path()).unwrap());
    log.append(entry("Pen", Mode::In, 1)).unwrap();

    let mut storage = JsonFileStore::open(dir.path()).unwrap();
    let mut settings = Settings::load(&storage);
    settings.theme = Theme::Dark;
    settings.save(&mut storage).unwrap();

    let reloaded = LogStore::load(JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(reloaded.count(), 1);
    assert_eq!(Settings::load(&storage).theme, Theme::Dark);
}
