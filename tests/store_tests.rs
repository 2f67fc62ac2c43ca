// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pnltrack::error::StoreError;
use pnltrack::models::{Entry, Month};
use pnltrack::store::{CsvStore, EntryStore, MemStore};
use rust_decimal::Decimal;
use std::fs;
use tempfile::tempdir;

fn e(year: i32, month: Month, day: Option<u32>, pl: i64) -> Entry {
    Entry::new(year, month, day, Decimal::from(pl))
}

#[test]
fn missing_file_loads_as_empty_journal() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("absent.csv"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_then_load_roundtrip_monthly() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("pnl.csv"));
    let entries = vec![
        e(2025, Month::Jan, None, 1000),
        e(2025, Month::Feb, None, -500),
    ];
    store.save(&entries).unwrap();
    assert_eq!(store.load().unwrap(), entries);

    // Monthly-only journals carry no Day column.
    let raw = fs::read_to_string(dir.path().join("pnl.csv")).unwrap();
    assert!(raw.starts_with("Year,Month,PL"));
}

#[test]
fn day_column_written_for_daily_journals() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("pnl.csv"));
    store
        .save(&[e(2025, Month::Jan, Some(15), 250)])
        .unwrap();
    let raw = fs::read_to_string(dir.path().join("pnl.csv")).unwrap();
    assert!(raw.starts_with("Year,Month,Day,PL"));
    assert_eq!(store.load().unwrap(), vec![e(2025, Month::Jan, Some(15), 250)]);
}

#[test]
fn load_is_idempotent() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("pnl.csv"));
    store
        .save(&[e(2024, Month::Jul, None, 77), e(2024, Month::Aug, None, -3)])
        .unwrap();
    assert_eq!(store.load().unwrap(), store.load().unwrap());
}

#[test]
fn upsert_merges_same_period_instead_of_duplicating() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("pnl.csv"));
    store.upsert(e(2026, Month::Jan, None, 1000)).unwrap();
    store.upsert(e(2026, Month::Jan, None, 500)).unwrap();

    let entries = store.load().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].pl, Decimal::from(1500));
}

#[test]
fn upsert_keeps_monthly_and_daily_rows_distinct() {
    let store = MemStore::new();
    store.upsert(e(2026, Month::Jan, None, 1000)).unwrap();
    store.upsert(e(2026, Month::Jan, Some(5), 200)).unwrap();
    store.upsert(e(2026, Month::Jan, Some(5), 100)).unwrap();

    let entries = store.load().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].pl, Decimal::from(1000));
    assert_eq!(entries[1].pl, Decimal::from(300));
}

#[test]
fn malformed_rows_dropped_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pnl.csv");
    fs::write(
        &path,
        "Year,Month,PL\n2025,Jan,1000\n2025,Smarch,10\nbad,Feb,20\n2025,Mar,oops\n2025,Apr,-250\n",
    )
    .unwrap();
    let store = CsvStore::new(&path);
    let entries = store.load().unwrap();
    assert_eq!(
        entries,
        vec![e(2025, Month::Jan, None, 1000), e(2025, Month::Apr, None, -250)]
    );
}

#[test]
fn impossible_day_is_dropped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pnl.csv");
    fs::write(
        &path,
        "Year,Month,Day,PL\n2025,Feb,30,100\n2024,Feb,29,50\n",
    )
    .unwrap();
    let entries = CsvStore::new(&path).load().unwrap();
    // Feb 30 never exists; Feb 29 2024 is a real leap day.
    assert_eq!(entries, vec![e(2024, Month::Feb, Some(29), 50)]);
}

#[test]
fn headers_matched_case_insensitively() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pnl.csv");
    fs::write(&path, "year,MONTH,pl\n2025,jan,10\n").unwrap();
    let entries = CsvStore::new(&path).load().unwrap();
    assert_eq!(entries, vec![e(2025, Month::Jan, None, 10)]);
}

#[test]
fn unrecognized_schema_treated_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pnl.csv");
    fs::write(&path, "Date,Amount\n2025-01-01,10\n").unwrap();
    assert!(CsvStore::new(&path).load().unwrap().is_empty());
}

#[test]
fn init_creates_header_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pnl.csv");
    let store = CsvStore::new(&path);
    store.init().unwrap();
    assert!(path.exists());

    store.upsert(e(2025, Month::Jan, None, 10)).unwrap();
    store.init().unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn save_failure_is_surfaced() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("no-such-dir").join("pnl.csv"));
    let err = store.save(&[e(2025, Month::Jan, None, 10)]).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
}

#[test]
fn failed_save_does_not_clobber_existing_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pnl.csv");
    let store = CsvStore::new(&path);
    store.save(&[e(2025, Month::Jan, None, 10)]).unwrap();

    // Saving through a store pointed at an unwritable location fails,
    // and the original file still loads intact.
    let broken = CsvStore::new(dir.path().join("gone").join("pnl.csv"));
    assert!(broken.save(&[e(2025, Month::Feb, None, 20)]).is_err());
    assert_eq!(store.load().unwrap(), vec![e(2025, Month::Jan, None, 10)]);
}

#[test]
fn mem_store_matches_csv_merge_contract() {
    let store = MemStore::with_entries(vec![e(2026, Month::Jan, None, 1000)]);
    store.upsert(e(2026, Month::Jan, None, 500)).unwrap();
    store.upsert(e(2026, Month::Feb, None, 250)).unwrap();
    let entries = store.load().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].pl, Decimal::from(1500));
}
