use std::fs;

use assert_fs::prelude::*;
use chrono::NaiveDate;
use paycycle_core::{BookStorage, CoreError};
use paycycle_domain::{Bill, Book, Frequency, PayFrequency, PaySchedule};
use paycycle_storage_json::JsonBookStorage;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_book() -> Book {
    let mut book = Book::new();
    book.bills.push(Bill::new("Rent", 1200.0, date(2024, 1, 1), Frequency::Monthly));
    book.bills.push(
        Bill::new("Water", 45.0, date(2024, 6, 20), Frequency::EveryThreeWeeks)
            .with_existing_recurring(true),
    );
    book.pay_schedule = Some(PaySchedule::new(
        2000.0,
        date(2024, 5, 31),
        PayFrequency::Monthly,
    ));
    book
}

#[test]
fn missing_book_loads_empty() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonBookStorage::new(dir.path()).expect("create storage");

    let book = storage.load_book().expect("load book");
    assert!(book.bills.is_empty());
    assert!(book.pay_schedule.is_none());
    assert!(!storage.book_path().exists());
}

#[test]
fn json_storage_can_save_and_load_book() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonBookStorage::new(dir.path()).expect("create storage");

    let book = sample_book();
    storage.save_book(&book).expect("save book");
    let loaded = storage.load_book().expect("load book");

    assert_eq!(loaded.bills, book.bills);
    assert_eq!(loaded.pay_schedule, book.pay_schedule);
    assert!(storage.book_path().exists());
    assert!(!dir.path().join("book.json.tmp").exists());
}

#[test]
fn first_save_makes_no_backup_but_overwrite_does() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonBookStorage::new(dir.path()).expect("create storage");

    let mut book = sample_book();
    storage.save_book(&book).expect("first save");
    assert!(storage.list_backups().expect("list").is_empty());

    book.bills.pop();
    storage.save_book(&book).expect("second save");
    let backups = storage.list_backups().expect("list");
    assert_eq!(backups.len(), 1);

    let previous: Book =
        serde_json::from_str(&fs::read_to_string(&backups[0].path).expect("read backup"))
            .expect("parse backup");
    assert_eq!(previous.bills.len(), 2);
}

#[test]
fn json_storage_creates_and_restores_backups() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonBookStorage::new(dir.path()).expect("create storage");

    let book = sample_book();
    let info = storage
        .backup_book(&book, Some("Before June"))
        .expect("create backup");
    assert!(info.id.starts_with("book_"));
    assert!(info.id.ends_with("_before-june.json"));
    assert!(info.created_at.is_some());

    let backups = storage.list_backups().expect("list backups");
    assert!(
        backups.iter().any(|entry| entry.id == info.id),
        "backup list should include created backup"
    );

    storage.save_book(&Book::new()).expect("overwrite");
    let restored = storage.restore_backup(&info.id).expect("restore backup");
    assert_eq!(restored.bills.len(), 2);
    assert_eq!(storage.load_book().expect("reload").bills.len(), 2);
}

#[test]
fn restoring_unknown_backup_is_a_storage_error() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonBookStorage::new(dir.path()).expect("create storage");

    assert!(matches!(
        storage.restore_backup("book_20000101_0000.json"),
        Err(CoreError::Storage(_))
    ));
    assert!(matches!(
        storage.restore_backup("../book.json"),
        Err(CoreError::Storage(_))
    ));
}

#[test]
fn retention_keeps_only_newest_backups() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let storage = JsonBookStorage::with_retention(temp.path(), 2).expect("create storage");
    let json = serde_json::to_string(&Book::new()).expect("json");
    for name in [
        "book_20240101_0900.json",
        "book_20240201_0900.json",
        "book_20240301_0900_march.json",
    ] {
        temp.child("backups").child(name).write_str(&json).expect("seed");
    }

    storage.backup_book(&sample_book(), None).expect("backup");

    let ids: Vec<_> = storage
        .list_backups()
        .expect("list")
        .into_iter()
        .map(|info| info.id)
        .collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[1], "book_20240301_0900_march.json");
    assert!(!temp.child("backups/book_20240101_0900.json").path().exists());
}

#[test]
fn legacy_book_without_existing_flag_loads() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    temp.child("book.json")
        .write_str(
            r#"{
                "schema_version": 1,
                "bills": [{
                    "id": "8f0c1f6e-7a43-4a8e-9d43-4f4c2a1b9e10",
                    "name": "Phone",
                    "amount": 55.0,
                    "due_date": "2023-11-03",
                    "frequency": "monthly"
                }],
                "pay_schedule": {"amount": 900.0}
            }"#,
        )
        .expect("seed");
    let storage = JsonBookStorage::new(temp.path()).expect("create storage");

    let book = storage.load_book().expect("load");
    assert_eq!(book.bills.len(), 1);
    assert!(book.bills[0].existing_recurring);
    assert!(book.pay_schedule.is_none());
}
