//! JSON file repository tests against a scratch directory.

use address_book::domain::Field;
use address_book::error::StorageError;
use address_book::{AddressBook, AddressBookRepository, JsonFileRepository, Record};
use std::fs;
use tempfile::TempDir;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut oleg =
        Record::with_fields("oleg", Some("+380501234567"), Some("05.06.1990")).unwrap();
    oleg.add_phone_number("+380671112233").unwrap();
    oleg.add_phone_number("+380501234567").unwrap();
    book.add_record(oleg).unwrap();

    book.add_record(Record::with_fields("anna", None, None).unwrap())
        .unwrap();
    book.add_record(Record::with_fields("diana", None, Some("29.02.2000")).unwrap())
        .unwrap();
    book
}

fn phones(record: &Record) -> Vec<&str> {
    record.phones().iter().map(|p| p.as_str()).collect()
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));
    let book = sample_book();

    repo.save(&book).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(
        loaded.names().collect::<Vec<_>>(),
        book.names().collect::<Vec<_>>()
    );
    for original in &book {
        let restored = loaded
            .get_record_by_name(original.name().as_str())
            .unwrap();
        assert_eq!(phones(restored), phones(original));
        assert_eq!(
            restored.birthday().map(|b| b.as_str()),
            original.birthday().map(|b| b.as_str())
        );
    }
}

#[test]
fn test_save_overwrites_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    let repo = JsonFileRepository::new(&path);

    repo.save(&sample_book()).unwrap();
    repo.save(&AddressBook::new()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    assert!(!dir.path().join("book.json.tmp").exists());
}

#[test]
fn test_saved_document_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    let repo = JsonFileRepository::new(&path);
    repo.save(&sample_book()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value["oleg"],
        serde_json::json!({
            "name": "oleg",
            "phones": ["+380501234567", "+380671112233", "+380501234567"],
            "birthday": "05.06.1990"
        })
    );
    assert_eq!(value["anna"]["birthday"], serde_json::Value::Null);
}

#[test]
fn test_load_missing_file_bootstraps_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.json");
    let repo = JsonFileRepository::new(&path);

    let book = repo.load().unwrap();

    assert!(book.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn test_load_blank_file_is_empty_book() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.json");
    fs::write(&path, "  \n\t ").unwrap();

    let book = JsonFileRepository::new(&path).load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_load_malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"oleg\": {\"name\": ").unwrap();

    let result = JsonFileRepository::new(&path).load();
    assert!(matches!(result, Err(StorageError::Parse(_))));
}

#[test]
fn test_load_applies_live_validation_rules() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hand_edited.json");
    fs::write(
        &path,
        r#"{
            "oleg": {"name": "oleg", "phones": ["+380501234567", "12345"], "birthday": "31.02.1990"},
            "anna": {"name": "anna", "phones": [], "birthday": null},
            "note": "not a contact"
        }"#,
    )
    .unwrap();

    let book = JsonFileRepository::new(&path).load().unwrap();

    assert_eq!(book.len(), 2);
    let oleg = book.get_record_by_name("oleg").unwrap();
    assert_eq!(phones(oleg), vec!["+380501234567"]);
    assert!(oleg.birthday().is_none());
    assert!(book.get_record_by_name("anna").is_some());
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("nope").join("book.json"));

    let result = repo.save(&sample_book());
    assert!(matches!(result, Err(StorageError::Io { .. })));
}

#[test]
fn test_load_keeps_contacts_with_mistyped_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mistyped.json");
    fs::write(
        &path,
        r#"{
            "oleg": {"name": "oleg", "phones": ["+380501234567"], "birthday": 12},
            "anna": {"name": null, "phones": ["+380671112233"]},
            "ivan": {"name": "ivan", "phones": ["+380931112233", 5]}
        }"#,
    )
    .unwrap();
    let repo = JsonFileRepository::new(&path);

    let book = repo.load().unwrap();

    assert_eq!(book.names().collect::<Vec<_>>(), vec!["oleg", "anna", "ivan"]);
    let oleg = book.get_record_by_name("oleg").unwrap();
    assert_eq!(phones(oleg), vec!["+380501234567"]);
    assert!(oleg.birthday().is_none());
    assert_eq!(phones(book.get_record_by_name("anna").unwrap()), vec!["+380671112233"]);
    assert_eq!(phones(book.get_record_by_name("ivan").unwrap()), vec!["+380931112233"]);

    // A later save keeps every contact
    repo.save(&book).unwrap();
    assert_eq!(repo.load().unwrap().len(), 3);
}

#[test]
fn test_failed_save_removes_temp_file() {
    let dir = TempDir::new().unwrap();
    // A non-empty directory at the target path makes the final rename fail
    let target = dir.path().join("book.json");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "x").unwrap();

    let result = JsonFileRepository::new(&target).save(&sample_book());

    assert!(matches!(result, Err(StorageError::Io { .. })));
    assert!(!dir.path().join("book.json.tmp").exists());
    assert!(target.is_dir());
}
