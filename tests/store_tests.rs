// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::error::{StoreError, ValidationError};
use pocketledger::models::{Transaction, TransactionType};
use pocketledger::storage::MemoryBackend;
use pocketledger::store::{DEFAULT_STORAGE_KEY, MissingIdPolicy, TransactionStore};
use rust_decimal::Decimal;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn expense(id: &str, category: &str, cents: i64, description: &str) -> Transaction {
    Transaction::new(
        day("2025-01-15"),
        TransactionType::Expense,
        category,
        Decimal::new(cents, 2),
        description,
    )
    .with_id(id)
}

fn seeded() -> TransactionStore<MemoryBackend> {
    let store = TransactionStore::new(MemoryBackend::new());
    store.create(expense("a", "Food", 3000, "Groceries")).unwrap();
    store.create(expense("b", "Transport", 1250, "Bus pass")).unwrap();
    store.create(expense("c", "Food", 2000, "Takeaway")).unwrap();
    store
}

#[test]
fn list_is_empty_before_anything_is_stored() {
    let store = TransactionStore::new(MemoryBackend::new());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn create_then_list_preserves_insertion_order() {
    let store = seeded();
    let ids: Vec<String> = store.list().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn create_assigns_uuid_when_id_missing() {
    let store = TransactionStore::new(MemoryBackend::new());
    let t = Transaction::new(
        day("2025-02-01"),
        TransactionType::Income,
        "Salary",
        Decimal::new(250000, 2),
        "February pay",
    );
    let created = store.create(t.clone()).unwrap();
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());
    assert_eq!(created, t.with_id(created.id.clone()));
    assert_eq!(store.list().unwrap(), vec![created]);
}

#[test]
fn create_rejects_invalid_entry_without_persisting() {
    let store = TransactionStore::new(MemoryBackend::new());
    let err = store
        .create(expense("x", "Food", 0, "Free lunch"))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::NonPositiveAmount(_))
    ));
    assert!(store.backend().raw(DEFAULT_STORAGE_KEY).is_none());
}

#[test]
fn update_replaces_in_place_and_keeps_id() {
    let store = seeded();
    let replacement = expense("ignored", "Shopping", 4599, "Shoes");
    let returned = store.update("b", replacement).unwrap();
    assert_eq!(returned.id, "b");

    let all = store.list().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], expense("a", "Food", 3000, "Groceries"));
    assert_eq!(all[1], expense("b", "Shopping", 4599, "Shoes"));
    assert_eq!(all[2], expense("c", "Food", 2000, "Takeaway"));
}

#[test]
fn update_replaces_every_entry_sharing_the_id() {
    let raw = r#"[
        {"id":"dup","date":"2025-01-02","type":"expense","category":"Food","amount":5,"description":"First"},
        {"id":"other","date":"2025-01-02","type":"expense","category":"Food","amount":6,"description":"Keep"},
        {"id":"dup","date":"2025-01-03","type":"expense","category":"Food","amount":7,"description":"Second"}
    ]"#;
    let store = TransactionStore::new(MemoryBackend::with_entry(DEFAULT_STORAGE_KEY, raw));
    store.update("dup", expense("", "Shopping", 900, "Fixed")).unwrap();

    let all = store.list().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], expense("dup", "Shopping", 900, "Fixed"));
    assert_eq!(all[1].description, "Keep");
    assert_eq!(all[2], expense("dup", "Shopping", 900, "Fixed"));
}

#[test]
fn update_of_unknown_id_is_a_no_op_by_default() {
    let store = seeded();
    let before = store.list().unwrap();
    let returned = store
        .update("zzz", expense("zzz", "Other", 100, "Ghost"))
        .unwrap();
    assert_eq!(returned.description, "Ghost");
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn update_of_unknown_id_fails_under_reject_policy() {
    let store = seeded().with_missing_id_policy(MissingIdPolicy::Reject);
    let before = store.list().unwrap();
    let err = store
        .update("zzz", expense("zzz", "Other", 100, "Ghost"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { ref id } if id == "zzz"));
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn delete_removes_exactly_one_and_is_idempotent() {
    let store = seeded();
    assert_eq!(store.delete("b").unwrap(), "b");
    let ids: Vec<String> = store.list().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, ["a", "c"]);

    assert_eq!(store.delete("b").unwrap(), "b");
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn delete_of_unknown_id_fails_under_reject_policy() {
    let store = seeded().with_missing_id_policy(MissingIdPolicy::Reject);
    assert!(matches!(
        store.delete("nope"),
        Err(StoreError::NotFound { .. })
    ));
    assert_eq!(store.list().unwrap().len(), 3);
}

#[test]
fn corrupt_blob_surfaces_as_corrupt_store_error() {
    let store = TransactionStore::new(MemoryBackend::with_entry(
        DEFAULT_STORAGE_KEY,
        "[{\"id\": \"a\", \"date\": ",
    ));
    let err = store.list().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
    assert!(!err.is_retryable());
    // writes go through the same load and fail the same way
    assert!(matches!(
        store.create(expense("b", "Food", 100, "Snack")),
        Err(StoreError::Corrupt { .. })
    ));
}

#[test]
fn reads_collection_written_by_browser_client() {
    let raw = r#"[
        {"id":"1","date":"2025-01-02","type":"expense","category":"Food","amount":12.34,"description":"Lunch"},
        {"id":"2","date":"2025-01-03","type":"income","category":"Gift","amount":50,"description":"Birthday"}
    ]"#;
    let store = TransactionStore::new(MemoryBackend::with_entry(DEFAULT_STORAGE_KEY, raw));
    let all = store.list().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].amount, Decimal::new(1234, 2));
    assert_eq!(all[1].r#type, TransactionType::Income);
}

#[test]
fn custom_key_isolates_collections() {
    let store = TransactionStore::new(MemoryBackend::new()).with_key("household");
    store.create(expense("a", "Food", 100, "Snack")).unwrap();
    assert!(store.backend().raw(DEFAULT_STORAGE_KEY).is_none());
    assert!(store.backend().raw("household").is_some());
}

#[test]
fn create_many_is_all_or_nothing() {
    let store = seeded();
    let batch = vec![
        expense("", "Food", 500, "Coffee"),
        expense("", "Food", 700, ""),
    ];
    assert!(store.create_many(batch).is_err());
    assert_eq!(store.list().unwrap().len(), 3);

    let created = store
        .create_many(vec![
            expense("", "Food", 500, "Coffee"),
            expense("", "Housing", 90000, "Rent"),
        ])
        .unwrap();
    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|t| !t.id.is_empty()));
    let all = store.list().unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[4].description, "Rent");
}

#[test]
fn get_finds_by_id() {
    let store = seeded();
    assert_eq!(store.get("c").unwrap().unwrap().description, "Takeaway");
    assert!(store.get("missing").unwrap().is_none());
}

#[test]
fn amount_beyond_float_range_is_rejected_and_store_stays_readable() {
    let store = seeded();
    let err = store
        .create(Transaction {
            amount: Decimal::MAX,
            ..expense("big", "Other", 100, "Lottery")
        })
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InexactAmount(_))
    ));
    assert_eq!(store.list().unwrap().len(), 3);
}

#[test]
fn amount_that_would_round_is_rejected() {
    let store = seeded();
    // 12345678901234567.89 would read back as 12345678901234568
    let lossy = expense("big", "Other", 1_234_567_890_123_456_789, "Too precise");
    assert!(matches!(
        store.create(lossy.clone()),
        Err(StoreError::Validation(ValidationError::InexactAmount(_)))
    ));
    assert!(matches!(
        store.update("a", lossy),
        Err(StoreError::Validation(ValidationError::InexactAmount(_)))
    ));
    assert_eq!(store.list().unwrap()[0], expense("a", "Food", 3000, "Groceries"));
}

#[test]
fn largest_exact_amount_reads_back_unchanged() {
    let store = TransactionStore::new(MemoryBackend::new());
    let t = expense("max", "Housing", 99_999_999_999_999, "Mansion");
    store.create(t.clone()).unwrap();
    assert_eq!(store.list().unwrap(), vec![t]);
}
