//! Tests for the in-process contact store.

use chrono::{TimeZone, Utc};
use ssp_core::types::Timestamp;
use ssp_core::contact::NewContact;
use ssp_db::store::{ContactStore, InMemoryContactStore};

fn new_contact(name: &str, email: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
    }
}

#[tokio::test]
async fn insert_assigns_id_and_timestamp() {
    let store = InMemoryContactStore::new();
    let before = Utc::now();

    let stored = store.insert(&new_contact("Jo", "jo@x.com")).await.unwrap();

    assert_eq!(stored.id, 1);
    assert_eq!(stored.name, "Jo");
    assert_eq!(stored.email, "jo@x.com");
    assert!(stored.created_at >= before);
    assert!(stored.created_at <= Utc::now());
}

#[tokio::test]
async fn duplicate_emails_are_kept_as_separate_rows() {
    let store = InMemoryContactStore::new();
    let a = store.insert(&new_contact("Jo", "jo@x.com")).await.unwrap();
    let b = store.insert(&new_contact("Jo", "jo@x.com")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn list_is_newest_first() {
    let store = InMemoryContactStore::new();
    for i in 0..5 {
        store
            .insert(&new_contact(&format!("user{i}"), &format!("u{i}@x.com")))
            .await
            .unwrap();
    }

    let rows = store.list_newest_first().await.unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].name, "user4");
    for pair in rows.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let store = InMemoryContactStore::default();
    assert!(store.is_empty().await);
    assert!(store.list_newest_first().await.unwrap().is_empty());
    store.health_check().await.unwrap();
}

fn fixed_clock() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn equal_timestamps_list_by_id_descending() {
    let store = InMemoryContactStore::with_clock(fixed_clock);
    for name in ["Ann", "Bob", "Cy"] {
        let email = format!("{}@x.com", name.to_lowercase());
        store.insert(&new_contact(name, &email)).await.unwrap();
    }

    let rows = store.list_newest_first().await.unwrap();

    assert!(rows.iter().all(|c| c.created_at == fixed_clock()));
    let ids: Vec<i64> = rows.iter().map(|c| c.id).collect();
    assert_eq!(ids, [3, 2, 1]);
    assert_eq!(rows[0].name, "Cy");
}
