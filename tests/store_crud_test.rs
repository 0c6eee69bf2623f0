//! End-to-end CRUD properties against the filesystem backend.

use rekord::error::RekordError;
use rekord::model::FieldMap;
use rekord::store::fs::FsBackend;
use rekord::store::RecordStore;
use serde_json::json;
use tempfile::TempDir;

fn setup() -> (TempDir, RecordStore<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::open(dir.path().join("store")).unwrap();
    (dir, RecordStore::with_backend(backend))
}

fn user(name: &str, email: &str, age: i64) -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("name".to_string(), json!(name));
    fields.insert("email".to_string(), json!(email));
    fields.insert("age".to_string(), json!(age));
    fields
}

#[test]
fn created_fields_project_exactly() {
    let (_dir, store) = setup();
    store.create(user("Ann", "ann@x.com", 30)).unwrap();

    let fetched = store.read_by_key("ann@x.com").unwrap().unwrap();
    assert_eq!(fetched.field_str("name"), Some("Ann"));
    assert_eq!(fetched.field_str("email"), Some("ann@x.com"));
    assert_eq!(fetched.fields["age"], json!(30));
}

#[test]
fn duplicate_create_rejected_and_size_unchanged() {
    let (_dir, store) = setup();
    store.create(user("Ann", "ann@x.com", 30)).unwrap();

    let err = store.create(user("Ann 2", "ann@x.com", 31)).unwrap_err();
    assert!(matches!(err, RekordError::DuplicateKey { .. }));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn update_changes_field_and_advances_updated_at() {
    let (_dir, store) = setup();
    let created = store.create(user("Ann", "ann@x.com", 30)).unwrap();

    let mut partial = FieldMap::new();
    partial.insert("age".to_string(), json!(31));
    assert_eq!(store.update("ann@x.com", partial).unwrap(), 1);

    let fetched = store.read_by_key("ann@x.com").unwrap().unwrap();
    assert_eq!(fetched.fields["age"], json!(31));
    assert!(fetched.updated_at > created.updated_at);
}

#[test]
fn delete_then_read_is_absent_and_count_drops_by_one() {
    let (_dir, store) = setup();
    store.create(user("Ann", "ann@x.com", 30)).unwrap();
    store.create(user("Bob", "bob@x.com", 40)).unwrap();

    assert_eq!(store.delete("ann@x.com").unwrap(), 1);
    assert!(store.read_by_key("ann@x.com").unwrap().is_none());
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn delete_all_counts_then_store_is_empty() {
    let (_dir, store) = setup();
    store.create(user("Ann", "ann@x.com", 30)).unwrap();
    store.create(user("Bob", "bob@x.com", 40)).unwrap();

    assert_eq!(store.delete_all().unwrap(), 2);
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn ann_turns_31_walkthrough() {
    let (_dir, store) = setup();
    let created = store.create(user("Ann", "ann@x.com", 30)).unwrap();
    assert!(!created.id.is_empty());

    let mut partial = FieldMap::new();
    partial.insert("age".to_string(), json!(31));
    assert_eq!(store.update("ann@x.com", partial).unwrap(), 1);

    let fetched = store.read_by_key("ann@x.com").unwrap().unwrap();
    assert_eq!(fetched.fields["age"], json!(31));
}

#[test]
fn lookup_by_id_works_like_lookup_by_email() {
    let (_dir, store) = setup();
    let created = store.create(user("Ann", "ann@x.com", 30)).unwrap();
    let by_id = store.read_by_key(&created.id).unwrap().unwrap();
    assert_eq!(by_id.field_str("email"), Some("ann@x.com"));
}
