use super::backend::StorageBackend;
use crate::error::{RekordError, Result};
use crate::model::{FieldMap, Record};

const DEFAULT_KEY_FIELD: &str = "email";

/// The record store proper: id generation, timestamps, the duplicate-key
/// check, and key-based lookup over any [`StorageBackend`].
///
/// A "key" in lookups is either a record id or the value of the store's
/// key field (default `email`).
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    key_field: String,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key_field: DEFAULT_KEY_FIELD.to_string(),
        }
    }

    /// Use a different uniqueness/lookup field.
    pub fn with_key_field(mut self, field: &str) -> Self {
        self.key_field = field.to_string();
        self
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Create a record from caller fields, assigning id and timestamps.
    ///
    /// Records carrying the key field are checked for duplicates with a
    /// linear scan. This is check-then-act and only correct single-threaded,
    /// which matches the store's concurrency model.
    pub fn create(&self, fields: FieldMap) -> Result<Record> {
        let record = Record::new(fields);

        if let Some(value) = record.field_str(&self.key_field) {
            let existing = self
                .backend
                .get_all()?
                .into_iter()
                .any(|r| r.field_str(&self.key_field) == Some(value));
            if existing {
                return Err(RekordError::DuplicateKey {
                    field: self.key_field.clone(),
                    value: value.to_string(),
                });
            }
        }

        self.backend.put(&record)?;
        Ok(record)
    }

    /// All records, oldest first.
    pub fn read_all(&self) -> Result<Vec<Record>> {
        self.backend.get_all()
    }

    /// Look up one record by id or key-field value.
    pub fn read_by_key(&self, key: &str) -> Result<Option<Record>> {
        let records = self.backend.get_all()?;
        Ok(records
            .into_iter()
            .find(|r| r.matches_key(key, &self.key_field)))
    }

    /// Merge `partial` into the record selected by `key`. Returns how many
    /// records were modified (0 or 1); absence is not an error.
    pub fn update(&self, key: &str, partial: FieldMap) -> Result<usize> {
        let mut record = match self.read_by_key(key)? {
            Some(record) => record,
            None => return Ok(0),
        };
        record.merge(partial);
        self.backend.put(&record)?;
        Ok(1)
    }

    /// Remove the record selected by `key`. Returns how many were removed.
    pub fn delete(&self, key: &str) -> Result<usize> {
        let record = match self.read_by_key(key)? {
            Some(record) => record,
            None => return Ok(0),
        };
        let removed = self.backend.delete(&record.id)?;
        Ok(removed as usize)
    }

    /// Remove every record, returning the count. Irreversible; any
    /// confirmation belongs to the caller.
    pub fn delete_all(&self) -> Result<usize> {
        self.backend.delete_all()
    }

    pub fn count(&self) -> Result<usize> {
        self.backend.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use serde_json::json;

    fn make_store() -> RecordStore<MemBackend> {
        RecordStore::with_backend(MemBackend::new())
    }

    fn user(name: &str, email: &str, age: i64) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), json!(name));
        fields.insert("email".to_string(), json!(email));
        fields.insert("age".to_string(), json!(age));
        fields
    }

    // --- Create ---

    #[test]
    fn create_assigns_id_and_projects_fields() {
        let store = make_store();
        let record = store.create(user("Ann", "ann@x.com", 30)).unwrap();

        let fetched = store.read_by_key("ann@x.com").unwrap().unwrap();
        assert_eq!(fetched.id, record.id);
        assert_eq!(fetched.field_str("name"), Some("Ann"));
        assert_eq!(fetched.fields["age"], json!(30));
    }

    #[test]
    fn create_rejects_duplicate_key() {
        let store = make_store();
        store.create(user("Ann", "ann@x.com", 30)).unwrap();

        let err = store.create(user("Other Ann", "ann@x.com", 40)).unwrap_err();
        assert!(matches!(err, RekordError::DuplicateKey { .. }));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn create_without_key_field_skips_uniqueness() {
        let store = make_store();
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), json!("report.pdf"));

        store.create(fields.clone()).unwrap();
        store.create(fields).unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn create_with_custom_key_field() {
        let store = RecordStore::with_backend(MemBackend::new()).with_key_field("username");
        let mut fields = FieldMap::new();
        fields.insert("username".to_string(), json!("ann"));

        store.create(fields.clone()).unwrap();
        let err = store.create(fields).unwrap_err();
        assert!(matches!(err, RekordError::DuplicateKey { .. }));
    }

    // --- Read ---

    #[test]
    fn read_all_is_insertion_ordered() {
        let store = make_store();
        store.create(user("Ann", "ann@x.com", 30)).unwrap();
        store.create(user("Bob", "bob@x.com", 40)).unwrap();
        store.create(user("Cid", "cid@x.com", 50)).unwrap();

        let names: Vec<_> = store
            .read_all()
            .unwrap()
            .iter()
            .map(|r| r.field_str("name").unwrap().to_string())
            .collect();
        assert_eq!(names, ["Ann", "Bob", "Cid"]);
    }

    #[test]
    fn read_by_key_accepts_id_or_email() {
        let store = make_store();
        let record = store.create(user("Ann", "ann@x.com", 30)).unwrap();

        assert!(store.read_by_key(&record.id).unwrap().is_some());
        assert!(store.read_by_key("ann@x.com").unwrap().is_some());
        assert!(store.read_by_key("bob@x.com").unwrap().is_none());
    }

    // --- Update ---

    #[test]
    fn update_merges_fields_and_advances_updated_at() {
        let store = make_store();
        let created = store.create(user("Ann", "ann@x.com", 30)).unwrap();

        let mut partial = FieldMap::new();
        partial.insert("age".to_string(), json!(31));
        let modified = store.update("ann@x.com", partial).unwrap();
        assert_eq!(modified, 1);

        let fetched = store.read_by_key("ann@x.com").unwrap().unwrap();
        assert_eq!(fetched.fields["age"], json!(31));
        assert_eq!(fetched.field_str("name"), Some("Ann"));
        assert!(fetched.updated_at > created.updated_at);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn update_missing_key_reports_zero() {
        let store = make_store();
        let mut partial = FieldMap::new();
        partial.insert("age".to_string(), json!(31));
        assert_eq!(store.update("nobody@x.com", partial).unwrap(), 0);
    }

    #[test]
    fn update_cannot_change_id() {
        let store = make_store();
        let created = store.create(user("Ann", "ann@x.com", 30)).unwrap();

        let mut partial = FieldMap::new();
        partial.insert("id".to_string(), json!("spoofed"));
        store.update("ann@x.com", partial).unwrap();

        let fetched = store.read_by_key("ann@x.com").unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
    }

    // --- Delete ---

    #[test]
    fn delete_removes_exactly_one() {
        let store = make_store();
        store.create(user("Ann", "ann@x.com", 30)).unwrap();
        store.create(user("Bob", "bob@x.com", 40)).unwrap();

        assert_eq!(store.delete("ann@x.com").unwrap(), 1);
        assert!(store.read_by_key("ann@x.com").unwrap().is_none());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn delete_missing_key_reports_zero() {
        let store = make_store();
        assert_eq!(store.delete("nobody@x.com").unwrap(), 0);
    }

    #[test]
    fn delete_all_counts_and_empties() {
        let store = make_store();
        store.create(user("Ann", "ann@x.com", 30)).unwrap();
        store.create(user("Bob", "bob@x.com", 40)).unwrap();

        assert_eq!(store.delete_all().unwrap(), 2);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn id_is_not_reused_after_delete() {
        let store = make_store();
        let first = store.create(user("Ann", "ann@x.com", 30)).unwrap();
        store.delete("ann@x.com").unwrap();
        let second = store.create(user("Ann", "ann@x.com", 30)).unwrap();
        assert_ne!(first.id, second.id);
    }

    // --- Error handling ---

    #[test]
    fn create_fails_on_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let store = RecordStore::with_backend(backend);

        let result = store.create(user("Ann", "ann@x.com", 30));
        assert!(result.is_err());
    }
}
