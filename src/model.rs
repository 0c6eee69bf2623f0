use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// User-supplied record fields: string names mapped to JSON scalars or
/// nested maps. Field order within a record is not part of the contract.
pub type FieldMap = Map<String, Value>;

/// Fields owned by the store. Callers can never set or overwrite these.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub fields: FieldMap,
}

/// Generate an opaque record id: 128 random bits rendered as hex.
/// Uniqueness is probabilistic, which is accepted at this scale.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl Record {
    /// Build a fresh record from caller fields. Reserved fields are
    /// silently dropped; the store assigns them.
    pub fn new(fields: FieldMap) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            created_at: now,
            updated_at: now,
            fields: strip_reserved(fields),
        }
    }

    /// Merge caller fields into this record and refresh `updated_at`.
    pub fn merge(&mut self, partial: FieldMap) {
        for (name, value) in strip_reserved(partial) {
            self.fields.insert(name, value);
        }
        self.touch();
    }

    /// Advance `updated_at`, keeping it strictly increasing even when the
    /// clock has not ticked between two operations.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    /// The string value of a field, if present and a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Whether this record is selected by `key`: either its id or the
    /// value of the store's key field (e.g. an email address).
    pub fn matches_key(&self, key: &str, key_field: &str) -> bool {
        if self.id == key {
            return true;
        }
        match self.fields.get(key_field) {
            Some(Value::String(s)) => s == key,
            Some(other) => other.to_string() == key,
            None => false,
        }
    }
}

fn strip_reserved(mut fields: FieldMap) -> FieldMap {
    for name in RESERVED_FIELDS {
        fields.remove(name);
    }
    fields
}
