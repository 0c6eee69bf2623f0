use crate::error::Result;
use crate::model::Record;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::RecordStore`] handles the "what" (ids, timestamps, uniqueness).
///
/// Implementations must preserve insertion order in `get_all`. Methods take
/// `&self`; in-memory implementations use interior mutability since the
/// whole crate is single-threaded.
pub trait StorageBackend {
    /// Insert or replace the record stored under `record.id`.
    /// A replace keeps the record's original position.
    fn put(&self, record: &Record) -> Result<()>;

    /// Fetch a record by id.
    fn get(&self, id: &str) -> Result<Option<Record>>;

    /// All records, oldest insertion first.
    fn get_all(&self) -> Result<Vec<Record>>;

    /// Remove a record by id. Returns whether anything was removed.
    fn delete(&self, id: &str) -> Result<bool>;

    /// Remove every record, returning how many were removed.
    fn delete_all(&self) -> Result<usize>;

    /// Number of stored records.
    fn len(&self) -> Result<usize>;
}
