use thiserror::Error;

#[derive(Error, Debug)]
pub enum RekordError {
    /// Creation would violate the uniqueness constraint on the key field.
    #[error("Duplicate key: a record with {field} = {value:?} already exists")]
    DuplicateKey { field: String, value: String },

    /// The target of an operation that requires an existing record is missing.
    /// Plain store lookups report absence via `Option`/zero counts instead.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The backing store could not be reached or opened.
    #[error("Backend unavailable: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RekordError>;
