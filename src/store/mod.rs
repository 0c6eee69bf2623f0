//! # Storage Layer
//!
//! Storage is split in two, following the rest of the crate's
//! backend-agnostic design:
//!
//! - [`backend::StorageBackend`] handles the raw "how": a mapping-like
//!   surface (`put`/`get`/`get_all`/`delete`/`delete_all`/`len`) keyed by
//!   generated record ids.
//! - [`RecordStore`] handles the "what": id generation, timestamps, the
//!   duplicate-key check, and key-based lookup. It works against any
//!   backend.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production storage. All records for a store live in
//!   one JSON array file inside the data directory, written atomically
//!   (tmp file + rename). Opening the backend creates the directory; if it
//!   cannot, the backend is unavailable and startup fails.
//! - [`memory::MemBackend`]: in-memory storage for tests. No persistence;
//!   can simulate write failures.
//!
//! Both keep records in insertion order, which is what `read_all` reports.

pub mod backend;
pub mod fs;
pub mod memory;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::RecordStore;
