//! # Rekord Architecture
//!
//! Rekord is a UI-agnostic record-store library with a CLI client on top.
//! The layering mirrors that split:
//!
//! ```text
//! CLI (main.rs, args.rs)   — argument parsing, prompts, terminal output;
//!                            the only place that knows about stdout/stderr
//!                            and exit codes
//!          │
//! API (api.rs)             — thin facade, dispatches to commands, returns
//!                            structured Result types
//!          │
//! Commands (commands/*.rs) — pure business logic per operation, no I/O
//!                            assumptions
//!          │
//! Store (store/)           — RecordStore over an abstract StorageBackend
//!                            (filesystem in production, memory in tests)
//! ```
//!
//! The vault ([`vault`]) adds file CRUD on top of the record store, and
//! [`forward`] is the explicit fire-and-forget seam for handing created
//! records to a secondary sink.
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns plain
//! Rust types, and never writes to stdout or exits the process. That keeps
//! every layer testable in isolation and the core reusable behind any UI.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: the `Record` type and field-map helpers
//! - [`vault`]: file storage tracked by records
//! - [`forward`]: best-effort record forwarding
//! - [`config`]: environment-driven configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod forward;
pub mod model;
pub mod store;
pub mod vault;
