//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for every
//! caller. It dispatches, it does not implement business logic, and it never
//! performs terminal I/O. `RekordApi<B>` is generic over the storage backend
//! so the same facade serves `FsBackend` in production and `MemBackend` in
//! tests.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::forward::Forwarder;
use crate::model::FieldMap;
use crate::store::{RecordStore, StorageBackend};
use crate::vault::FileVault;
use std::path::{Path, PathBuf};

pub struct RekordApi<B: StorageBackend> {
    store: RecordStore<B>,
    vault: FileVault<B>,
    forwarder: Option<Box<dyn Forwarder>>,
}

impl<B: StorageBackend> RekordApi<B> {
    pub fn new(store: RecordStore<B>, vault: FileVault<B>) -> Self {
        Self {
            store,
            vault,
            forwarder: None,
        }
    }

    /// Attach a fire-and-forget forwarder for created records.
    pub fn with_forwarder(mut self, forwarder: Box<dyn Forwarder>) -> Self {
        self.forwarder = Some(forwarder);
        self
    }

    // --- Records ---

    pub fn create_record(&self, fields: FieldMap) -> Result<CmdResult> {
        commands::create::run(&self.store, fields, self.forwarder.as_deref())
    }

    pub fn list_records(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_record(&self, key: &str) -> Result<CmdResult> {
        commands::get::run(&self.store, key)
    }

    pub fn update_record(&self, key: &str, partial: FieldMap) -> Result<CmdResult> {
        commands::update::run(&self.store, key, partial)
    }

    pub fn delete_record(&self, key: &str) -> Result<CmdResult> {
        commands::delete::run(&self.store, key)
    }

    pub fn purge_records(&self) -> Result<CmdResult> {
        commands::purge::run(&self.store)
    }

    pub fn record_stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    // --- Files ---

    pub fn add_file(
        &self,
        source: &Path,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<CmdResult> {
        commands::files::add(&self.vault, source, name, description)
    }

    pub fn list_files(&self) -> Result<CmdResult> {
        commands::files::list(&self.vault)
    }

    pub fn get_file(&self, id: &str) -> Result<CmdResult> {
        commands::files::get(&self.vault, id)
    }

    pub fn download_file(&self, id: &str, dest: Option<PathBuf>) -> Result<CmdResult> {
        commands::files::download(&self.vault, id, dest)
    }

    pub fn update_file(&self, id: &str, partial: FieldMap) -> Result<CmdResult> {
        commands::files::update(&self.vault, id, partial)
    }

    pub fn remove_file(&self, id: &str) -> Result<CmdResult> {
        commands::files::remove(&self.vault, id)
    }

    pub fn purge_files(&self) -> Result<CmdResult> {
        commands::files::purge(&self.vault)
    }

    pub fn file_stats(&self) -> Result<CmdResult> {
        commands::files::stats(&self.vault)
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use serde_json::json;
    use tempfile::TempDir;

    fn make_api(dir: &TempDir) -> RekordApi<MemBackend> {
        let store = RecordStore::with_backend(MemBackend::new());
        let vault = FileVault::open(MemBackend::new(), dir.path().join("vault")).unwrap();
        RekordApi::new(store, vault)
    }

    #[test]
    fn dispatches_record_lifecycle() {
        let dir = TempDir::new().unwrap();
        let api = make_api(&dir);

        let mut fields = FieldMap::new();
        fields.insert("email".to_string(), json!("ann@x.com"));
        api.create_record(fields).unwrap();

        assert_eq!(api.list_records().unwrap().listed_records.len(), 1);
        assert_eq!(api.record_stats().unwrap().count, Some(1));
        assert_eq!(api.delete_record("ann@x.com").unwrap().count, Some(1));
        assert_eq!(api.record_stats().unwrap().count, Some(0));
    }

    #[test]
    fn record_and_file_stores_are_separate() {
        let dir = TempDir::new().unwrap();
        let api = make_api(&dir);

        let source = dir.path().join("a.txt");
        std::fs::write(&source, "x").unwrap();
        api.add_file(&source, None, None).unwrap();

        assert_eq!(api.record_stats().unwrap().count, Some(0));
        assert_eq!(api.file_stats().unwrap().count, Some(1));
    }
}
