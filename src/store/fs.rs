use super::backend::StorageBackend;
use crate::error::{RekordError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DEFAULT_STORE_FILE: &str = "records.json";

/// Filesystem storage backend.
///
/// All records live in one JSON array file inside `root`, so insertion
/// order is simply file order. Every save rewrites the file atomically
/// (write to a tmp file, then rename) so a failed write never leaves a
/// partially written store visible to subsequent reads.
pub struct FsBackend {
    root: PathBuf,
    store_file: String,
}

impl FsBackend {
    /// Open the backend rooted at `root`, creating the directory if
    /// needed. Failure here means the backend is unavailable.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            RekordError::Backend(format!("cannot open data dir {}: {}", root.display(), e))
        })?;
        Ok(Self {
            root,
            store_file: DEFAULT_STORE_FILE.to_string(),
        })
    }

    /// Use a different store file name, so several stores (records, file
    /// metadata) can share one data directory.
    pub fn with_store_file(mut self, name: &str) -> Self {
        self.store_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn store_path(&self) -> PathBuf {
        self.root.join(&self.store_file)
    }

    fn load(&self) -> Result<Vec<Record>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(RekordError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(RekordError::Serialization)?;
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(RekordError::Serialization)?;

        // Atomic write
        let tmp_path = self.root.join(format!(".records-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RekordError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, self.store_path()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RekordError::Io(e));
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn put(&self, record: &Record) -> Result<()> {
        let mut records = self.load()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.save(&records)
    }

    fn get(&self, id: &str) -> Result<Option<Record>> {
        let records = self.load()?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    fn get_all(&self) -> Result<Vec<Record>> {
        self.load()
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }

    fn delete_all(&self) -> Result<usize> {
        let removed = self.load()?.len();
        self.save(&[])?;
        Ok(removed)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }
}
