//! File vault: file CRUD on top of the record store.
//!
//! Each stored file is tracked by a record (fields: `name`, `description`,
//! `original_name`, `size_bytes`, `stored_path`) while the bytes live in the
//! vault directory as `{id}_{original_name}`. Copies go through a tmp file
//! and a rename so a failed copy never leaves a partial destination file.

use crate::error::{RekordError, Result};
use crate::model::{FieldMap, Record};
use crate::store::{RecordStore, StorageBackend};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileVault<B: StorageBackend> {
    records: RecordStore<B>,
    vault_dir: PathBuf,
}

impl<B: StorageBackend> FileVault<B> {
    /// Open the vault, creating its directory if needed. Two files may
    /// share a name, so the key field is `stored_path` (unique by
    /// construction); lookups are by id in practice.
    pub fn open(backend: B, vault_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&vault_dir).map_err(|e| {
            RekordError::Backend(format!(
                "cannot open vault dir {}: {}",
                vault_dir.display(),
                e
            ))
        })?;
        Ok(Self {
            records: RecordStore::with_backend(backend).with_key_field("stored_path"),
            vault_dir,
        })
    }

    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Copy `source` into the vault and record its metadata. Returns the
    /// new file record. On any failure the destination is cleaned up.
    pub fn add(&self, source: &Path, name: Option<&str>, description: Option<&str>) -> Result<Record> {
        if !source.is_file() {
            return Err(RekordError::NotFound(format!(
                "source file {} does not exist",
                source.display()
            )));
        }

        let original_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string();
        let display_name = name
            .map(str::to_string)
            .unwrap_or_else(|| original_name.clone());

        let id = crate::model::generate_id();
        let dest = self.vault_dir.join(format!("{}_{}", id, original_name));
        let size_bytes = copy_atomic(source, &dest)?;

        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), json!(display_name));
        fields.insert(
            "description".to_string(),
            json!(description.unwrap_or_default()),
        );
        fields.insert("original_name".to_string(), json!(original_name));
        fields.insert("size_bytes".to_string(), json!(size_bytes));
        fields.insert("stored_path".to_string(), json!(dest.to_string_lossy()));

        match self.records.create(fields) {
            Ok(record) => Ok(record),
            Err(e) => {
                // Don't leave an untracked file behind.
                let _ = fs::remove_file(&dest);
                Err(e)
            }
        }
    }

    pub fn list(&self) -> Result<Vec<Record>> {
        self.records.read_all()
    }

    pub fn get(&self, id: &str) -> Result<Option<Record>> {
        self.records.read_by_key(id)
    }

    /// Copy the stored bytes out to `dest`. Missing parent directories are
    /// created. Errors with `NotFound` if no record has this id.
    pub fn download(&self, id: &str, dest: &Path) -> Result<PathBuf> {
        let record = self
            .get(id)?
            .ok_or_else(|| RekordError::NotFound(format!("no file with id {}", id)))?;
        let stored = self.stored_path(&record)?;

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(RekordError::Io)?;
            }
        }
        copy_atomic(&stored, dest)?;
        Ok(dest.to_path_buf())
    }

    /// Merge metadata fields into the record. Returns the modified count
    /// (0 or 1). The stored bytes and path are untouched; `stored_path`,
    /// `original_name` and `size_bytes` cannot be overwritten.
    pub fn update_metadata(&self, id: &str, mut partial: FieldMap) -> Result<usize> {
        for owned in ["stored_path", "original_name", "size_bytes"] {
            partial.remove(owned);
        }
        match self.get(id)? {
            Some(record) => self.records.update(&record.id, partial),
            None => Ok(0),
        }
    }

    /// Remove a file and its record. Returns the removed count (0 or 1).
    pub fn remove(&self, id: &str) -> Result<usize> {
        let record = match self.get(id)? {
            Some(record) => record,
            None => return Ok(0),
        };
        if let Ok(stored) = self.stored_path(&record) {
            if stored.exists() {
                fs::remove_file(&stored).map_err(RekordError::Io)?;
            }
        }
        self.records.delete(&record.id)
    }

    /// Remove every file and record, returning how many were removed.
    pub fn remove_all(&self) -> Result<usize> {
        let mut removed = 0;
        for record in self.list()? {
            removed += self.remove(&record.id)?;
        }
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize> {
        self.records.count()
    }

    fn stored_path(&self, record: &Record) -> Result<PathBuf> {
        record
            .field_str("stored_path")
            .map(PathBuf::from)
            .ok_or_else(|| {
                RekordError::Api(format!("file record {} has no stored_path", record.id))
            })
    }
}

/// Copy `source` to `dest` via a sibling tmp file and a rename. On failure
/// the tmp file is removed and `dest` is never created or truncated.
fn copy_atomic(source: &Path, dest: &Path) -> Result<u64> {
    let dir = dest.parent().filter(|p| !p.as_os_str().is_empty());
    let tmp = match dir {
        Some(dir) => dir.join(format!(".copy-{}.tmp", Uuid::new_v4())),
        None => PathBuf::from(format!(".copy-{}.tmp", Uuid::new_v4())),
    };

    let size = match fs::copy(source, &tmp) {
        Ok(size) => size,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(RekordError::Io(e));
        }
    };
    if let Err(e) = fs::rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(RekordError::Io(e));
    }
    Ok(size)
}
