//! Vault commands: file CRUD, mirroring the record commands but routed
//! through [`FileVault`].

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FieldMap;
use crate::store::StorageBackend;
use crate::vault::FileVault;
use std::path::{Path, PathBuf};

pub fn add<B: StorageBackend>(
    vault: &FileVault<B>,
    source: &Path,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<CmdResult> {
    let record = vault.add(source, name, description)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File stored with id: {}",
        record.id
    )));
    result.affected_records.push(record);
    Ok(result)
}

pub fn list<B: StorageBackend>(vault: &FileVault<B>) -> Result<CmdResult> {
    let records = vault.list()?;
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No files found."));
    }
    Ok(result.with_listed_records(records))
}

pub fn get<B: StorageBackend>(vault: &FileVault<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match vault.get(id)? {
        Some(record) => result.listed_records.push(record),
        None => result.add_message(CmdMessage::warning(format!("No file with id {:?}.", id))),
    }
    Ok(result)
}

pub fn download<B: StorageBackend>(
    vault: &FileVault<B>,
    id: &str,
    dest: Option<PathBuf>,
) -> Result<CmdResult> {
    // Default destination mirrors the stored file's original name.
    let dest = match dest {
        Some(dest) => dest,
        None => {
            let record = vault.get(id)?;
            let name = record
                .as_ref()
                .and_then(|r| r.field_str("original_name"))
                .unwrap_or("download");
            PathBuf::from("downloads").join(name)
        }
    };

    let written = vault.download(id, &dest)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File saved to {}",
        written.display()
    )));
    result.file_paths.push(written);
    Ok(result)
}

pub fn update<B: StorageBackend>(
    vault: &FileVault<B>,
    id: &str,
    partial: FieldMap,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if partial.is_empty() {
        result.add_message(CmdMessage::info("No updates provided."));
        return Ok(result.with_count(0));
    }

    let modified = vault.update_metadata(id, partial)?;
    if modified > 0 {
        result.add_message(CmdMessage::success("File metadata updated."));
    } else {
        result.add_message(CmdMessage::warning(format!("No file with id {:?}.", id)));
    }
    Ok(result.with_count(modified))
}

pub fn remove<B: StorageBackend>(vault: &FileVault<B>, id: &str) -> Result<CmdResult> {
    let removed = vault.remove(id)?;
    let mut result = CmdResult::default();
    if removed > 0 {
        result.add_message(CmdMessage::success("File deleted."));
    } else {
        result.add_message(CmdMessage::warning(format!("No file with id {:?}.", id)));
    }
    Ok(result.with_count(removed))
}

pub fn purge<B: StorageBackend>(vault: &FileVault<B>) -> Result<CmdResult> {
    let removed = vault.remove_all()?;
    let mut result = CmdResult::default();
    if removed > 0 {
        result.add_message(CmdMessage::success(format!("Deleted {} files.", removed)));
    } else {
        result.add_message(CmdMessage::info("Vault is already empty."));
    }
    Ok(result.with_count(removed))
}

pub fn stats<B: StorageBackend>(vault: &FileVault<B>) -> Result<CmdResult> {
    let count = vault.count()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Total files: {}", count)));
    Ok(result.with_count(count))
}
