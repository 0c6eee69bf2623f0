use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FieldMap;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    key: &str,
    partial: FieldMap,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if partial.is_empty() {
        result.add_message(CmdMessage::info("No updates provided."));
        return Ok(result.with_count(0));
    }

    let modified = store.update(key, partial)?;
    if modified > 0 {
        result.add_message(CmdMessage::success("Record updated."));
        if let Some(record) = store.read_by_key(key)? {
            result.affected_records.push(record);
        }
    } else {
        result.add_message(CmdMessage::warning(format!(
            "No record found for key {:?}; nothing updated.",
            key
        )));
    }
    Ok(result.with_count(modified))
}
