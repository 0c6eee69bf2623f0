use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, key: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.read_by_key(key)? {
        Some(record) => result.listed_records.push(record),
        None => result.add_message(CmdMessage::warning(format!(
            "No record found for key {:?}.",
            key
        ))),
    }
    Ok(result)
}
