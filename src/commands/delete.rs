use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, key: &str) -> Result<CmdResult> {
    let removed = store.delete(key)?;
    let mut result = CmdResult::default();
    if removed > 0 {
        result.add_message(CmdMessage::success("Record deleted."));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "No record found for key {:?}; nothing deleted.",
            key
        )));
    }
    Ok(result.with_count(removed))
}
