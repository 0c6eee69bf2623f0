use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

/// Remove every record. Irreversible; any confirmation prompt is the
/// caller's job, so this command is pure.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let removed = store.delete_all()?;
    let mut result = CmdResult::default();
    if removed > 0 {
        result.add_message(CmdMessage::success(format!("Deleted {} records.", removed)));
    } else {
        result.add_message(CmdMessage::info("Store is already empty."));
    }
    Ok(result.with_count(removed))
}
