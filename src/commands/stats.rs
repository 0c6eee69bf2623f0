use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let count = store.count()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Total records: {}", count)));
    Ok(result.with_count(count))
}
