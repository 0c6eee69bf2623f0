use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::forward::{ForwardOutcome, Forwarder};
use crate::model::FieldMap;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    fields: FieldMap,
    forwarder: Option<&dyn Forwarder>,
) -> Result<CmdResult> {
    let record = store.create(fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record created with id: {}",
        record.id
    )));

    // Best-effort forwarding: report failures, never fail the create.
    if let Some(forwarder) = forwarder {
        if let ForwardOutcome::Failed(reason) = forwarder.forward(&record) {
            result.add_message(CmdMessage::warning(format!(
                "Record stored but not forwarded: {}",
                reason
            )));
        }
    }

    result.affected_records.push(record);
    Ok(result)
}
