use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let records = store.read_all()?;
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result.with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldMap;
    use crate::store::memory::MemBackend;
    use serde_json::json;

    #[test]
    fn lists_in_insertion_order() {
        let store = RecordStore::with_backend(MemBackend::new());
        for email in ["a@x.com", "b@x.com"] {
            let mut fields = FieldMap::new();
            fields.insert("email".to_string(), json!(email));
            store.create(fields).unwrap();
        }

        let result = run(&store).unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.listed_records[0].field_str("email"), Some("a@x.com"));
    }

    #[test]
    fn empty_store_gets_info_message() {
        let store = RecordStore::with_backend(MemBackend::new());
        let result = run(&store).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
