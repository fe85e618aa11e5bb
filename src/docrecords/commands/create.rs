use crate::commands::{CmdMessage, CmdResult};
use crate::convert::DocumentConverter;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;
use tracing::{info, warn};

/// Store a fully populated record.
pub fn run<S: RecordStore>(store: &S, record: Record) -> CmdResult {
    let record = store.save(record);
    info!(id = %record.id, file = %record.file_name, "record created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record created: {} ({})",
        record.file_name, record.id
    )));
    result.with_affected_records(vec![record])
}

/// Convert an uploaded file and store the result. A failed conversion
/// leaves the store untouched.
pub fn from_upload<S: RecordStore, C: DocumentConverter + ?Sized>(
    store: &S,
    converter: &C,
    file_name: &str,
    bytes: &[u8],
) -> Result<CmdResult> {
    let converted = converter.convert(file_name, bytes).inspect_err(|e| {
        warn!(file = file_name, error = %e, "conversion failed");
    })?;
    Ok(run(store, Record::new(file_name.to_string(), converted)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConvertedDocument;
    use crate::error::RecordsError;
    use crate::store::memory::InMemoryRecordStore;

    struct FixedConverter;

    impl DocumentConverter for FixedConverter {
        fn convert(&self, file_name: &str, bytes: &[u8]) -> Result<ConvertedDocument> {
            if bytes.is_empty() {
                return Err(RecordsError::Conversion(format!("{} is empty", file_name)));
            }
            Ok(ConvertedDocument {
                original_title: "Quarterly".into(),
                file_type: "xlsx".into(),
                html_content: "<table/>".into(),
                jsonl_content: "{\"q\":1}".into(),
            })
        }
    }

    #[test]
    fn creates_record_from_upload() {
        let store = InMemoryRecordStore::new();
        let result = from_upload(&store, &FixedConverter, "q.xlsx", b"data").unwrap();

        let created = &result.affected_records[0];
        assert_eq!(created.file_name, "q.xlsx");
        assert_eq!(created.original_title, "Quarterly");
        assert_eq!(store.find_by_id(&created.id).as_ref(), Some(created));
    }

    #[test]
    fn failed_conversion_does_not_touch_store() {
        let store = InMemoryRecordStore::new();
        let err = from_upload(&store, &FixedConverter, "q.xlsx", b"").unwrap_err();

        assert!(matches!(err, RecordsError::Conversion(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn uploads_never_share_ids() {
        let store = InMemoryRecordStore::new();
        for _ in 0..20 {
            from_upload(&store, &FixedConverter, "q.xlsx", b"data").unwrap();
        }
        assert_eq!(store.len(), 20);
    }
}
