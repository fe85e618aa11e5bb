//! JSONL export of stored records.
//!
//! Ids that do not resolve are skipped: the export carries whatever did
//! resolve, lists the skipped ids in [`JsonlExport::skipped_ids`] and adds a
//! warning message. An export never fails because of a missing record.

use crate::commands::{CmdMessage, CmdResult, JsonlExport};
use crate::config::RecordsConfig;
use crate::dto::DownloadJsonlRequest;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashSet;
use std::io::Write;
use tracing::warn;
use uuid::Uuid;

/// Concatenate the JSONL of every resolved record, in request order.
pub fn jsonl<S: RecordStore>(
    store: &S,
    request: &DownloadJsonlRequest,
    config: &RecordsConfig,
) -> Result<CmdResult> {
    request.validate()?;
    let (records, skipped_ids) = resolve(store, &request.record_ids);

    let file_name = match records.as_slice() {
        [single] => export_file_name(single, config),
        _ => config.fallback_export_name.clone(),
    };
    let content = join_fragments(records.iter().map(|r| r.jsonl_content.as_str()));

    let mut result = CmdResult::default();
    report(&mut result, records.len(), &skipped_ids);
    Ok(result
        .with_affected_records(records)
        .with_export(JsonlExport {
            file_name,
            content,
            skipped_ids,
        }))
}

/// Write a gzip'd tar with one JSONL file per resolved record.
pub fn archive<S: RecordStore, W: Write>(
    store: &S,
    request: &DownloadJsonlRequest,
    config: &RecordsConfig,
    writer: W,
) -> Result<CmdResult> {
    request.validate()?;
    let (records, skipped_ids) = resolve(store, &request.record_ids);

    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);
    let mut used_names = HashSet::new();

    for record in &records {
        let mut entry_name = export_file_name(record, config);
        if !used_names.insert(entry_name.clone()) {
            entry_name = disambiguate(&entry_name, &record.id, &config.export_file_ext);
            used_names.insert(entry_name.clone());
        }
        let content = join_fragments(std::iter::once(record.jsonl_content.as_str()));

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        tar.append_data(&mut header, entry_name, content.as_bytes())?;
    }

    tar.into_inner()?.finish()?;

    let mut result = CmdResult::default();
    report(&mut result, records.len(), &skipped_ids);
    Ok(result.with_affected_records(records))
}

/// Download name for a single record: its title (or file name when the
/// title is blank) without extension, plus the configured export extension.
pub fn export_file_name(record: &Record, config: &RecordsConfig) -> String {
    let title = if record.original_title.trim().is_empty() {
        record.file_name.trim()
    } else {
        record.original_title.trim()
    };
    let base = match title.rfind('.') {
        Some(dot) if dot > 0 => &title[..dot],
        _ => title,
    };

    if base.is_empty() {
        config.fallback_export_name.clone()
    } else {
        format!("{}{}", base, config.export_file_ext)
    }
}

/// Joins JSONL fragments with single newlines; blank fragments are dropped
/// and the result ends with a newline unless it is empty.
pub(crate) fn join_fragments<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for fragment in fragments {
        let trimmed = fragment.trim_end_matches(['\n', '\r']);
        if trimmed.trim().is_empty() {
            continue;
        }
        out.push_str(trimmed);
        out.push('\n');
    }
    out
}

fn resolve<S: RecordStore>(store: &S, ids: &[Uuid]) -> (Vec<Record>, Vec<Uuid>) {
    let mut records = Vec::with_capacity(ids.len());
    let mut skipped = Vec::new();
    for id in ids {
        match store.find_by_id(id) {
            Some(record) => records.push(record),
            None => skipped.push(*id),
        }
    }
    (records, skipped)
}

fn disambiguate(name: &str, id: &Uuid, ext: &str) -> String {
    let stem = name.strip_suffix(ext).unwrap_or(name);
    format!("{}-{}{}", stem, &id.simple().to_string()[..8], ext)
}

fn report(result: &mut CmdResult, exported: usize, skipped: &[Uuid]) {
    if !skipped.is_empty() {
        warn!(skipped = skipped.len(), "export skipped unknown records");
        let ids: Vec<String> = skipped.iter().map(Uuid::to_string).collect();
        result.add_message(CmdMessage::warning(format!(
            "Skipped unknown records: {}",
            ids.join(", ")
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} record(s)",
        exported
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{base_time, record_at, StoreFixture};
    use crate::store::memory::InMemoryRecordStore;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn titled(title: &str, file_name: &str) -> Record {
        let mut record = record_at(file_name, "xlsx", base_time());
        record.original_title = title.to_string();
        record
    }

    #[test]
    fn export_name_strips_extension() {
        let config = RecordsConfig::default();
        assert_eq!(export_file_name(&titled("Budget.xlsx", "b.xlsx"), &config), "Budget.jsonl");
        assert_eq!(export_file_name(&titled("v1.2 notes", "x"), &config), "v1.jsonl");
        assert_eq!(export_file_name(&titled(".env", "x"), &config), ".env.jsonl");
        assert_eq!(export_file_name(&titled("  ", "sales.csv"), &config), "sales.jsonl");
        assert_eq!(export_file_name(&titled("", ""), &config), "converted.jsonl");
    }

    #[test]
    fn joins_fragments_with_single_newlines() {
        let joined = join_fragments(["{\"a\":1}\n", "", "{\"b\":2}\n{\"c\":3}", "\n"].into_iter());
        assert_eq!(joined, "{\"a\":1}\n{\"b\":2}\n{\"c\":3}\n");
    }

    #[test]
    fn exports_in_request_order_and_skips_unknown() {
        let fixture = StoreFixture::new()
            .with_record("first.xlsx", "xlsx")
            .with_record("second.csv", "csv");
        let ids = fixture.ids_oldest_first();
        let missing = Uuid::new_v4();
        let request = DownloadJsonlRequest::new(vec![ids[1], missing, ids[0]]);

        let result = jsonl(&fixture.store, &request, &RecordsConfig::default()).unwrap();
        let export = result.export.unwrap();

        assert_eq!(export.content, "{\"title\":\"second\"}\n{\"title\":\"first\"}\n");
        assert_eq!(export.file_name, "converted.jsonl");
        assert_eq!(export.skipped_ids, vec![missing]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains(&missing.to_string())));
    }

    #[test]
    fn single_record_export_is_named_after_it() {
        let fixture = StoreFixture::new().with_record("Budget.xlsx", "xlsx");
        let request = DownloadJsonlRequest::new(fixture.ids_oldest_first());

        let result = jsonl(&fixture.store, &request, &RecordsConfig::default()).unwrap();
        assert_eq!(result.export.unwrap().file_name, "Budget.jsonl");
    }

    #[test]
    fn empty_request_is_rejected() {
        let store = InMemoryRecordStore::new();
        let request = DownloadJsonlRequest::new(vec![]);
        assert!(jsonl(&store, &request, &RecordsConfig::default()).is_err());
    }

    #[test]
    fn archive_holds_one_entry_per_record() {
        let store = InMemoryRecordStore::new();
        let a = store.save(titled("Report", "a.xlsx"));
        let b = store.save(titled("Report", "b.xlsx"));
        let request = DownloadJsonlRequest::new(vec![a.id, b.id]);

        let mut buf = Vec::new();
        let result = archive(&store, &request, &RecordsConfig::default(), &mut buf).unwrap();
        assert_eq!(result.affected_records.len(), 2);

        let mut tar = tar::Archive::new(GzDecoder::new(buf.as_slice()));
        let mut entries = Vec::new();
        for entry in tar.entries().unwrap() {
            let mut entry = entry.unwrap();
            let name = entry.path().unwrap().to_string_lossy().to_string();
            let mut content = String::new();
            entry.read_to_string(&mut content).unwrap();
            entries.push((name, content));
        }

        let second_name = format!("Report-{}.jsonl", &b.id.simple().to_string()[..8]);
        assert_eq!(
            entries,
            vec![
                ("Report.jsonl".to_string(), "{\"title\":\"a\"}\n".to_string()),
                (second_name, "{\"title\":\"b\"}\n".to_string()),
            ]
        );
    }
}
