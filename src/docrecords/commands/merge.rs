use crate::commands::{CmdMessage, CmdResult, JsonlExport};
use crate::config::RecordsConfig;
use crate::dto::{MergeJsonlRequest, MIN_MERGE_INPUTS};
use crate::error::{RecordsError, Result};
use crate::model::FileKind;
use crate::store::RecordStore;
use tracing::info;
use uuid::Uuid;

/// Merge raw JSONL documents into one, keeping line order.
pub fn contents(request: &MergeJsonlRequest, config: &RecordsConfig) -> Result<CmdResult> {
    request.validate()?;
    let labeled: Vec<(String, &str)> = request
        .contents
        .iter()
        .enumerate()
        .map(|(i, c)| (format!("input {}", i + 1), c.as_str()))
        .collect();
    let merged = merge_lines(&labeled)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Merged {} documents",
        request.contents.len()
    )));
    Ok(result.with_export(JsonlExport {
        file_name: config.merged_file_name.clone(),
        content: merged,
        skipped_ids: Vec::new(),
    }))
}

/// Merge the JSONL of stored JSON records. Other kinds and unknown ids are
/// skipped; at least two JSON records must remain.
pub fn records<S: RecordStore>(
    store: &S,
    ids: &[Uuid],
    config: &RecordsConfig,
) -> Result<CmdResult> {
    let mut selected = Vec::new();
    let mut skipped_ids = Vec::new();
    for id in ids {
        match store.find_by_id(id) {
            Some(record) if record.kind() == FileKind::Json => selected.push(record),
            _ => skipped_ids.push(*id),
        }
    }

    if selected.len() < MIN_MERGE_INPUTS {
        return Err(RecordsError::Validation(format!(
            "at least {} JSON records are required to merge, got {}",
            MIN_MERGE_INPUTS,
            selected.len()
        )));
    }

    let labeled: Vec<(String, &str)> = selected
        .iter()
        .map(|r| (r.file_name.clone(), r.jsonl_content.as_str()))
        .collect();
    let merged = merge_lines(&labeled)?;
    info!(merged = selected.len(), skipped = skipped_ids.len(), "records merged");

    let mut result = CmdResult::default();
    if !skipped_ids.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} selected record(s) are not JSON and were left out",
            skipped_ids.len()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Merged {} records",
        selected.len()
    )));
    Ok(result
        .with_export(JsonlExport {
            file_name: config.merged_file_name.clone(),
            content: merged,
            skipped_ids,
        })
        .with_affected_records(selected))
}

fn merge_lines(inputs: &[(String, &str)]) -> Result<String> {
    let mut merged = String::new();
    for (label, content) in inputs {
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                RecordsError::Validation(format!(
                    "{} line {} is not valid JSON: {}",
                    label,
                    line_no + 1,
                    e
                ))
            })?;
            merged.push_str(line);
            merged.push('\n');
        }
    }
    Ok(merged)
}
