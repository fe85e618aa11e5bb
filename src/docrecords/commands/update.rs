use crate::commands::{CmdMessage, CmdResult};
use crate::dto::UpdateHtmlRequest;
use crate::error::{RecordsError, Result};
use crate::store::RecordStore;
use tracing::info;

/// Replace a record's HTML. Everything else, `created_at` included, is kept.
pub fn run<S: RecordStore>(store: &S, request: &UpdateHtmlRequest) -> Result<CmdResult> {
    request.validate()?;

    let record = store
        .find_by_id(&request.record_id)
        .ok_or(RecordsError::RecordNotFound(request.record_id))?;
    let updated = store.save(record.with_html(request.html_content.as_str()));
    info!(id = %updated.id, "html updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "HTML updated: {}",
        updated.file_name
    )));
    Ok(result.with_affected_records(vec![updated]))
}
