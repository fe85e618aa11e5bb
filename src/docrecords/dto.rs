//! Transfer objects exchanged with whatever sits in front of the api
//! (HTTP handlers, the CLI). They validate shape only; existence checks
//! happen in the command layer.

use crate::error::{RecordsError, Result};
use crate::model::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default read projection of a record. `jsonl_content` is export-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub id: Uuid,
    pub file_name: String,
    pub original_title: String,
    pub file_type: String,
    pub html_content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Record> for RecordResponse {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            file_name: record.file_name.clone(),
            original_title: record.original_title.clone(),
            file_type: record.file_type.clone(),
            html_content: record.html_content.clone(),
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHtmlRequest {
    pub record_id: Uuid,
    pub html_content: String,
}

impl UpdateHtmlRequest {
    pub fn new(record_id: Uuid, html_content: impl Into<String>) -> Self {
        Self {
            record_id,
            html_content: html_content.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.html_content.trim().is_empty() {
            return Err(RecordsError::Validation(
                "htmlContent must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadJsonlRequest {
    pub record_ids: Vec<Uuid>,
}

impl DownloadJsonlRequest {
    pub fn new(record_ids: Vec<Uuid>) -> Self {
        Self { record_ids }
    }

    pub fn validate(&self) -> Result<()> {
        if self.record_ids.is_empty() {
            return Err(RecordsError::Validation(
                "recordIds must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Raw JSONL documents to merge. Serialized as a bare JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergeJsonlRequest {
    pub contents: Vec<String>,
}

pub const MIN_MERGE_INPUTS: usize = 2;

impl MergeJsonlRequest {
    pub fn new(contents: Vec<String>) -> Self {
        Self { contents }
    }

    pub fn validate(&self) -> Result<()> {
        if self.contents.len() < MIN_MERGE_INPUTS {
            return Err(RecordsError::Validation(format!(
                "at least {} JSONL documents are required to merge",
                MIN_MERGE_INPUTS
            )));
        }
        Ok(())
    }
}
