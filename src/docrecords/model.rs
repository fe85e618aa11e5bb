use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::convert::ConvertedDocument;

/// Coarse classification of a record's `file_type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    Spreadsheet,
    Document,
    Json,
    Other,
}

impl FileKind {
    pub fn from_file_type(file_type: &str) -> Self {
        match file_type.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "xls" | "csv" => FileKind::Spreadsheet,
            "docx" | "doc" => FileKind::Document,
            "json" | "jsonl" => FileKind::Json,
            _ => FileKind::Other,
        }
    }
}

/// A converted document: the uploaded file's metadata plus its HTML and
/// JSONL renderings.
///
/// `id` and `created_at` are fixed at construction. Only `html_content` is
/// meant to change afterwards (see [`Record::with_html`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub file_name: String,
    pub original_title: String,
    pub file_type: String,
    pub html_content: String,
    pub jsonl_content: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    pub fn new(file_name: String, converted: ConvertedDocument) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name,
            original_title: converted.original_title,
            file_type: converted.file_type,
            html_content: converted.html_content,
            jsonl_content: converted.jsonl_content,
            created_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_file_type(&self.file_type)
    }

    /// Returns a copy with the HTML replaced, keeping identity and creation time.
    pub fn with_html(&self, html_content: impl Into<String>) -> Self {
        Self {
            html_content: html_content.into(),
            ..self.clone()
        }
    }
}
