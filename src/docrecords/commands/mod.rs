use crate::config::RecordsConfig;
use crate::model::Record;
use std::path::PathBuf;
use uuid::Uuid;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod merge;
pub mod update;

#[derive(Debug, Clone)]
pub struct RecordsPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Position of a listing slice within the full (filtered) listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
}

/// JSONL payload produced by an export or merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonlExport {
    pub file_name: String,
    pub content: String,
    /// Requested ids that did not resolve to a record.
    pub skipped_ids: Vec<Uuid>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub page: Option<PageInfo>,
    pub export: Option<JsonlExport>,
    pub config: Option<RecordsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_export(mut self, export: JsonlExport) -> Self {
        self.export = Some(export);
        self
    }

    pub fn with_config(mut self, config: RecordsConfig) -> Self {
        self.config = Some(config);
        self
    }
}
