//! # API Facade
//!
//! The single entry point for record operations, whatever the front end
//! (HTTP handlers, the CLI, tests). It dispatches to `commands/*.rs`, runs
//! request validation, and returns structured `Result<CmdResult>` values.
//! It holds no business logic and performs no output.
//!
//! `RecordsApi<S: RecordStore>` is generic over the store and only needs
//! `&self` for record operations, so a single instance (or several sharing an
//! `Arc` store) can serve concurrent callers.

use crate::commands;
use crate::config::RecordsConfig;
use crate::convert::DocumentConverter;
use crate::dto::{DownloadJsonlRequest, MergeJsonlRequest, UpdateHtmlRequest};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;
use std::io::Write;
use uuid::Uuid;

pub struct RecordsApi<S: RecordStore> {
    store: S,
    config: RecordsConfig,
    paths: commands::RecordsPaths,
}

impl<S: RecordStore> RecordsApi<S> {
    pub fn new(store: S, config: RecordsConfig, paths: commands::RecordsPaths) -> Self {
        Self {
            store,
            config,
            paths,
        }
    }

    pub fn create_record(&self, record: Record) -> CmdResult {
        commands::create::run(&self.store, record)
    }

    pub fn upload<C: DocumentConverter + ?Sized>(
        &self,
        converter: &C,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<CmdResult> {
        commands::create::from_upload(&self.store, converter, file_name, bytes)
    }

    pub fn list_records(&self, filter: &ListFilter) -> CmdResult {
        commands::list::run(&self.store, filter)
    }

    /// Listing page using the configured page size.
    pub fn list_page(&self, kind: Option<crate::model::FileKind>, page: usize) -> CmdResult {
        let filter = ListFilter {
            kind,
            page: Some(Page::new(page, self.config.page_size)),
        };
        commands::list::run(&self.store, &filter)
    }

    pub fn get_record(&self, id: &Uuid) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn update_html(&self, request: &UpdateHtmlRequest) -> Result<CmdResult> {
        commands::update::run(&self.store, request)
    }

    pub fn delete_record(&self, id: &Uuid) -> CmdResult {
        commands::delete::one(&self.store, id)
    }

    pub fn delete_records(&self, ids: &[Uuid]) -> CmdResult {
        commands::delete::many(&self.store, ids)
    }

    pub fn export_jsonl(&self, request: &DownloadJsonlRequest) -> Result<CmdResult> {
        commands::export::jsonl(&self.store, request, &self.config)
    }

    pub fn export_archive<W: Write>(
        &self,
        request: &DownloadJsonlRequest,
        writer: W,
    ) -> Result<CmdResult> {
        commands::export::archive(&self.store, request, &self.config, writer)
    }

    pub fn merge_jsonl(&self, request: &MergeJsonlRequest) -> Result<CmdResult> {
        commands::merge::contents(request, &self.config)
    }

    pub fn merge_records(&self, ids: &[Uuid]) -> Result<CmdResult> {
        commands::merge::records(&self.store, ids, &self.config)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn current_config(&self) -> &RecordsConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::{ListFilter, Page};
pub use commands::{CmdMessage, CmdResult, JsonlExport, MessageLevel, PageInfo, RecordsPaths};
