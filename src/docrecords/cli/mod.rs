//! # CLI Layer
//!
//! One client of the docrecords api. The only place that parses arguments,
//! writes to stdout/stderr or installs a log subscriber.
//!
//! Records live in memory, so every `import` run starts from an empty store,
//! loads the directory it was given and works on that session only.

mod print;

use crate::args::{Cli, Commands, KindArg};
use directories::ProjectDirs;
use docrecords::api::{ConfigAction, ListFilter, RecordsApi, RecordsPaths};
use docrecords::config::RecordsConfig;
use docrecords::convert::SidecarConverter;
use docrecords::dto::{DownloadJsonlRequest, MergeJsonlRequest, RecordResponse};
use docrecords::error::{RecordsError, Result};
use docrecords::model::FileKind;
use docrecords::store::memory::InMemoryRecordStore;
use docrecords::store::RecordStore;
use print::{print_config, print_messages, print_records};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn, Level};

const CONFIG_DIR_ENV: &str = "DOCRECORDS_CONFIG_DIR";

type SessionApi = RecordsApi<InMemoryRecordStore>;

pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let mut api = init_context()?;

    match cli.command {
        Commands::Import {
            dir,
            kind,
            page,
            json,
            export_jsonl,
            export_archive,
        } => handle_import(
            &api,
            &dir,
            ImportOutput {
                kind,
                page,
                json,
                export_jsonl,
                export_archive,
            },
        ),
        Commands::Merge { files, output } => handle_merge(&api, &files, output),
        Commands::Config { key, value } => handle_config(&mut api, key, value),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "docrecords", "docrecords")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RecordsError::Config("Could not determine config dir".to_string()))
}

fn init_context() -> Result<SessionApi> {
    let config_dir = config_dir()?;
    debug!(dir = %config_dir.display(), "using config dir");
    let config = RecordsConfig::load(&config_dir)?;
    let paths = RecordsPaths { config_dir };
    Ok(RecordsApi::new(InMemoryRecordStore::new(), config, paths))
}

struct ImportOutput {
    kind: Option<KindArg>,
    page: Option<usize>,
    json: bool,
    export_jsonl: Option<PathBuf>,
    export_archive: Option<PathBuf>,
}

fn handle_import(api: &SessionApi, dir: &Path, out: ImportOutput) -> Result<()> {
    let converter = SidecarConverter::new(dir);

    for source in converter.source_files()? {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = fs::read(&source)?;

        match api.upload(&converter, &file_name, &bytes) {
            Ok(result) => {
                if !out.json {
                    print_messages(&result.messages);
                }
            }
            Err(RecordsError::Conversion(reason)) => {
                warn!(file = %file_name, "skipped: {}", reason);
            }
            Err(e) => return Err(e),
        }
    }

    let kind = out.kind.map(FileKind::from);
    let listing = match out.page {
        Some(page) => api.list_page(kind, page),
        None => api.list_records(&ListFilter { kind, page: None }),
    };

    if out.json {
        let responses: Vec<RecordResponse> =
            listing.listed_records.iter().map(RecordResponse::from).collect();
        println!("{}", serde_json::to_string_pretty(&responses)?);
    } else {
        print_records(&listing.listed_records, listing.page.as_ref());
    }

    let all_ids: Vec<_> = api.store().find_all().iter().map(|r| r.id).collect();
    if all_ids.is_empty() {
        if out.export_jsonl.is_some() || out.export_archive.is_some() {
            warn!("no records loaded, nothing to export");
        }
        return Ok(());
    }
    let request = DownloadJsonlRequest::new(all_ids);

    if let Some(path) = out.export_jsonl {
        let result = api.export_jsonl(&request)?;
        if let Some(export) = &result.export {
            fs::write(&path, &export.content)?;
        }
        if !out.json {
            print_messages(&result.messages);
            println!("Wrote {}", path.display());
        }
    }

    if let Some(path) = out.export_archive {
        let file = fs::File::create(&path)?;
        let result = api.export_archive(&request, file)?;
        if !out.json {
            print_messages(&result.messages);
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn handle_merge(api: &SessionApi, files: &[PathBuf], output: Option<PathBuf>) -> Result<()> {
    let contents = files
        .iter()
        .map(fs::read_to_string)
        .collect::<std::io::Result<Vec<_>>>()?;
    let result = api.merge_jsonl(&MergeJsonlRequest::new(contents))?;

    if let Some(export) = &result.export {
        let path = output.unwrap_or_else(|| PathBuf::from(&export.file_name));
        fs::write(&path, &export.content)?;
        print_messages(&result.messages);
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn handle_config(api: &mut SessionApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let shown_key = match &action {
        ConfigAction::ShowKey(key) => Some(key.clone()),
        _ => None,
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config, shown_key.as_deref());
    }
    print_messages(&result.messages);
    Ok(())
}
