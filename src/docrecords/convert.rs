//! Document conversion contract.
//!
//! Turning a spreadsheet or word-processor file into HTML and JSONL happens
//! outside this crate. A [`DocumentConverter`] is whatever does that work;
//! the record layer only consumes its [`ConvertedDocument`] output and never
//! sees a failed conversion.
//!
//! [`SidecarConverter`] covers the case where the conversion already ran and
//! left `<stem>.html` and `<stem>.jsonl` next to the source file.

use crate::error::{RecordsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const HTML_EXT: &str = "html";
pub const JSONL_EXT: &str = "jsonl";

/// Output of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    pub original_title: String,
    pub file_type: String,
    pub html_content: String,
    pub jsonl_content: String,
}

pub trait DocumentConverter {
    fn convert(&self, file_name: &str, bytes: &[u8]) -> Result<ConvertedDocument>;
}

/// Reads pre-rendered HTML/JSONL artifacts sitting next to the source file.
#[derive(Debug, Clone)]
pub struct SidecarConverter {
    dir: PathBuf,
}

impl SidecarConverter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Source files in the directory: everything that is not itself an artifact.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let mut sources = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() || is_artifact(&path) {
                continue;
            }
            sources.push(path);
        }
        sources.sort();
        Ok(sources)
    }

    fn read_artifact(&self, stem: &str, ext: &str) -> Result<String> {
        let path = self.dir.join(format!("{}.{}", stem, ext));
        if !path.exists() {
            return Err(RecordsError::Conversion(format!(
                "missing {} artifact: {}",
                ext,
                path.display()
            )));
        }
        Ok(fs::read_to_string(path)?)
    }
}

impl DocumentConverter for SidecarConverter {
    fn convert(&self, file_name: &str, _bytes: &[u8]) -> Result<ConvertedDocument> {
        let path = Path::new(file_name);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RecordsError::Conversion(format!("unusable file name: {}", file_name)))?;
        let file_type = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        Ok(ConvertedDocument {
            original_title: stem.to_string(),
            file_type,
            html_content: self.read_artifact(stem, HTML_EXT)?,
            jsonl_content: self.read_artifact(stem, JSONL_EXT)?,
        })
    }
}

fn is_artifact(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if name.starts_with('.') {
        return true;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(HTML_EXT) | Some(JSONL_EXT)
    )
}
