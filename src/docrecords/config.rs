use crate::error::{RecordsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_EXPORT_EXT: &str = ".jsonl";
const DEFAULT_FALLBACK_EXPORT_NAME: &str = "converted.jsonl";
const DEFAULT_MERGED_FILE_NAME: &str = "merged.jsonl";

/// Configuration for docrecords, stored as `config.json` in the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordsConfig {
    /// Records per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Extension given to exported JSONL files
    #[serde(default = "default_export_ext")]
    pub export_file_ext: String,

    /// Name used when an export spans several records or has no usable title
    #[serde(default = "default_fallback_export_name")]
    pub fallback_export_name: String,

    #[serde(default = "default_merged_file_name")]
    pub merged_file_name: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_export_ext() -> String {
    DEFAULT_EXPORT_EXT.to_string()
}

fn default_fallback_export_name() -> String {
    DEFAULT_FALLBACK_EXPORT_NAME.to_string()
}

fn default_merged_file_name() -> String {
    DEFAULT_MERGED_FILE_NAME.to_string()
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            export_file_ext: default_export_ext(),
            fallback_export_name: default_fallback_export_name(),
            merged_file_name: default_merged_file_name(),
        }
    }
}

impl RecordsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RecordsConfig = serde_json::from_str(&content)?;
        if config.page_size == 0 {
            return Err(RecordsError::Config(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Set the export extension (normalizes to start with a dot)
    pub fn set_export_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.export_file_ext = ext.to_string();
        } else {
            self.export_file_ext = format!(".{}", ext);
        }
    }

    pub fn set_page_size(&mut self, value: &str) -> Result<()> {
        match value.parse::<usize>() {
            Ok(size) if size > 0 => {
                self.page_size = size;
                Ok(())
            }
            _ => Err(RecordsError::Config(format!(
                "page-size must be a positive integer, got '{}'",
                value
            ))),
        }
    }

    /// Value of a config key as shown to users, if the key exists.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "export-ext" => Some(self.export_file_ext.clone()),
            "fallback-export-name" => Some(self.fallback_export_name.clone()),
            "merged-file-name" => Some(self.merged_file_name.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => self.set_page_size(value)?,
            "export-ext" => self.set_export_file_ext(value),
            "fallback-export-name" => self.fallback_export_name = value.to_string(),
            "merged-file-name" => self.merged_file_name = value.to_string(),
            other => {
                return Err(RecordsError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "page-size",
            "export-ext",
            "fallback-export-name",
            "merged-file-name",
        ]
    }
}
