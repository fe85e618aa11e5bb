use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RecordsError>;
