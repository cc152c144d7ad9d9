use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalizationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Header row has no \"id\" column")]
    MissingIdColumn,

    #[error("Missing header row: {0}")]
    MissingHeaderRow(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cleanup error: {0}")]
    CleanupError(String),
}

pub type Result<T> = std::result::Result<T, LocalizationError>;

impl From<walkdir::Error> for LocalizationError {
    fn from(e: walkdir::Error) -> Self {
        LocalizationError::CleanupError(e.to_string())
    }
}
