use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scenario JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write CSV report: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unsupported codec '{0}' (expected 64, 32 or 8 kbps)")]
    UnsupportedCodec(String),

    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    #[error("No daily traffic given for node '{0}'")]
    MissingTraffic(String),
}

impl Error {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput { field: field.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
