use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Invalid entry {id}: {reason}")]
    InvalidEntry { id: u64, reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("No entry with id {0}")]
    NotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV encoding error: {0}")]
    CsvEncoding(String),
}

impl EntryError {
    pub fn invalid(id: u64, reason: impl Into<String>) -> Self {
        EntryError::InvalidEntry { id, reason: reason.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        EntryError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, EntryError>;
