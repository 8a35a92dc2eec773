use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnderwritingError {
    #[error("Invalid data structure: {0}")]
    InvalidStructure(String),

    #[error("Expected a JSON object as financial document, got {0}")]
    NotADocument(String),

    #[error("Unknown scoring model: {0}")]
    UnknownModel(String),

    #[error("Unknown flag code: {0}")]
    UnknownFlag(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UnderwritingError>;
