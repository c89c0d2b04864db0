/// Error types for note-insight
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("활성 파일이 없습니다.")]
    NoActiveNote,

    #[error("노트 내용이 비어 있습니다.")]
    EmptyNote,

    #[error("{0}")]
    MissingCredential(String),

    #[error("File already exists: {0}")]
    NoteExists(String),

    #[error("LLM service error: {0}")]
    Llm(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Failures detected before any provider was contacted
    pub fn is_precondition(&self) -> bool {
        matches!(self, AppError::NoActiveNote | AppError::EmptyNote)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
