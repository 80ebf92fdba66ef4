use thiserror::Error;

/// Errors related to the core domain types.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors raised by [`Repository`](crate::Repository) implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced by the [`Shortener`](crate::Shortener) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShortenerError {
    #[error("url is required")]
    EmptyInput,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("no free short code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
