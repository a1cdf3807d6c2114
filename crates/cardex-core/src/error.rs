//! Error types for the cardex-core library.

use thiserror::Error;

/// Main error type for the cardex library.
#[derive(Error, Debug)]
pub enum CardexError {
    /// OCR collaborator failed to turn an image into fragments.
    #[error("recognition failed: {0}")]
    Recognition(#[from] RecognitionError),

    /// Record store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for `CardexConfig`.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the OCR collaborator.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Image bytes could not be decoded or re-encoded.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The recognition engine itself failed.
    #[error("engine failure: {0}")]
    Engine(String),
}

/// Errors raised by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error (I/O, constraint violation, malformed row).
    #[cfg(feature = "native")]
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Filesystem error around the database file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the cardex library.
pub type Result<T> = std::result::Result<T, CardexError>;
