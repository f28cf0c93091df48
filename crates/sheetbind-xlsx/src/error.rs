//! Container I/O error types

use thiserror::Error;

/// Result type for container I/O operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while loading or persisting a container
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not a recognized spreadsheet container
    #[error("Invalid spreadsheet container: {0}")]
    Format(#[from] calamine::Error),

    /// Persisting the container failed
    #[error("Write error: {0}")]
    Write(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetbind_core::Error),
}
